use crate::weather::{ForecastData, format_temp};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct IndexPageProps {
    pub data: ForecastData,
    pub on_select: Callback<AttrValue>,
}

/// Landing overview: one card per known location with its current conditions.
/// Activating a card reports the location id so the shell can open the detail
/// view for it.
#[function_component(IndexPage)]
pub fn index_page(props: &IndexPageProps) -> Html {
    let cards = props
        .data
        .locations
        .iter()
        .map(|loc| {
            let id = AttrValue::from(loc.id.clone());
            let on_select = props.on_select.clone();
            let open_detail = Callback::from(move |_| on_select.emit(id.clone()));
            html! {
                <button
                    class="location-card"
                    data-testid={format!("location-{}", loc.id)}
                    onclick={open_detail}
                >
                    <span class="location-name">{ &loc.name }</span>
                    <span class="location-sky">
                        { loc.current.sky.glyph() }{ " " }{ loc.current.sky.label() }
                    </span>
                    <span class="location-temp">{ format_temp(loc.current.temp_c) }</span>
                </button>
            }
        })
        .collect::<Html>();

    let body = if props.data.locations.is_empty() {
        html! { <p class="empty-note">{ "No forecast data available." }</p> }
    } else {
        html! { <div class="location-grid">{ cards }</div> }
    };

    html! {
        <section class="panel index-screen" data-testid="index-screen">
            <h1>{ "Today" }</h1>
            { body }
        </section>
    }
}
