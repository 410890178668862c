use crate::weather::{LocationReport, format_temp};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WeatherDetailPageProps {
    /// Report for the selected location; `None` when the dataset has no entry
    /// for the requested id.
    pub report: Option<LocationReport>,
    pub on_back: Callback<()>,
}

#[function_component(WeatherDetailPage)]
pub fn weather_detail_page(props: &WeatherDetailPageProps) -> Html {
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let title = props
        .report
        .as_ref()
        .map_or_else(|| String::from("Weather detail"), |r| r.name.clone());

    let body = props.report.as_ref().map_or_else(
        || {
            html! {
                <p class="empty-note" data-testid="detail-empty">
                    { "No forecast for this location." }
                </p>
            }
        },
        |report| {
            let hourly = report
                .hourly
                .iter()
                .map(|slot| {
                    html! {
                        <li class="hourly-slot">
                            <span class="hour">{ format!("{:02}:00", slot.hour) }</span>
                            <span class="sky">{ slot.sky.glyph() }</span>
                            <span class="temp">{ format_temp(slot.temp_c) }</span>
                        </li>
                    }
                })
                .collect::<Html>();
            let daily = report
                .daily
                .iter()
                .map(|day| {
                    html! {
                        <tr>
                            <td>{ &day.day }</td>
                            <td>{ day.sky.glyph() }{ " " }{ day.sky.label() }</td>
                            <td>{ format_temp(day.high_c) }</td>
                            <td>{ format_temp(day.low_c) }</td>
                            <td>{ format!("{}%", day.precip_pct) }</td>
                        </tr>
                    }
                })
                .collect::<Html>();
            html! {
                <>
                    <div class="current-conditions">
                        <p class="current-temp">{ format_temp(report.current.temp_c) }</p>
                        <p class="current-sky">
                            { report.current.sky.glyph() }{ " " }{ report.current.sky.label() }
                        </p>
                        <p class="current-extra">
                            { format!("Humidity {}%", report.current.humidity_pct) }
                            { " / " }
                            { format!("Wind {} km/h", report.current.wind_kph) }
                        </p>
                    </div>
                    <h2>{ "Hourly" }</h2>
                    <ul class="hourly-strip">{ hourly }</ul>
                    <h2>{ "Next days" }</h2>
                    <table class="daily-outlook">
                        <thead>
                            <tr>
                                <th>{ "Day" }</th>
                                <th>{ "Sky" }</th>
                                <th>{ "High" }</th>
                                <th>{ "Low" }</th>
                                <th>{ "Rain" }</th>
                            </tr>
                        </thead>
                        <tbody>{ daily }</tbody>
                    </table>
                </>
            }
        },
    );

    html! {
        <section class="panel weather-detail-screen" data-testid="weather-detail-screen">
            <h1>{ title }</h1>
            { body }
            <button class="back-btn" data-testid="detail-back" onclick={back}>
                { "Back to overview" }
            </button>
        </section>
    }
}
