use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "Skycast · local forecasts, no server required" }</footer>
    }
}
