use crate::paths::asset_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_home: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let go_home = {
        let cb = p.on_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner">
            <div class="header-content">
                <button id="home-btn" class="header-title" onclick={go_home}>
                    <img src={asset_path("static/img/logo.svg")} alt="" class="header-logo" />
                    { "Skycast" }
                </button>
            </div>
        </header>
    }
}
