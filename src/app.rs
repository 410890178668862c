#[cfg(target_arch = "wasm32")]
use crate::components::footer::Footer;
#[cfg(target_arch = "wasm32")]
use crate::components::header::Header;
use crate::pages::index::IndexPage;
use crate::pages::weather_detail::WeatherDetailPage;
use crate::router::Route;
use crate::weather::ForecastData;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Map the active route to its page. Kept out of the wasm-gated components so
/// the route table can be exercised by the native test suite.
#[must_use]
pub fn render_route(
    route: Route,
    data: &ForecastData,
    selected: &str,
    on_select: &Callback<AttrValue>,
    on_back: &Callback<()>,
) -> Html {
    match route {
        Route::Home => html! {
            <IndexPage data={data.clone()} on_select={on_select.clone()} />
        },
        Route::WeatherDetail => html! {
            <WeatherDetailPage
                report={data.location(selected).cloned()}
                on_back={on_back.clone()}
            />
        },
    }
}

/// Top-level component. Route state lives in the URL fragment, so the app can
/// be served from any static host without server-side route handling.
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <AppInner />
        </HashRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
fn app_inner() -> Html {
    let data = use_state(ForecastData::load_from_static);
    let selected = use_state(|| {
        AttrValue::from(data.first_location_id().unwrap_or_default().to_string())
    });
    let navigator = use_navigator();

    let on_select = {
        let selected = selected.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: AttrValue| {
            selected.set(id);
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::WeatherDetail);
            }
        })
    };
    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    let render = {
        let data = data.clone();
        let selected = selected.clone();
        let on_select = on_select.clone();
        let on_back = on_back.clone();
        Callback::from(move |route: Route| {
            render_route(route, &data, &selected, &on_select, &on_back)
        })
    };

    html! {
        <>
            <Header on_home={on_back.clone()} />
            <main id="main" role="main">
                <Switch<Route> render={render} />
            </main>
            <Footer />
        </>
    }
}
