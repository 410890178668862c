#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use skycast_web::app::App;
use skycast_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    // Tests share one browser context; start every mount from the root route.
    let _ = dom::window().location().set_hash("#/");
    Renderer::<App>::with_root(ensure_app_root()).render();
    let _ = dom::sleep_ms(10).await;
}

fn current_hash() -> String {
    dom::window().location().hash().expect("read location hash")
}

fn click(selector: &str) {
    let el: HtmlElement = dom::document()
        .query_selector(selector)
        .expect("query selector")
        .expect("element exists")
        .dyn_into()
        .expect("clickable element");
    el.click();
}

#[wasm_bindgen_test]
async fn mounting_renders_the_landing_page() {
    render_app().await;
    let doc = dom::document();
    assert!(
        doc.query_selector("[data-testid='index-screen']")
            .expect("query index screen")
            .is_some()
    );
    assert!(
        doc.query_selector("[data-testid='weather-detail-screen']")
            .expect("query detail screen")
            .is_none()
    );
}

#[wasm_bindgen_test]
async fn selecting_a_location_navigates_via_the_hash() {
    render_app().await;
    click("[data-testid^='location-']");
    let _ = dom::sleep_ms(10).await;

    assert!(
        current_hash().contains("#/weather-detail"),
        "route state must live in the URL fragment, got {:?}",
        current_hash()
    );
    assert!(
        dom::document()
            .query_selector("[data-testid='weather-detail-screen']")
            .expect("query detail screen")
            .is_some()
    );
}

#[wasm_bindgen_test]
async fn back_button_returns_to_the_landing_page() {
    render_app().await;
    click("[data-testid^='location-']");
    let _ = dom::sleep_ms(10).await;
    click("[data-testid='detail-back']");
    let _ = dom::sleep_ms(10).await;

    assert!(!current_hash().contains("weather-detail"));
    assert!(
        dom::document()
            .query_selector("[data-testid='index-screen']")
            .expect("query index screen")
            .is_some()
    );
}
