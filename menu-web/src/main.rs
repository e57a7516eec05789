use dioxus::prelude::*;
use tracing::Level;

use menu_web::components::layout::MenuPage;
use menu_web::config::MenuConfig;
use menu_web::dom;
use menu_web::hooks::use_menu_context::use_menu_context_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    let config = MenuConfig::default();

    // Nothing to render into: log and stop before launching
    if let Err(err) = dom::require_element_by_id(&config.root_id) {
        tracing::error!("Initialization error: {}", err);
        return;
    }

    tracing::info!("Starting menu page");
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<MenuConfig>();
    use_menu_context_provider(config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        MenuPage {}
    }
}
