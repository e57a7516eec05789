use dioxus::prelude::*;

use crate::components::menu::ItemList;
use crate::components::navigation::CategoryNav;
use crate::config::MENU_TITLE_CLASS;
use crate::hooks::use_menu_context::use_menu_context;
use crate::menu_client::load_menu;

#[component]
pub fn MenuPage() -> Element {
    let mut menu = use_menu_context();

    // Single fetch; failures come back as an empty menu
    use_future(move || async move {
        let config = menu.config.peek().clone();
        let data = load_menu(&config).await;
        menu.render(&data);
    });

    let title = menu.config.read().title.clone();
    let has_categories = !menu.sections.read().is_empty();

    rsx! {
        h1 { class: MENU_TITLE_CLASS, "{title}" }
        if has_categories {
            CategoryNav {}
        }
        ItemList {}
    }
}
