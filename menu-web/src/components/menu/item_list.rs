use dioxus::prelude::*;

use crate::components::menu::CategoryBlock;
use crate::config::ITEM_LIST_CLASS;
use crate::hooks::use_menu_context::use_menu_context;

#[component]
pub fn ItemList() -> Element {
    let menu = use_menu_context();
    let sections = menu.sections.read();

    rsx! {
        div { class: ITEM_LIST_CLASS,
            for (index, section) in sections.iter().enumerate() {
                CategoryBlock { key: "{section.key}", index, section: section.clone() }
            }
        }
    }
}
