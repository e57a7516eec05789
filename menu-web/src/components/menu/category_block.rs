use dioxus::prelude::*;

use crate::components::menu::MenuItemRow;
use crate::config::{CATEGORY_HEADER_CLASS, COLLAPSED_CLASS, ITEMS_CONTAINER_CLASS};
use crate::hooks::use_menu_context::use_menu_context;
use crate::menu::CategorySection;

/// Header plus items container; both take their `collapsed` class from the
/// same navigator flag.
#[component]
pub fn CategoryBlock(index: usize, section: CategorySection) -> Element {
    let mut menu = use_menu_context();
    let collapsed = menu.navigator.read().is_collapsed(index);

    let state_class = if collapsed {
        format!(" {COLLAPSED_CLASS}")
    } else {
        String::new()
    };

    rsx! {
        h2 {
            id: CategorySection::anchor_id(index),
            class: "{CATEGORY_HEADER_CLASS}{state_class}",
            "data-category": "{section.key}",
            onclick: move |_| menu.toggle_section(index),
            "{section.title}"
        }
        div { class: "{ITEMS_CONTAINER_CLASS}{state_class}",
            for (row, item) in section.items.iter().enumerate() {
                MenuItemRow { key: "{row}", item: item.clone() }
            }
        }
    }
}
