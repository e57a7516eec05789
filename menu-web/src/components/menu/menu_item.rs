use dioxus::prelude::*;

use crate::config::MENU_ITEM_CLASS;
use crate::hooks::use_menu_context::use_menu_context;
use crate::menu::ItemRow;

#[component]
pub fn MenuItemRow(item: ItemRow) -> Element {
    let menu = use_menu_context();

    rsx! {
        div {
            class: MENU_ITEM_CLASS,
            onmounted: move |event| {
                if let Some(element) = event.data().downcast::<web_sys::Element>() {
                    menu.watch_item(element);
                }
            },
            span { class: "item-name", "{item.name}" }
            span { class: "item-price", "{item.price}" }
        }
    }
}
