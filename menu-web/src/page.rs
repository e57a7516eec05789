//! Browser side of the navigation sequence.

use dioxus::prelude::*;
use tracing::warn;

use crate::config::{
    MenuConfig, ITEMS_CONTAINER_CLASS, ITEM_LIST_SELECTOR, NAV_CONTAINER_SELECTOR,
};
use crate::dom;
use crate::error::MenuResult;
use crate::menu::CategorySection;
use crate::navigator::{NavigationHost, NavigatorState};

pub struct PageHost {
    navigator: Signal<NavigatorState>,
    config: MenuConfig,
}

impl PageHost {
    pub fn new(navigator: Signal<NavigatorState>, config: MenuConfig) -> Self {
        Self { navigator, config }
    }
}

impl NavigationHost for PageHost {
    fn update<R>(&mut self, f: impl FnOnce(&mut NavigatorState) -> R) -> R {
        f(&mut *self.navigator.write())
    }

    async fn collapse_settled(&self) {
        // transitionend bubbles; only the items containers' collapse counts
        match dom::require_element(ITEM_LIST_SELECTOR) {
            Ok(list) => {
                dom::event_or_timeout(&list, "transitionend", self.config.collapse_settle, |event| {
                    dom::target_has_class(event, ITEMS_CONTAINER_CLASS)
                })
                .await;
            }
            Err(err) => {
                warn!("{}", err);
                dom::sleep(self.config.collapse_settle).await;
            }
        }
    }

    fn scroll_to_section(&self, index: usize) -> MenuResult<()> {
        dom::scroll_below_bar(
            &CategorySection::anchor_id(index),
            NAV_CONTAINER_SELECTOR,
            self.config.header_offset,
        )
    }

    async fn scroll_settled(&self) {
        match dom::window() {
            Ok(window) => {
                dom::event_or_timeout(&window, "scrollend", self.config.scroll_settle, |_| true)
                    .await;
            }
            Err(err) => {
                warn!("{}", err);
                dom::sleep(self.config.scroll_settle).await;
            }
        }
    }
}
