use dioxus::prelude::*;
use tracing::warn;
use web_sys::Element;

use crate::config::MenuConfig;
use crate::menu::{render_sections, CategorySection};
use crate::navigator::{navigate_to, NavigatorState};
use crate::page::PageHost;
use crate::reveal::{reveal_now, RevealObserver};
use crate::types::MenuData;

/// Everything the menu components share. Built once by the root component
/// and torn down with it; the reveal observer disconnects when dropped.
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub config: Signal<MenuConfig>,
    pub sections: Signal<Vec<CategorySection>>,
    pub navigator: Signal<NavigatorState>,
    pub reveal: Signal<Option<RevealObserver>>,
}

pub fn use_menu_context_provider(config: MenuConfig) -> MenuContext {
    use_context_provider(move || {
        let reveal = match RevealObserver::new(config.reveal_threshold, &config.reveal_root_margin) {
            Ok(observer) => Some(observer),
            Err(err) => {
                warn!("Item fade-in disabled: {}", err);
                None
            }
        };

        MenuContext {
            config: Signal::new(config),
            sections: Signal::new(Vec::new()),
            navigator: Signal::new(NavigatorState::default()),
            reveal: Signal::new(reveal),
        }
    })
}

pub fn use_menu_context() -> MenuContext {
    use_context::<MenuContext>()
}

impl MenuContext {
    /// Replace the whole item list; every section starts collapsed.
    pub fn render(&mut self, data: &MenuData) {
        let sections = render_sections(data);
        self.navigator.set(NavigatorState::new(sections.len()));
        self.sections.set(sections);
    }

    /// Header click
    pub fn toggle_section(&mut self, index: usize) {
        self.navigator.write().toggle(index);
    }

    /// Nav-button click. Runs the guided sequence on the event loop.
    pub fn navigate(&self, index: usize) {
        let mut host = PageHost::new(self.navigator, self.config.read().clone());
        spawn(async move {
            navigate_to(&mut host, index).await;
        });
    }

    /// Register a freshly mounted item row for its fade-in.
    pub fn watch_item(&self, element: &Element) {
        match self.reveal.read().as_ref() {
            Some(observer) => observer.observe(element),
            None => reveal_now(element),
        }
    }
}
