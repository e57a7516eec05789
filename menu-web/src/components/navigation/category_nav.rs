use dioxus::prelude::*;
use futures::StreamExt;
use tracing::warn;

use crate::arrows::{ArrowSide, ArrowState};
use crate::components::navigation::NavArrow;
use crate::config::{ACTIVE_CLASS, CATEGORY_NAV_CLASS, NAV_CONTAINER_CLASS, NAV_SPACER_CLASS};
use crate::dom::{self, ResizeWatch};
use crate::hooks::use_menu_context::use_menu_context;

/// Fixed bar with one button per category between two scroll arrows.
#[component]
pub fn CategoryNav() -> Element {
    let menu = use_menu_context();
    let (direction, step) = {
        let config = menu.config.read();
        (config.strip_direction, config.nav_scroll_step)
    };

    let mut strip = use_signal(|| None::<web_sys::Element>);
    let mut arrows = use_signal(ArrowState::default);
    let mut resize_watch = use_signal(|| None::<ResizeWatch>);

    let mut refresh_arrows = move || {
        let measured = strip
            .peek()
            .as_ref()
            .map(|el| ArrowState::measure(direction, dom::strip_metrics(el)));
        if let Some(state) = measured {
            arrows.set(state);
        }
    };

    // ResizeObserver callbacks fire outside the runtime; hop back in through a channel
    let resized = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            refresh_arrows();
        }
    });

    let titles: Vec<String> = menu.sections.read().iter().map(|s| s.title.clone()).collect();
    let active = menu.navigator.read().active();
    let arrow_state = arrows();

    rsx! {
        div { class: NAV_SPACER_CLASS }
        div { class: NAV_CONTAINER_CLASS,
            NavArrow { side: ArrowSide::Left, state: arrow_state, strip, step }
            div {
                class: CATEGORY_NAV_CLASS,
                onmounted: move |event| {
                    if let Some(element) = event.data().downcast::<web_sys::Element>() {
                        match ResizeWatch::new(element, resized.tx()) {
                            Ok(watch) => resize_watch.set(Some(watch)),
                            Err(err) => warn!("Nav arrows will not track resizes: {}", err),
                        }
                        strip.set(Some(element.clone()));
                        refresh_arrows();
                    }
                },
                onscroll: move |_| refresh_arrows(),

                for (index, title) in titles.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if active == Some(index) { ACTIVE_CLASS } else { "" },
                        onclick: move |_| menu.navigate(index),
                        "{title}"
                    }
                }
            }
            NavArrow { side: ArrowSide::Right, state: arrow_state, strip, step }
        }
    }
}
