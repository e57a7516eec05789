use dioxus::prelude::*;

use crate::arrows::{ArrowSide, ArrowState};
use crate::dom::scroll_element_by;

#[component]
pub fn NavArrow(
    side: ArrowSide,
    state: ArrowState,
    strip: Signal<Option<web_sys::Element>>,
    step: f64,
) -> Element {
    rsx! {
        button {
            class: side.class(),
            style: state.style(side),
            onclick: move |_| {
                if let Some(strip) = strip.peek().as_ref() {
                    scroll_element_by(strip, side.scroll_delta(step));
                }
            },
            "{side.glyph()}"
        }
    }
}
