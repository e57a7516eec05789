//! Thin helpers over `web_sys` for lookups, measurement, scrolling and
//! waiting on browser completion events.

use std::cell::Cell;
use std::time::Duration;

use futures::channel::{mpsc, oneshot};
use futures::{pin_mut, select, FutureExt};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ResizeObserver, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::arrows::StripMetrics;
use crate::error::{MenuError, MenuResult};

pub fn window() -> MenuResult<Window> {
    web_sys::window().ok_or(MenuError::Unavailable("window"))
}

pub fn document() -> MenuResult<Document> {
    window()?
        .document()
        .ok_or(MenuError::Unavailable("document"))
}

pub fn require_element(selector: &str) -> MenuResult<Element> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| MenuError::MissingAnchor(selector.to_string()))
}

pub fn require_element_by_id(id: &str) -> MenuResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| MenuError::MissingAnchor(format!("#{id}")))
}

/// Document-relative scroll position that puts an element `offset` px below a
/// fixed bar of height `bar_height`.
pub fn scroll_target(element_top: f64, page_offset: f64, bar_height: f64, offset: f64) -> f64 {
    element_top + page_offset - bar_height - offset
}

fn offset_height(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Smooth-scroll the window so the element with `id` sits just below the
/// element matched by `bar_selector`.
pub fn scroll_below_bar(id: &str, bar_selector: &str, offset: f64) -> MenuResult<()> {
    let window = window()?;
    let element = require_element_by_id(id)?;

    let bar_height = match require_element(bar_selector) {
        Ok(bar) => offset_height(&bar),
        Err(err) => {
            warn!("{}; scrolling without nav bar offset", err);
            0.0
        }
    };

    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        window.scroll_y()?,
        bar_height,
        offset,
    );
    debug!("Scrolling to #{} at {}", id, top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scroll an element horizontally by `delta` px.
pub fn scroll_element_by(element: &Element, delta: f64) {
    let options = ScrollToOptions::new();
    options.set_left(element.scroll_left() as f64 + delta);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}

pub fn strip_metrics(element: &Element) -> StripMetrics {
    StripMetrics {
        scroll_left: element.scroll_left() as f64,
        scroll_width: element.scroll_width() as f64,
        client_width: element.client_width() as f64,
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    wasmtimer::tokio::sleep(duration).await;
}

// Timers only exist in the browser; natively the wait resolves at once.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(_duration: Duration) {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Event,
    Timeout,
}

/// Wait for the first `event` on `target` that `accept` lets through, or for
/// `fallback` to elapse when the browser never fires one (nothing to
/// animate, already in place).
pub async fn event_or_timeout(
    target: &EventTarget,
    event: &str,
    fallback: Duration,
    accept: impl Fn(&Event) -> bool + 'static,
) -> Settled {
    let (tx, rx) = oneshot::channel::<()>();
    let tx = Cell::new(Some(tx));
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if !accept(&event) {
            return;
        }
        if let Some(tx) = tx.take() {
            let _ = tx.send(());
        }
    });

    if let Err(err) =
        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
    {
        warn!("Could not listen for {}: {:?}", event, err);
        sleep(fallback).await;
        return Settled::Timeout;
    }

    let fired = rx.fuse();
    let timer = sleep(fallback).fuse();
    pin_mut!(fired, timer);
    let settled = select! {
        result = fired => if result.is_ok() { Settled::Event } else { Settled::Timeout },
        _ = timer => Settled::Timeout,
    };

    let _ = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    debug!("Waited for {}: {:?}", event, settled);
    settled
}

/// True when the event was dispatched on an element carrying `class`.
pub fn target_has_class(event: &Event, class: &str) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| el.class_list().contains(class))
}

/// Keeps a `ResizeObserver` attached to one element for as long as it lives;
/// each resize is forwarded as a unit message.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl ResizeWatch {
    pub fn new(element: &Element, notify: mpsc::UnboundedSender<()>) -> MenuResult<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
            move |_entries: js_sys::Array, _observer: ResizeObserver| {
                let _ = notify.unbounded_send(());
            },
        );
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_accounts_for_bar() {
        // header 400px below the viewport top, page already scrolled 1000px,
        // 60px fixed bar, 10px gap
        assert_eq!(scroll_target(400.0, 1000.0, 60.0, 10.0), 1330.0);
        assert_eq!(scroll_target(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_scroll_target_can_go_negative() {
        assert_eq!(scroll_target(20.0, 0.0, 50.0, 10.0), -40.0);
    }
}
