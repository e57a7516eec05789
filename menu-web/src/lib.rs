//! menu-web - restaurant menu page in Dioxus
//!
//! Fetches `items.json`, renders one collapsible section per category and a
//! scrollable category bar that walks the page to the chosen section:
//! - [`types`] / [`menu`]: menu data and its display model
//! - [`navigator`]: collapse/expand state and the guided navigation sequence
//! - [`arrows`]: scroll-arrow dimming for the category bar
//! - [`components`]: the Dioxus components wiring it all to the page

pub mod arrows;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod menu;
pub mod menu_client;
pub mod navigator;
pub mod page;
pub mod reveal;
pub mod types;

pub mod prelude {
    pub use crate::arrows::{ArrowSide, ArrowState, StripDirection, StripMetrics};
    pub use crate::config::MenuConfig;
    pub use crate::error::{MenuError, MenuResult};
    pub use crate::menu::{format_price, render_sections, CategorySection, ItemRow};
    pub use crate::navigator::{
        navigate_to, NavOutcome, NavTicket, NavigationHost, NavigatorState, SectionState,
    };
    pub use crate::types::{Category, MenuData, MenuItem};
}
