use std::time::Duration;

use crate::arrows::StripDirection;

// Class names shared between the components and the DOM helpers
pub const MENU_TITLE_CLASS: &str = "menu";
pub const ITEM_LIST_CLASS: &str = "itemList";
pub const NAV_CONTAINER_CLASS: &str = "nav-container";
pub const NAV_SPACER_CLASS: &str = "nav-spacer";
pub const CATEGORY_NAV_CLASS: &str = "category-nav";
pub const CATEGORY_HEADER_CLASS: &str = "category-header";
pub const ITEMS_CONTAINER_CLASS: &str = "items-container";
pub const MENU_ITEM_CLASS: &str = "menu-item";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

pub const ITEM_LIST_SELECTOR: &str = ".itemList";
pub const NAV_CONTAINER_SELECTOR: &str = ".nav-container";

/// Page-level settings, built once in `main` and handed to the app as context.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuConfig {
    pub title: String,
    /// Menu JSON, resolved against the page URL.
    pub items_path: String,
    /// Id of the element the app mounts into.
    pub root_id: String,
    /// Horizontal distance one arrow press scrolls the category strip (px).
    pub nav_scroll_step: f64,
    /// Gap left between the fixed nav bar and a scrolled-to header (px).
    pub header_offset: f64,
    /// Upper bound on waiting for the collapse transition to end.
    pub collapse_settle: Duration,
    /// Upper bound on waiting for the smooth scroll to end.
    pub scroll_settle: Duration,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub strip_direction: StripDirection,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Menu".to_string(),
            items_path: "items.json".to_string(),
            root_id: "main".to_string(),
            nav_scroll_step: 300.0,
            header_offset: 10.0,
            collapse_settle: Duration::from_millis(300),
            scroll_settle: Duration::from_millis(500),
            reveal_threshold: 0.1,
            reveal_root_margin: "50px".to_string(),
            strip_direction: StripDirection::Rtl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = MenuConfig::default();
        assert_eq!(config.collapse_settle, Duration::from_millis(300));
        assert_eq!(config.scroll_settle, Duration::from_millis(500));
        assert_eq!(config.nav_scroll_step, 300.0);
        assert_eq!(config.header_offset, 10.0);
    }

    #[test]
    fn test_selectors_match_classes() {
        assert_eq!(ITEM_LIST_SELECTOR, format!(".{ITEM_LIST_CLASS}"));
        assert_eq!(NAV_CONTAINER_SELECTOR, format!(".{NAV_CONTAINER_CLASS}"));
    }
}
