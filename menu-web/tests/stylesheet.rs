use menu_web::config::{NAV_CONTAINER_CLASS, NAV_SPACER_CLASS};

const MAIN_CSS: &str = include_str!("../assets/main.css");

/// Body of the first rule whose selector is exactly `.{class}`.
fn rule(class: &str) -> &'static str {
    let selector = format!(".{class} {{");
    let start = MAIN_CSS
        .find(&selector)
        .unwrap_or_else(|| panic!("no rule for .{class}"))
        + selector.len();
    let end = start + MAIN_CSS[start..].find('}').unwrap();
    &MAIN_CSS[start..end]
}

fn declaration<'a>(body: &'a str, property: &str) -> Option<&'a str> {
    body.lines()
        .filter_map(|line| line.trim().strip_suffix(';'))
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim() == property)
        .map(|(_, value)| value.trim())
}

#[test]
fn test_nav_bar_is_fixed() {
    let nav = rule(NAV_CONTAINER_CLASS);
    assert_eq!(declaration(nav, "position"), Some("fixed"));
    assert_eq!(declaration(nav, "top"), Some("0"));
}

#[test]
fn test_spacer_reserves_nav_height() {
    let nav_height = declaration(rule(NAV_CONTAINER_CLASS), "height");
    let spacer_height = declaration(rule(NAV_SPACER_CLASS), "height");
    assert!(nav_height.is_some());
    assert_eq!(nav_height, spacer_height);
}
