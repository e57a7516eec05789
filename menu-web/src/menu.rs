//! Display model for the item list: one section per category, in menu order.

use crate::types::{MenuData, MenuItem};

#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub price: String,
}

impl From<&MenuItem> for ItemRow {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            price: format_price(item.price),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategorySection {
    /// Category key as it appears in the menu data.
    pub key: String,
    pub title: String,
    pub items: Vec<ItemRow>,
}

impl CategorySection {
    /// DOM id of the header for the section at `index`.
    pub fn anchor_id(index: usize) -> String {
        format!("category-{index}")
    }
}

/// Price fixed to two decimal places. Exact ties round away from zero
/// (0.125 -> "0.13"), which `{:.2}` alone would round to even.
pub fn format_price(price: f64) -> String {
    // Enough digits that the third decimal is the exact binary value's
    let exact = format!("{:.40}", price.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return format!("{price:.2}");
    };
    let cents = whole
        .parse::<u64>()
        .ok()
        .and_then(|w| w.checked_mul(100))
        .zip(frac[..2].parse::<u64>().ok())
        .map(|(w, c)| w + c + u64::from(frac.as_bytes()[2] >= b'5'));
    let Some(cents) = cents else {
        return format!("{price:.2}");
    };

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Category keys use underscores in place of spaces.
pub fn display_title(category: &str) -> String {
    category.replace('_', " ")
}

pub fn render_sections(data: &MenuData) -> Vec<CategorySection> {
    data.categories()
        .iter()
        .map(|category| CategorySection {
            key: category.name.clone(),
            title: display_title(&category.name),
            items: category.items.iter().map(ItemRow::from).collect(),
        })
        .collect()
}
