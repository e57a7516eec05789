use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Category name -> items, kept in the order the categories appear in the
/// source document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuData {
    categories: Vec<Category>,
}

impl MenuData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category at the end, or replace the items of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, items: Vec<MenuItem>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.items = items,
            None => self.categories.push(Category { name, items }),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

struct MenuDataVisitor;

impl<'de> Visitor<'de> for MenuDataVisitor {
    type Value = MenuData;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from category name to a list of items")
    }

    fn visit_map<A>(self, mut map: A) -> Result<MenuData, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut data = MenuData::new();
        while let Some((name, items)) = map.next_entry::<String, Vec<MenuItem>>()? {
            if let Some(bad) = items.iter().find(|i| !i.price.is_finite() || i.price < 0.0) {
                return Err(de::Error::custom(format!(
                    "item '{}' in '{}' has invalid price {}",
                    bad.name, name, bad.price
                )));
            }
            data.insert(name, items);
        }
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for MenuData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MenuDataVisitor)
    }
}
