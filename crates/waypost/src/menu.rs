//! Menu bookkeeping derived from the route table

use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A navigation entry for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub url: String,
    pub label: String,
    #[serde(default)]
    pub hidden: bool,
}

impl MenuItem {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            hidden: false,
        }
    }
}

/// Projects routes into visible menu items, preserving order
///
/// The label is the handler's display text, lowercased.
///
/// # Examples
///
/// ```
/// use waypost::{to_menu_items, MenuItem, Route};
///
/// let routes = vec![Route::new("/", "Home"), Route::new("/about", "AboutUs")];
/// let items = to_menu_items(&routes);
///
/// assert_eq!(items, vec![MenuItem::new("/", "home"), MenuItem::new("/about", "aboutus")]);
/// ```
pub fn to_menu_items<H: Display>(routes: &[Route<H>]) -> Vec<MenuItem> {
    routes
        .iter()
        .map(|route| MenuItem::new(route.pattern(), route.handler().to_string().to_lowercase()))
        .collect()
}

/// Named menus; storing under an existing id replaces it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menus(BTreeMap<String, Vec<MenuItem>>);

impl Menus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: impl Into<String>, items: Vec<MenuItem>) {
        self.0.insert(id.into(), items);
    }

    pub fn get(&self, id: &str) -> Option<&[MenuItem]> {
        self.0.get(id).map(Vec::as_slice)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes all menus as a JSON object keyed by menu id
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<BTreeMap<String, Vec<MenuItem>>> for Menus {
    fn from(menus: BTreeMap<String, Vec<MenuItem>>) -> Self {
        Self(menus)
    }
}
