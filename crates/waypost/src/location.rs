//! Current-location lookup
//!
//! The "current route" is the lowercased final segment of the current URL.
//! Where the URL comes from is behind [`LocationSource`], so lookups can be
//! driven by a browser binding, a CLI argument or a test.

use crate::path::last_segment;
use std::sync::RwLock;

/// Lowercased final segment of a URL
///
/// # Examples
///
/// ```
/// use waypost::current_route;
///
/// assert_eq!(current_route("https://example.com/app/Dashboard"), "dashboard");
/// assert_eq!(current_route("https://example.com/"), "");
/// ```
pub fn current_route(href: &str) -> String {
    last_segment(href).to_lowercase()
}

/// Supplies the full URL of the current location
pub trait LocationSource: Send + Sync {
    fn href(&self) -> String;

    /// Current route derived from [`LocationSource::href`]
    fn current_route(&self) -> String {
        current_route(&self.href())
    }
}

/// In-memory location, updated explicitly on navigation
#[derive(Debug, Default)]
pub struct StaticLocation {
    href: RwLock<String>,
}

impl StaticLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: RwLock::new(href.into()),
        }
    }

    /// Records a navigation to `href`
    pub fn set_href(&self, href: impl Into<String>) {
        let mut current = self.href.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = href.into();
    }
}

impl LocationSource for StaticLocation {
    fn href(&self) -> String {
        self.href
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LocationSource for String {
    fn href(&self) -> String {
        self.clone()
    }
}

impl LocationSource for &'static str {
    fn href(&self) -> String {
        (*self).to_string()
    }
}
