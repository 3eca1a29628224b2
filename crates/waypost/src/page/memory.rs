//! In-memory view loader

use crate::error::{Result, RouterError};
use crate::page::{PageLoader, View};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

/// Loader for views compiled into the application
///
/// Holds page id → source pairs. Fast and never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct StaticViewLoader {
    views: HashMap<String, String>,
}

impl StaticViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, page: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(page, source);
        self
    }

    pub fn insert(&mut self, page: impl Into<String>, source: impl Into<String>) {
        self.views.insert(page.into(), source.into());
    }

    /// Page ids with a view
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }
}

#[async_trait]
impl PageLoader for StaticViewLoader {
    async fn load(&self, page: &str) -> Result<View> {
        self.views
            .get(page)
            .map(|source| View::new(page, source.clone()))
            .ok_or_else(|| RouterError::ViewLoad {
                page: page.to_string(),
                path: PathBuf::from(page),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such view"),
            })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_known_view() {
        let loader = StaticViewLoader::new().with_view("home", "<h1>Home</h1>");
        let view = loader.load("home").await.unwrap();
        assert_eq!(view, View::new("home", "<h1>Home</h1>"));
    }

    #[tokio::test]
    async fn test_load_unknown_view() {
        let loader = StaticViewLoader::new();
        let err = loader.load("missing").await.unwrap_err();
        assert!(matches!(err, RouterError::ViewLoad { ref page, .. } if page == "missing"));
    }
}
