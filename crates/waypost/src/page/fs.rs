//! Filesystem view loader

use crate::error::{Result, RouterError};
use crate::page::{PageLoader, View};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "html";

/// Loads `<component_path>/<page>.<extension>` from disk
///
/// The component path is fixed at construction, typically from
/// `[pages] component_path` in `waypost.toml`.
#[derive(Debug, Clone)]
pub struct FsViewLoader {
    component_path: PathBuf,
    extension: String,
}

impl FsViewLoader {
    pub fn new(component_path: impl Into<PathBuf>) -> Self {
        Self {
            component_path: component_path.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn component_path(&self) -> &Path {
        &self.component_path
    }

    /// File a page id is loaded from
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use waypost::FsViewLoader;
    ///
    /// let loader = FsViewLoader::new("src/components").with_extension("rsx");
    /// assert_eq!(loader.path_for("about"), Path::new("src/components/about.rsx"));
    /// ```
    pub fn path_for(&self, page: &str) -> PathBuf {
        self.component_path.join(format!("{}.{}", page, self.extension))
    }
}

#[async_trait]
impl PageLoader for FsViewLoader {
    async fn load(&self, page: &str) -> Result<View> {
        let path = self.path_for(page);
        let source = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| RouterError::ViewLoad {
                page: page.to_string(),
                path: path.clone(),
                source,
            })?;

        Ok(View::new(page, source))
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
