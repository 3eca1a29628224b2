// File: src/config.rs
// Purpose: Configuration parsing from waypost.toml

use crate::menu::{MenuItem, Menus};
use crate::page::fs::DEFAULT_EXTENSION;
use crate::page::{FsViewLoader, PageRegistry, PageResolver};
use crate::route::Route;
use crate::router::Router;
use crate::Params;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub const DEFAULT_CONFIG_FILE: &str = "waypost.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub menus: BTreeMap<String, Vec<MenuItem>>,
}

/// Router settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Path the application is mounted under (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether patterns match case-insensitively (default: false)
    #[serde(default)]
    pub case_insensitive: bool,

    /// Handler returned when no route matches
    #[serde(default)]
    pub not_found: Option<String>,
}

/// A route entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub pattern: String,

    pub handler: String,

    #[serde(default)]
    pub params: Params,

    /// Names for capture groups 1..=n
    #[serde(default)]
    pub param_names: Vec<String>,
}

/// Page resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Directory view files are loaded from (default: "src/components")
    #[serde(default = "default_component_path")]
    pub component_path: String,

    /// View file extension (default: "html")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Page used when a location has no mapping
    #[serde(default)]
    pub default_page: Option<String>,

    /// Location (final URL segment) → page id
    #[serde(default)]
    pub locations: HashMap<String, String>,
}

// Default values
fn default_base_path() -> String {
    "/".to_string()
}

fn default_component_path() -> String {
    "src/components".to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            case_insensitive: false,
            not_found: None,
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            component_path: default_component_path(),
            extension: default_extension(),
            default_page: None,
            locations: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./waypost.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Builds a router holding the configured routes, fallback, base path and menus
    pub fn build_router(&self) -> Router<String> {
        let mut router = Router::with_case_insensitive(self.router.case_insensitive);
        router.set_base_path(self.router.base_path.clone());

        if let Some(not_found) = &self.router.not_found {
            router.set_not_found(not_found.clone());
        }

        for route in &self.routes {
            router.add_route_with(
                Route::new(route.pattern.clone(), route.handler.clone())
                    .with_params(route.params.clone())
                    .with_param_names(route.param_names.iter().cloned()),
            );
        }

        for (id, items) in &self.menus {
            router.add_menu(id.clone(), items.clone());
        }

        router
    }

    /// Builds a page resolver loading every known page from `component_path`
    pub fn build_page_resolver(&self) -> PageResolver {
        let loader = FsViewLoader::new(&self.pages.component_path)
            .with_extension(self.pages.extension.clone());

        let pages: BTreeSet<&String> = self
            .pages
            .locations
            .values()
            .chain(self.pages.default_page.iter())
            .collect();

        let registry = PageRegistry::from_loader(Arc::new(loader), pages.into_iter().cloned());
        let mut resolver = PageResolver::new(registry).with_locations(self.pages.locations.clone());

        if let Some(page) = &self.pages.default_page {
            resolver.set_default_page(page.clone());
        }

        resolver
    }

    pub fn menus(&self) -> Menus {
        Menus::from(self.menus.clone())
    }
}
