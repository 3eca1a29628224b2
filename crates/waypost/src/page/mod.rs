//! Page resolution: location → page id → loaded view
//!
//! A [`PageResolver`] maps the current location to a page id (falling back
//! to the default page) and hands the id to the [`PageLoader`] registered
//! for it. Loaders are registered by the embedding application; nothing here
//! builds module paths on its own.

use crate::error::{Result, RouterError};
use crate::location::LocationSource;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

pub use fs::FsViewLoader;
pub use memory::StaticViewLoader;

/// A loaded page, ready to hand to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Page id the view was loaded for
    pub page: String,
    /// View source (markup, template or serialized component)
    pub source: String,
}

impl View {
    pub fn new(page: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            source: source.into(),
        }
    }
}

/// Trait for view loaders
///
/// Loads are not cached or de-duplicated: two concurrent loads of one page
/// both reach the loader.
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Load the view for a page id
    async fn load(&self, page: &str) -> Result<View>;

    /// Get loader name
    fn name(&self) -> &'static str;
}

/// Page id → loader mapping
#[derive(Clone, Default)]
pub struct PageRegistry {
    loaders: HashMap<String, Arc<dyn PageLoader>>,
}

impl fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pages: Vec<_> = self.loaders.keys().collect();
        pages.sort();
        f.debug_struct("PageRegistry").field("pages", &pages).finish()
    }
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one loader for every page id in `pages`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use waypost::{FsViewLoader, PageRegistry};
    ///
    /// let loader = Arc::new(FsViewLoader::new("src/components"));
    /// let registry = PageRegistry::from_loader(loader, ["home", "about"]);
    ///
    /// assert!(registry.contains("home"));
    /// assert!(!registry.contains("contact"));
    /// ```
    pub fn from_loader<I, S>(loader: Arc<dyn PageLoader>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for page in pages {
            registry.register(page, Arc::clone(&loader));
        }
        registry
    }

    /// Registers a loader for a page id, replacing any previous one
    pub fn register(&mut self, page: impl Into<String>, loader: Arc<dyn PageLoader>) {
        let page = page.into();
        debug!(page = %page, loader = loader.name(), "registering page loader");
        self.loaders.insert(page, loader);
    }

    pub fn get(&self, page: &str) -> Option<&Arc<dyn PageLoader>> {
        self.loaders.get(page)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.loaders.contains_key(page)
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

/// Resolves the current location to a loaded view
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use waypost::{PageRegistry, PageResolver, StaticLocation, StaticViewLoader};
///
/// # #[tokio::main]
/// # async fn main() {
/// let views = StaticViewLoader::new()
///     .with_view("home", "<h1>Home</h1>")
///     .with_view("about", "<h1>About</h1>");
/// let registry = PageRegistry::from_loader(Arc::new(views), ["home", "about"]);
///
/// let mut resolver = PageResolver::new(registry);
/// resolver.add_location("about", "about");
/// resolver.set_default_page("home");
///
/// let view = resolver
///     .get_page(&StaticLocation::new("https://example.com/About"))
///     .await
///     .unwrap();
/// assert_eq!(view.source, "<h1>About</h1>");
///
/// // Unmapped locations fall back to the default page
/// let view = resolver
///     .get_page(&StaticLocation::new("https://example.com/unknown"))
///     .await
///     .unwrap();
/// assert_eq!(view.page, "home");
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageResolver {
    locations: HashMap<String, String>,
    default_page: Option<String>,
    registry: PageRegistry,
}

impl PageResolver {
    pub fn new(registry: PageRegistry) -> Self {
        Self {
            locations: HashMap::new(),
            default_page: None,
            registry,
        }
    }

    /// Replaces the location → page id mapping
    ///
    /// Keys are lowercased, like the location they are compared against.
    pub fn with_locations(mut self, locations: HashMap<String, String>) -> Self {
        self.locations = locations
            .into_iter()
            .map(|(location, page)| (location.to_lowercase(), page))
            .collect();
        self
    }

    /// Maps a location (final URL segment) to a page id
    ///
    /// The key is stored lowercased, since [`LocationSource::current_route`]
    /// always lowercases.
    pub fn add_location(&mut self, location: impl Into<String>, page: impl Into<String>) {
        self.locations.insert(location.into().to_lowercase(), page.into());
    }

    /// Sets the page used when a location has no mapping
    pub fn set_default_page(&mut self, page: impl Into<String>) {
        self.default_page = Some(page.into());
    }

    pub fn default_page(&self) -> Option<&str> {
        self.default_page.as_deref()
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PageRegistry {
        &mut self.registry
    }

    /// Page id for a location: its mapping, else the default page
    pub fn resolve_page_id(&self, location: &str) -> Result<&str> {
        self.locations
            .get(location)
            .map(String::as_str)
            .or(self.default_page.as_deref())
            .ok_or_else(|| RouterError::PageNotFound(location.to_string()))
    }

    /// Loads the page for the current location of `source`
    ///
    /// # Errors
    ///
    /// - [`RouterError::PageNotFound`] if the location is unmapped and no
    ///   default page is set
    /// - [`RouterError::NoLoader`] if no loader is registered for the page id
    /// - whatever the loader returns
    pub async fn get_page(&self, source: &dyn LocationSource) -> Result<View> {
        let location = source.current_route();
        let page = self.resolve_page_id(&location)?;
        debug!(location = %location, page, "resolved page");
        self.load_page(page).await
    }

    /// Loads a page by id
    pub async fn load_page(&self, page: &str) -> Result<View> {
        let loader = self
            .registry
            .get(page)
            .ok_or_else(|| RouterError::NoLoader(page.to_string()))?;

        loader.load(page).await.map_err(|e| {
            warn!(page, loader = loader.name(), "page load failed: {}", e);
            e
        })
    }
}
