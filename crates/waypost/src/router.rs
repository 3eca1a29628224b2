use crate::error::Result;
use crate::menu::{to_menu_items, MenuItem, Menus};
use crate::path::infer_param_name;
use crate::route::Route;
use crate::Params;
use std::fmt;
use tracing::{debug, trace, warn};

/// Result of matching a path against the route table
///
/// When no pattern matched, `pattern` is `None`, `params` is empty and
/// `handler` is the fallback handler (if one is set).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, H> {
    /// The matched handler, or the fallback
    pub handler: Option<&'a H>,
    /// Parameters bound for this match
    pub params: Params,
    /// Pattern of the matched route
    pub pattern: Option<&'a str>,
}

impl<'a, H> RouteMatch<'a, H> {
    fn fallback(handler: Option<&'a H>) -> Self {
        Self {
            handler,
            params: Params::new(),
            pattern: None,
        }
    }

    /// Checks if this result came from the fallback handler
    pub fn is_fallback(&self) -> bool {
        self.pattern.is_none()
    }
}

/// Route table searched last-registered-first
///
/// # Examples
///
/// ```
/// use waypost::Router;
///
/// let mut router = Router::new();
/// router.add_route("/", "Home");
/// router.add_route("/about", "About");
///
/// // "/" is unanchored and would match everything; "/about" was added later
/// let route_match = router.match_path("/about").unwrap();
/// assert_eq!(route_match.handler, Some(&"About"));
///
/// let route_match = router.match_path("/contact").unwrap();
/// assert_eq!(route_match.handler, Some(&"Home"));
/// ```
pub struct Router<H> {
    routes: Vec<Route<H>>,
    not_found: Option<H>,
    base_path: String,
    case_insensitive: bool,
    menus: Menus,
}

impl<H: fmt::Debug> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self.routes.iter().map(Route::pattern).collect::<Vec<_>>(),
            )
            .field("not_found", &self.not_found)
            .field("base_path", &self.base_path)
            .field("case_insensitive", &self.case_insensitive)
            .finish()
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    /// Creates an empty, case-sensitive router with base path `/`
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            not_found: None,
            base_path: "/".to_string(),
            case_insensitive: false,
            menus: Menus::default(),
        }
    }

    /// Creates a router with the given case sensitivity
    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            ..Self::new()
        }
    }

    /// Creates a router from an initial route list
    ///
    /// Routes are registered in order through [`Router::add_route_with`], so
    /// a repeated pattern replaces the earlier handler instead of adding an
    /// entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::{Route, Router};
    ///
    /// let router = Router::from_routes(vec![
    ///     Route::new("/", "Home"),
    ///     Route::new("/about", "About"),
    ///     Route::new("/", "Landing"),
    /// ]);
    ///
    /// assert_eq!(router.len(), 2);
    /// assert_eq!(router.routes()[0].handler(), &"Landing");
    /// ```
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route<H>>,
    {
        let mut router = Self::new();
        router.extend(routes);
        router
    }

    /// Adds a route (builder style)
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Router;
    ///
    /// let router = Router::new()
    ///     .with_route("/about", "About")
    ///     .with_route("/contact", "Contact");
    ///
    /// assert_eq!(router.len(), 2);
    /// ```
    pub fn with_route(mut self, pattern: impl Into<String>, handler: H) -> Self {
        self.add_route(pattern, handler);
        self
    }

    /// Sets the fallback handler (builder style)
    pub fn with_not_found(mut self, handler: H) -> Self {
        self.set_not_found(handler);
        self
    }

    /// Changes case sensitivity for all routes
    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Sets the handler returned when no route matches
    pub fn set_not_found(&mut self, handler: H) {
        self.not_found = Some(handler);
    }

    pub fn not_found(&self) -> Option<&H> {
        self.not_found.as_ref()
    }

    /// Sets the base path the application is mounted under
    ///
    /// Stored as given. Matching does not consult it; callers strip it with
    /// [`crate::path::strip_base_path`] before matching.
    pub fn set_base_path(&mut self, path: impl Into<String>) {
        self.base_path = path.into();
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Registers a route with no parameters
    ///
    /// If a route with the same pattern exists, only its handler is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Router;
    ///
    /// let mut router = Router::new();
    /// router.add_route("/about", "About");
    /// router.add_route("/about", "AboutV2");
    ///
    /// assert_eq!(router.len(), 1);
    /// assert_eq!(router.match_path("/about").unwrap().handler, Some(&"AboutV2"));
    /// ```
    pub fn add_route(&mut self, pattern: impl Into<String>, handler: H) {
        self.add_route_with(Route::new(pattern, handler));
    }

    /// Registers a route whose matches start from `params`
    pub fn add_route_with_params(&mut self, pattern: impl Into<String>, handler: H, params: Params) {
        self.add_route_with(Route::new(pattern, handler).with_params(params));
    }

    /// Registers a prebuilt route
    ///
    /// Same duplicate rule as [`Router::add_route`]: an existing route with an
    /// equal pattern keeps its parameters and declared names, and takes the
    /// new handler.
    pub fn add_route_with(&mut self, route: Route<H>) {
        match self
            .routes
            .iter_mut()
            .find(|existing| existing.pattern() == route.pattern())
        {
            Some(existing) => {
                debug!(pattern = existing.pattern(), "replacing route handler");
                existing.set_handler(route.into_handler());
            }
            None => {
                debug!(pattern = route.pattern(), "registering route");
                self.routes.push(route);
            }
        }
    }

    /// Registered routes in registration order
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Matches a path against the table
    ///
    /// Routes are tried from last registered to first and the first match
    /// wins. The table is not modified, so repeated calls return the same
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::InvalidPattern`] if a route tried before
    /// a match is found has a pattern that does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Router;
    ///
    /// let mut router = Router::new();
    /// router.add_route("/users/([a-z]+)/profile", "Profile");
    ///
    /// let route_match = router.match_path("/users/alice/profile").unwrap();
    /// assert_eq!(route_match.pattern, Some("/users/([a-z]+)/profile"));
    /// assert_eq!(route_match.params.get("alice"), Some(&"alice".to_string()));
    ///
    /// let route_match = router.match_path("/users//profile").unwrap();
    /// assert!(route_match.is_fallback());
    /// assert_eq!(route_match.handler, None);
    /// ```
    pub fn match_path(&self, path: &str) -> Result<RouteMatch<'_, H>> {
        let inferred = infer_param_name(path);

        for route in self.routes.iter().rev() {
            trace!(pattern = route.pattern(), path, "testing route");

            let bound = route
                .bind_with_name(path, inferred, self.case_insensitive)
                .map_err(|e| {
                    warn!("route pattern failed to compile: {}", e);
                    e
                })?;

            if let Some(params) = bound {
                debug!(pattern = route.pattern(), path, ?params, "route matched");
                return Ok(RouteMatch {
                    handler: Some(route.handler()),
                    params,
                    pattern: Some(route.pattern()),
                });
            }
        }

        debug!(path, "no route matched, using fallback");
        Ok(RouteMatch::fallback(self.not_found.as_ref()))
    }

    /// Stores a menu under `id`, replacing any previous one
    pub fn add_menu(&mut self, id: impl Into<String>, items: Vec<MenuItem>) {
        self.menus.add(id, items);
    }

    pub fn menu(&self, id: &str) -> Option<&[MenuItem]> {
        self.menus.get(id)
    }

    pub fn menus(&self) -> &Menus {
        &self.menus
    }
}

impl<H> Extend<Route<H>> for Router<H> {
    fn extend<I: IntoIterator<Item = Route<H>>>(&mut self, routes: I) {
        for route in routes {
            self.add_route_with(route);
        }
    }
}

impl<H> FromIterator<Route<H>> for Router<H> {
    fn from_iter<I: IntoIterator<Item = Route<H>>>(routes: I) -> Self {
        Self::from_routes(routes)
    }
}

impl<H: fmt::Display> Router<H> {
    /// Projects the route table into menu items, in registration order
    pub fn menu_items(&self) -> Vec<MenuItem> {
        to_menu_items(&self.routes)
    }
}
