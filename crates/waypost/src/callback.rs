use crate::Params;
use std::fmt;
use std::sync::Arc;

type CallbackFn<T> = Arc<dyn Fn(&Params) -> T + Send + Sync>;

/// A named page-rendering callback usable as a route handler
///
/// The name is what menus display, so a router of callbacks can still be
/// projected with [`crate::to_menu_items`].
///
/// # Examples
///
/// ```
/// use waypost::{Callback, Route, Router};
///
/// let edit = Callback::new("EditUser", |params| {
///     format!("editing user {}", params.get("id").map(String::as_str).unwrap_or("?"))
/// });
///
/// let mut router = Router::new();
/// router.add_route_with(Route::new("/users/([0-9]+)/edit", edit).with_param_names(["id"]));
///
/// let route_match = router.match_path("/users/7/edit").unwrap();
/// let html = route_match.handler.unwrap().call(&route_match.params);
/// assert_eq!(html, "editing user 7");
/// ```
pub struct Callback<T> {
    name: String,
    f: CallbackFn<T>,
}

impl<T> Callback<T> {
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Params) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the callback with the bound parameters
    pub fn call(&self, params: &Params) -> T {
        (self.f)(params)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("name", &self.name).finish()
    }
}

impl<T> fmt::Display for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
