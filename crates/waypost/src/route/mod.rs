//! Route definitions and parameter binding
//!
//! A [`Route`] pairs a pattern with a handler. Matching is read-only: the
//! stored parameter map is copied into each result and never written back.

pub mod pattern;

use crate::error::Result;
use crate::Params;
use once_cell::sync::OnceCell;
use regex::Regex;

/// A single route: pattern, handler and registration-time parameters
#[derive(Debug, Clone)]
pub struct Route<H> {
    pattern: String,
    handler: H,
    params: Params,
    /// Explicit names for capture groups 1..=n
    param_names: Vec<String>,
    /// Compiled expression, one slot per case mode
    compiled: OnceCell<Regex>,
    compiled_ci: OnceCell<Regex>,
}

impl<H> Route<H> {
    /// Creates a route with no parameters
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Route;
    ///
    /// let route = Route::new("/about", "About");
    /// assert_eq!(route.pattern(), "/about");
    /// assert_eq!(route.handler(), &"About");
    /// ```
    pub fn new(pattern: impl Into<String>, handler: H) -> Self {
        Self {
            pattern: pattern.into(),
            handler,
            params: Params::new(),
            param_names: Vec::new(),
            compiled: OnceCell::new(),
            compiled_ci: OnceCell::new(),
        }
    }

    /// Sets the parameter map every match of this route starts from
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Declares names for the capture groups, in order
    ///
    /// Declared names take precedence over named groups and over the name
    /// inferred from the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypost::Route;
    ///
    /// let route = Route::new("/posts/([0-9]+)/comments/([0-9]+)", "Comment")
    ///     .with_param_names(["post", "comment"]);
    ///
    /// let params = route.bind("/posts/7/comments/3", false).unwrap().unwrap();
    /// assert_eq!(params.get("post"), Some(&"7".to_string()));
    /// assert_eq!(params.get("comment"), Some(&"3".to_string()));
    /// ```
    pub fn with_param_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Replaces the handler, keeping pattern and parameters
    pub(crate) fn set_handler(&mut self, handler: H) {
        self.handler = handler;
    }

    pub(crate) fn into_handler(self) -> H {
        self.handler
    }

    /// Returns the compiled expression for the given case mode
    ///
    /// Each mode is compiled on first use and cached separately.
    pub fn regex(&self, case_insensitive: bool) -> Result<&Regex> {
        let cell = if case_insensitive {
            &self.compiled_ci
        } else {
            &self.compiled
        };
        cell.get_or_try_init(|| pattern::compile(&self.pattern, case_insensitive))
    }

    /// Tests a path against this route and binds parameters on success
    ///
    /// Returns `Ok(None)` when the pattern does not match. The path is tested
    /// as given; only parameter-name inference sees the normalized path.
    pub fn bind(&self, path: &str, case_insensitive: bool) -> Result<Option<Params>> {
        self.bind_with_name(path, crate::path::infer_param_name(path), case_insensitive)
    }

    /// Like [`Route::bind`], with the inferred parameter name supplied by the caller
    pub(crate) fn bind_with_name(
        &self,
        path: &str,
        inferred: Option<&str>,
        case_insensitive: bool,
    ) -> Result<Option<Params>> {
        let re = self.regex(case_insensitive)?;
        let Some(captures) = re.captures(path) else {
            return Ok(None);
        };

        let mut params = self.params.clone();

        if !self.param_names.is_empty() {
            for (name, group) in self.param_names.iter().zip(captures.iter().skip(1)) {
                if let Some(value) = group {
                    params.insert(name.clone(), value.as_str().to_string());
                }
            }
        } else if pattern::has_named_groups(re) {
            for name in re.capture_names().flatten() {
                if let Some(value) = captures.name(name) {
                    params.insert(name.to_string(), value.as_str().to_string());
                }
            }
        } else if let Some(name) = inferred {
            // Group 1 absent: nothing to bind
            if let Some(value) = captures.get(1) {
                params.insert(name.to_string(), value.as_str().to_string());
            }
        }

        Ok(Some(params))
    }
}
