//! Pattern compilation
//!
//! Route patterns are partial regular expressions written with bare `/`.
//! Compilation escapes every `/` and builds an unanchored expression.

use crate::error::{Result, RouterError};
use regex::{Regex, RegexBuilder};

/// Escapes every `/` in a pattern as `\/`
///
/// # Examples
///
/// ```
/// use waypost::route::pattern::escape_slashes;
///
/// assert_eq!(escape_slashes("/users/([a-z]+)"), r"\/users\/([a-z]+)");
/// assert_eq!(escape_slashes("about"), "about");
/// ```
pub fn escape_slashes(pattern: &str) -> String {
    pattern.replace('/', "\\/")
}

/// Compiles a route pattern into a regular expression
///
/// The expression is not anchored: `/about` also matches `/about/team`.
///
/// Patterns use the [`regex`] crate syntax. Lookaround and backreferences
/// are not supported and fail here with [`RouterError::InvalidPattern`].
///
/// # Errors
///
/// Returns [`RouterError::InvalidPattern`] when the escaped pattern is not a
/// valid regular expression.
///
/// # Examples
///
/// ```
/// use waypost::route::pattern::compile;
///
/// let re = compile("/users/([0-9]+)", false).unwrap();
/// assert!(re.is_match("/users/42"));
///
/// let re = compile("/About", true).unwrap();
/// assert!(re.is_match("/about"));
///
/// assert!(compile("/users/([0-9]+", false).is_err());
/// ```
pub fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&escape_slashes(pattern))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Returns true if the compiled pattern has at least one named capture group
pub fn has_named_groups(re: &Regex) -> bool {
    re.capture_names().flatten().next().is_some()
}
