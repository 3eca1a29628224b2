//! Path utilities used by matching and location resolution
//!
//! All functions are **pure** and return slices of their input.

/// Strips trailing slashes from a path, leaving the root path alone
///
/// Only trailing slashes are touched. Double slashes inside the path and
/// backslashes are kept as they are.
///
/// # Examples
///
/// ```
/// use waypost::path::normalize_path;
///
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("/about///"), "/about");
/// assert_eq!(normalize_path("/users//profile"), "/users//profile");
/// ```
pub fn normalize_path(path: &str) -> &str {
    if path == "/" {
        return path;
    }
    path.trim_end_matches('/')
}

/// Infers a parameter name from a path: the segment before the last one
///
/// The path is normalized first. Paths with fewer than three `/`-separated
/// parts (e.g. `/about`) have no inferred name.
///
/// # Examples
///
/// ```
/// use waypost::path::infer_param_name;
///
/// assert_eq!(infer_param_name("/users/alice/profile"), Some("alice"));
/// assert_eq!(infer_param_name("/users/42/"), Some("users"));
/// assert_eq!(infer_param_name("/about"), None);
/// assert_eq!(infer_param_name("/"), None);
/// ```
pub fn infer_param_name(path: &str) -> Option<&str> {
    let parts: Vec<&str> = normalize_path(path).split('/').collect();
    if parts.len() > 2 {
        Some(parts[parts.len() - 2])
    } else {
        None
    }
}

/// Returns the final `/`-separated segment of a URL
///
/// # Examples
///
/// ```
/// use waypost::path::last_segment;
///
/// assert_eq!(last_segment("https://example.com/app/About"), "About");
/// assert_eq!(last_segment("https://example.com/app/"), "");
/// assert_eq!(last_segment("about"), "about");
/// ```
pub fn last_segment(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// Removes a base path prefix from a path, keeping the leading `/`
///
/// A base of `/` (or an empty base) leaves the path unchanged, as does a path
/// that does not start with the base.
///
/// # Examples
///
/// ```
/// use waypost::path::strip_base_path;
///
/// assert_eq!(strip_base_path("/app/users/1", "/app"), "/users/1");
/// assert_eq!(strip_base_path("/app/users/1", "/app/"), "/users/1");
/// assert_eq!(strip_base_path("/app", "/app"), "/");
/// assert_eq!(strip_base_path("/other", "/app"), "/other");
/// assert_eq!(strip_base_path("/about", "/"), "/about");
/// ```
pub fn strip_base_path<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }

    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}
