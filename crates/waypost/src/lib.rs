//! # Waypost
//!
//! A small client-side route dispatcher for single-page applications:
//! - Regex route table searched last-registered-first (`/users/([a-z]+)/profile`)
//! - Parameter binding from capture groups (declared names, named groups,
//!   or the segment preceding the last one)
//! - Fallback "not found" handler
//! - Menu projection of the route table
//! - Location-to-page resolution with async, pluggable view loaders
//!
//! ## Matching
//!
//! Patterns are partial regular expressions. Before compiling, every `/` is
//! escaped, and the compiled expression is cached on the route. Matching never
//! reorders or mutates the table, so repeated lookups are stable.
//!
//! ## Example
//!
//! ```
//! use waypost::Router;
//!
//! let mut router = Router::new();
//! router.add_route("/about", "About");
//! router.add_route("/users/([a-z]+)/profile", "Profile");
//! router.set_not_found("NotFound");
//!
//! let route_match = router.match_path("/users/alice/profile").unwrap();
//! assert_eq!(route_match.handler, Some(&"Profile"));
//! assert_eq!(route_match.params.get("alice"), Some(&"alice".to_string()));
//!
//! let missing = router.match_path("/nowhere").unwrap();
//! assert!(missing.is_fallback());
//! assert_eq!(missing.handler, Some(&"NotFound"));
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

mod callback;
pub mod config;
mod error;
pub mod location;
pub mod menu;
pub mod page;
pub mod path;
pub mod route;
mod router;

pub use callback::Callback;
pub use config::Config;
pub use error::{Result, RouterError};
pub use location::{current_route, LocationSource, StaticLocation};
pub use menu::{to_menu_items, MenuItem, Menus};
pub use page::{FsViewLoader, PageLoader, PageRegistry, PageResolver, StaticViewLoader, View};
pub use path::{infer_param_name, last_segment, normalize_path, strip_base_path};
pub use route::Route;
pub use router::{RouteMatch, Router};

/// Parameter bindings extracted from a matched path (name → value)
pub type Params = HashMap<String, String>;
