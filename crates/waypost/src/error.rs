use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while matching routes or loading pages
///
/// An unmatched path is not an error: it yields the fallback handler.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A registered pattern failed to compile as a regular expression
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The location has no page mapping and no default page is configured
    #[error("no page mapped for location `{0}` and no default page configured")]
    PageNotFound(String),

    /// A page id resolved, but nothing is registered to load it
    #[error("no loader registered for page `{0}`")]
    NoLoader(String),

    /// The loader could not read the view
    #[error("failed to load view `{page}` from {path:?}: {source}")]
    ViewLoad {
        page: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RouterError>;
