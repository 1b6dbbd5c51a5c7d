//! Loading the working set from its data source.

mod error;
mod fetch;

pub use error::LoadError;
pub use fetch::{decode, is_remote, load};

/// Default logical path of the catalog document.
pub const DEFAULT_SOURCE: &str = "books.json";

/// Request sent to the loader worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Load id allocated by `CatalogEngine::begin_load`.
    pub id: u64,
    /// Path or URL to load from.
    pub source: String,
}

/// Completion sent back by the loader worker.
#[derive(Debug)]
pub struct LoadResponse {
    /// Id of the request this answers.
    pub id: u64,
    /// Records or the failure.
    pub result: Result<Vec<crate::state::BookRecord>, LoadError>,
}
