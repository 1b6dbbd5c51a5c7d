use thiserror::Error;

/// Why a catalog load failed.
///
/// Any variant leaves the previous working set in place.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The HTTP request could not be completed.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("catalog request returned HTTP {0}")]
    Status(u16),
    /// The document is not a JSON array of book records.
    #[error("catalog is not a valid book list: {0}")]
    Decode(#[from] serde_json::Error),
    /// The background loader is no longer accepting requests.
    #[error("catalog loader is not running")]
    LoaderStopped,
}
