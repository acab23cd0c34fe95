//! Error types for the nilch-dispatch crate.
//!
//! All errors use stable string messages suitable for display to users.
//! Missing-query and empty-result conditions are not errors — they are
//! response classifications ([`crate::types::SearchResponse::NoQuery`] /
//! [`crate::types::SearchResponse::NoResults`]) routed through the failure
//! policy. Per-item render faults (an unparseable result URL, a broken
//! image) are recovered locally by the renderers and never surface here.

/// Errors that can occur while dispatching a search page load.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// An HTTP request to the backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend response body was neither a sentinel nor valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid dispatch configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A URL could not be parsed or constructed.
    #[error("URL error: {0}")]
    Url(String),
}

/// Convenience type alias for nilch-dispatch results.
pub type Result<T> = std::result::Result<T, DispatchError>;
