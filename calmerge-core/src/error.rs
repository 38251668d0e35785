//! Error types for calmerge.

use thiserror::Error;

/// Errors that abort a merge run.
#[derive(Error, Debug)]
pub enum CalMergeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calmerge operations.
pub type CalMergeResult<T> = Result<T, CalMergeError>;

/// Errors scoped to a single feed.
///
/// A feed that fails with one of these is skipped; the rest of the run
/// carries on.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid feed URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not parse calendar from {url}: {reason}")]
    Parse { url: String, reason: String },
}

impl FeedError {
    /// The feed URL this error refers to.
    pub fn url(&self) -> &str {
        match self {
            FeedError::InvalidUrl { url, .. }
            | FeedError::Transport { url, .. }
            | FeedError::Status { url, .. }
            | FeedError::Parse { url, .. } => url,
        }
    }
}
