use thiserror::Error;

/// Errors from a single search round trip.
///
/// Every variant is terminal for that attempt; the caller decides what to do.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Base URL and path did not form a valid URL
    #[error("Invalid search URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, TLS, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("TMDB returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a search response
    #[error("Failed to decode search response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SearchError {
    /// Short machine-readable classification, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::ClientBuild(_) => "client_build",
            SearchError::InvalidUrl { .. } => "invalid_url",
            SearchError::Transport(_) => "transport",
            SearchError::Status { .. } => "status",
            SearchError::Decode(_) => "decode",
        }
    }
}
