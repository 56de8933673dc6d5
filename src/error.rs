//! Error types for PokeAPI operations.

use thiserror::Error;

/// Errors that can occur during PokeAPI operations.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// Configuration value is present but unusable.
    #[error("Invalid PokeAPI configuration: {0}")]
    ConfigInvalid(String),

    /// The catalog answered with a non-success status.
    #[error("PokeAPI returned HTTP {status_code}: {message}")]
    HttpStatusError { status_code: u16, message: String },

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Transport or connection failure.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The response body was not valid JSON or lacked an expected field.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl PokeApiError {
    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatusError { status_code, .. } => Some(*status_code),
            Self::RateLimited { .. } => Some(429),
            Self::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the catalog reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Result type alias for PokeAPI operations.
pub type Result<T> = core::result::Result<T, PokeApiError>;
