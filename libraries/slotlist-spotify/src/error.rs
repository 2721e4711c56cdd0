//! Error types for the Spotify client.

use slotlist_core::SlotlistError;
use thiserror::Error;

/// Errors that can occur when talking to the Spotify Web API.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The access token is missing, expired or revoked
    #[error("Authentication required")]
    AuthRequired,

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for Spotify client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;

impl From<SpotifyError> for SlotlistError {
    fn from(err: SpotifyError) -> Self {
        match err {
            SpotifyError::Request(e) => SlotlistError::network(e.to_string()),
            SpotifyError::AuthRequired => SlotlistError::AuthRequired,
            SpotifyError::NotFound(message) => SlotlistError::Service {
                status: 404,
                message,
            },
            SpotifyError::RateLimited { retry_after_secs } => SlotlistError::Service {
                status: 429,
                message: format!("rate limited, retry after {retry_after_secs}s"),
            },
            SpotifyError::Api { status: 403, message } => SlotlistError::permission_denied(message),
            SpotifyError::Api { status, message } => SlotlistError::Service { status, message },
            SpotifyError::InvalidUrl(msg) => SlotlistError::invalid_input(msg),
            SpotifyError::ParseError(msg) => SlotlistError::Other(msg),
        }
    }
}
