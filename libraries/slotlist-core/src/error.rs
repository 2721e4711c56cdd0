/// Core error types for Slotlist
use thiserror::Error;
use crate::types::PlaylistId;

/// Result type alias using `SlotlistError`
pub type Result<T> = std::result::Result<T, SlotlistError>;

/// Core error type for Slotlist
///
/// Collaborator implementations convert their own errors into this type so
/// the sync layer only has one error surface to handle.
#[derive(Error, Debug)]
pub enum SlotlistError {
    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// The service rejected the request because no valid token is present
    #[error("Authentication required")]
    AuthRequired,

    /// Permission denied with context
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The service answered with an error status
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// No active playback device to send a command to
    #[error("No active playback device")]
    NoActiveDevice,

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SlotlistError {
    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
