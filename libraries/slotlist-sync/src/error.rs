use slotlist_core::{PlaylistId, SlotlistError};
use thiserror::Error;

/// Errors that can occur while syncing playback or persisting edits
#[derive(Error, Debug)]
pub enum SyncError {
    /// A playlist or player call failed
    #[error("Service error: {0}")]
    Service(#[from] SlotlistError),

    #[error("Sync already running")]
    AlreadyRunning,

    #[error("Sync not running")]
    NotRunning,

    /// The playlist already carries a schedule
    #[error("Playlist {0} already has a schedule")]
    AlreadyScheduled(PlaylistId),

    /// Only the owner may change a playlist's schedule
    #[error("Playlist {0} is not owned by the current user")]
    NotOwner(PlaylistId),

    #[error("Invalid sync configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
