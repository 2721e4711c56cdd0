/// CLI error types
use slotlist_core::PlaylistId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Playlist {0} has no schedule yet (run `slotlist init {0}`)")]
    NotScheduled(PlaylistId),
}
