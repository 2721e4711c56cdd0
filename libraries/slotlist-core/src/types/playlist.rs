/// Playlist domain types
use crate::types::{PlaylistId, UserId};
use serde::{Deserialize, Serialize};

/// Playlist metadata as returned by the playlist service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistMeta {
    /// Playlist identifier
    pub id: PlaylistId,

    /// Display title
    pub title: String,

    /// Free-text description; may contain an embedded schedule token
    pub description: String,

    /// Owner user ID
    pub owner_id: UserId,
}

impl PlaylistMeta {
    /// Whether the given user owns this playlist
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_id == user
    }
}
