/// Collaborator traits for Slotlist
///
/// These are the only seams between the scheduling core and the outside
/// world. The HTTP client implements them for the real service; tests use
/// in-memory fakes.
use crate::error::Result;
use crate::types::{DeviceId, NowPlaying, PlaylistId, PlaylistMeta, Track, UserId};
use async_trait::async_trait;

/// Playlist service
///
/// Read and write access to a playlist's metadata and track order.
#[async_trait]
pub trait PlaylistService: Send + Sync {
    /// Get title, description and owner of a playlist
    async fn playlist_meta(&self, id: &PlaylistId) -> Result<PlaylistMeta>;

    /// Get every track of a playlist in playlist order
    ///
    /// Implementations must follow pagination themselves; callers always
    /// receive the fully materialized list.
    async fn all_tracks(&self, id: &PlaylistId) -> Result<Vec<Track>>;

    /// Replace the playlist's description text
    async fn replace_description(&self, id: &PlaylistId, description: &str) -> Result<()>;

    /// Move `range_length` tracks starting at `range_start` so they end up
    /// before the track currently at `insert_before`
    async fn reorder_tracks(
        &self,
        id: &PlaylistId,
        range_start: usize,
        range_length: usize,
        insert_before: usize,
    ) -> Result<()>;

    /// Remove the occurrence of `uri` at `position`
    async fn remove_track(&self, id: &PlaylistId, uri: &str, position: usize) -> Result<()>;

    /// Get the ID of the authenticated user
    async fn current_user_id(&self) -> Result<UserId>;
}

/// Player service
///
/// Control over the user's live playback session.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Get the currently loaded track, or `None` when nothing is playing
    async fn currently_playing(&self) -> Result<Option<NowPlaying>>;

    /// Get the tracks queued after the current one
    async fn queue(&self) -> Result<Vec<Track>>;

    /// Append a track to the playback queue
    async fn enqueue(&self, uri: &str, device: Option<&DeviceId>) -> Result<()>;

    /// Skip to the next track in the queue
    async fn skip_next(&self, device: Option<&DeviceId>) -> Result<()>;
}
