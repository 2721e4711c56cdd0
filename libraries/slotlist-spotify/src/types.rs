//! Types for Spotify Web API requests and responses.

use serde::{Deserialize, Serialize};
use slotlist_core::{DeviceId, NowPlaying, PlaylistId, PlaylistMeta, Track, UserId};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configuration for connecting to the Spotify Web API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root (e.g., "https://api.spotify.com/v1")
    pub base_url: String,
    /// OAuth bearer token
    pub access_token: String,
}

impl ApiConfig {
    /// Create a config against the public API root.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_token)
    }

    /// Create a config against a custom API root.
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }
}

// =============================================================================
// Playlist Types
// =============================================================================

/// One page of a paginated collection.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Absolute URL of the next page, if any
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OwnerObject {
    pub id: String,
}

/// Subset of the playlist object we read.
#[derive(Debug, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
    /// `null` when the playlist never had a description
    pub description: Option<String>,
    pub owner: OwnerObject,
}

impl From<PlaylistObject> for PlaylistMeta {
    fn from(playlist: PlaylistObject) -> Self {
        Self {
            id: PlaylistId::new(playlist.id),
            title: playlist.name,
            description: playlist.description.unwrap_or_default(),
            owner_id: UserId::new(playlist.owner.id),
        }
    }
}

/// Entry of a playlist's track list; `track` is `null` for unavailable items.
#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackObject>,
}

/// Prefix of the id and uri given to unavailable playlist items
pub const UNAVAILABLE_PREFIX: &str = "unavailable:";

impl PlaylistItem {
    /// Convert the item at `position` of the playlist
    ///
    /// Unavailable items become a placeholder so local indices keep
    /// matching remote positions.
    pub fn into_track(self, position: usize) -> Track {
        match self.track {
            Some(track) => track.into(),
            None => {
                let id = format!("{UNAVAILABLE_PREFIX}{position}");
                Track::new(id.clone(), id, "Unavailable track", 0)
            }
        }
    }
}

/// Track (or episode) as returned in playlists, the queue and the player.
#[derive(Debug, Deserialize)]
pub struct TrackObject {
    /// `null` for local files
    pub id: Option<String>,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub duration_ms: u64,
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let id = track.id.unwrap_or_else(|| track.uri.clone());
        Track::new(id, track.uri, track.name, track.duration_ms)
    }
}

#[derive(Debug, Serialize)]
pub struct DescriptionUpdate<'a> {
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ReorderRequest {
    pub range_start: usize,
    pub range_length: usize,
    pub insert_before: usize,
}

#[derive(Debug, Serialize)]
pub struct RemoveTracksRequest<'a> {
    pub tracks: Vec<TrackPositions<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TrackPositions<'a> {
    pub uri: &'a str,
    pub positions: Vec<usize>,
}

/// Current user profile.
#[derive(Debug, Deserialize)]
pub struct UserObject {
    pub id: String,
}

// =============================================================================
// Player Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct DeviceObject {
    pub id: Option<String>,
}

/// Playback state.
#[derive(Debug, Deserialize)]
pub struct PlaybackState {
    #[serde(default)]
    pub is_playing: bool,
    pub device: Option<DeviceObject>,
    /// `null` while switching tracks or during ads
    pub item: Option<TrackObject>,
}

impl PlaybackState {
    /// Convert into the core snapshot; `None` without a loaded item.
    pub fn into_now_playing(self) -> Option<NowPlaying> {
        let device_id = self.device.and_then(|d| d.id).map(DeviceId::new);
        self.item.map(|item| NowPlaying {
            track: item.into(),
            is_playing: self.is_playing,
            device_id,
        })
    }
}

/// The user's playback queue.
#[derive(Debug, Deserialize)]
pub struct QueueObject {
    #[serde(default)]
    pub queue: Vec<TrackObject>,
}
