/// Live playback types
use crate::types::{DeviceId, Track};
use serde::{Deserialize, Serialize};

/// Snapshot of what the external player is currently doing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// The track loaded in the player
    pub track: Track,

    /// Whether playback is running (false when paused)
    pub is_playing: bool,

    /// Device the track is playing on, if the player reports one
    pub device_id: Option<DeviceId>,
}

impl NowPlaying {
    /// Track duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.track.duration_ms
    }
}
