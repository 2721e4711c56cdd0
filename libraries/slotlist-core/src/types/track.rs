/// Track domain types
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A track as referenced by a playlist or the playback queue
///
/// Tracks are owned by the external catalog; Slotlist only keeps references
/// to them and never edits their metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier
    pub id: TrackId,

    /// Playable URI (e.g. `spotify:track:...`)
    pub uri: String,

    /// Display name
    pub name: String,

    /// Track duration in milliseconds
    pub duration_ms: u64,
}

impl Track {
    /// Create a new track reference
    pub fn new(
        id: impl Into<String>,
        uri: impl Into<String>,
        name: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            uri: uri.into(),
            name: name.into(),
            duration_ms,
        }
    }

    /// Track duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Duration formatted as `M:SS`
    pub fn duration_display(&self) -> String {
        let minutes = self.duration_ms / 60_000;
        let seconds = (self.duration_ms % 60_000) / 1000;
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_display_pads_seconds() {
        let track = Track::new("t1", "spotify:track:t1", "Song", 185_000);
        assert_eq!(track.duration_display(), "3:05");
        assert_eq!(track.duration(), Duration::from_secs(185));
    }

    #[test]
    fn duration_display_under_a_minute() {
        let track = Track::new("t1", "spotify:track:t1", "Jingle", 9_999);
        assert_eq!(track.duration_display(), "0:09");
    }
}
