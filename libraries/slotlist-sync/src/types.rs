use serde::{Deserialize, Serialize};
use slotlist_core::TrackId;
use std::time::Duration;

/// Tunables of the playback synchronizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Seconds between two ticks
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Skips attempted per tick while playback is outside the active slot
    #[serde(default = "default_max_skip_attempts")]
    pub max_skip_attempts: u32,

    /// Pause after each skip before checking playback again
    #[serde(default = "default_skip_retry_delay_ms")]
    pub skip_retry_delay_ms: u64,
}

fn default_interval_secs() -> u64 {
    30
}

fn default_max_skip_attempts() -> u32 {
    5
}

fn default_skip_retry_delay_ms() -> u64 {
    1000
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_skip_attempts: default_max_skip_attempts(),
            skip_retry_delay_ms: default_skip_retry_delay_ms(),
        }
    }
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn skip_retry_delay(&self) -> Duration {
        Duration::from_millis(self.skip_retry_delay_ms)
    }
}

/// Sync state of the active slot, re-evaluated every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSyncStatus {
    /// No slot is being synced
    #[default]
    NotActive,
    /// Playback is inside the active slot, or nothing is playing
    ActiveAndInSync,
    /// Playback is foreign and skips are being issued
    ActiveAndCorrecting,
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No slot contains the current minute
    NoActiveSlot,

    /// The active slot has no tracks
    EmptySlot { slot: usize },

    /// The player has nothing loaded
    NothingPlaying { slot: usize },

    /// Queue and playback were checked against the active slot
    Reconciled(TickReport),
}

/// Details of a reconciled tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Index of the active slot
    pub slot: usize,

    /// Track appended to the queue, if any
    pub enqueued: Option<TrackId>,

    /// Number of skips issued
    pub skips: u32,

    /// Whether playback ended the tick inside the slot
    pub in_sync: bool,
}
