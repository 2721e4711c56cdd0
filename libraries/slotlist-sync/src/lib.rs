//! Slotlist - Playback Sync
//!
//! Keeps a live player inside the active slot of a scheduled playlist, and
//! loads and saves schedule edits.
//!
//! # Architecture
//!
//! - [`Synchronizer`]: one reconciliation tick against the player
//! - [`ScheduledTask`]: interval task cancelled on stop or drop
//! - [`SyncManager`]: owns the task and the current playlist snapshot
//! - [`PlaylistEditor`]: load / init / edit + persist through [`PlaylistService`]
//!
//! Player and playlist access go through the collaborator traits in
//! `slotlist-core`, and the time of day through an injected [`Clock`].
//!
//! [`PlaylistService`]: slotlist_core::PlaylistService
//! [`Clock`]: slotlist_core::Clock

mod editor;
mod error;
mod manager;
mod synchronizer;
mod task;
mod types;

// Public exports
pub use editor::{LoadedPlaylist, PlaylistEditor};
pub use error::{Result, SyncError};
pub use manager::SyncManager;
pub use synchronizer::Synchronizer;
pub use task::{PeriodicJob, ScheduledTask};
pub use types::{SlotSyncStatus, SyncConfig, TickOutcome, TickReport};
