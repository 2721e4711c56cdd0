//! Slotlist Core
//!
//! Platform-agnostic core types, traits, and error handling for Slotlist.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `PlaylistMeta`, `NowPlaying` and the ID newtypes
//! - **Core Traits**: `PlaylistService`, `PlayerService`, `Clock`
//! - **Error Handling**: Unified `SlotlistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use slotlist_core::{Clock, FixedClock, Track};
//!
//! let track = Track::new("4uLU6hMCjMI75M1A2tKUQC", "spotify:track:4uLU6hMCjMI75M1A2tKUQC", "Song", 213_000);
//! assert_eq!(track.duration_display(), "3:33");
//!
//! let clock = FixedClock::at(9, 15);
//! assert_eq!(clock.minute_of_day(), 555);
//! ```

#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock, MINUTES_PER_DAY};
pub use error::{Result, SlotlistError};
pub use traits::{PlayerService, PlaylistService};

pub use types::{DeviceId, NowPlaying, PlaylistId, PlaylistMeta, Track, TrackId, UserId};
