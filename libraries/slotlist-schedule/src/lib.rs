//! Slotlist - Schedule Model
//!
//! Daily schedules embedded in playlist descriptions, and the playlists
//! partitioned by them.
//!
//! This crate provides:
//! - [`Schedule`]: slot lengths and capacities with an implicit tail slot
//! - Token parsing and rendering (`(msv1|60,60|2,3)`)
//! - [`Slot`]: a time window and its tracks
//! - [`ScheduledPlaylist`]: re-partitioning after split, resize, remove and move edits
//! - [`PlaylistEdit`]: edits as values, with the remote track change they imply
//!
//! # Architecture
//!
//! Everything here is a pure value. Edits never touch their input; they
//! return a new playlist rebuilt from the schedule its slots imply. No I/O,
//! no async, no logging.
//!
//! # Example
//!
//! ```rust
//! use slotlist_core::{PlaylistId, Track};
//! use slotlist_schedule::{Schedule, ScheduledPlaylist};
//! use std::sync::Arc;
//!
//! let schedule = Schedule::parse("Weekday radio (msv1|60,60|2,3)").unwrap();
//! let tracks = (0..10)
//!     .map(|i| Arc::new(Track::new(format!("t{i}"), format!("spotify:track:t{i}"), "Song", 180_000)))
//!     .collect();
//!
//! let playlist = ScheduledPlaylist::from_schedule(PlaylistId::new("pl"), "Radio", &schedule, tracks);
//! assert_eq!(playlist.slots().len(), 3);
//! assert_eq!(playlist.slots()[2].count(), 5);
//!
//! let split = playlist.split_slot(0);
//! assert_eq!(split.schedule().to_token(), "(msv1|30,30,60|1,1,3)");
//! ```

#![forbid(unsafe_code)]

pub mod edit;
pub mod error;
pub mod playlist;
pub mod schedule;
pub mod slot;
pub mod time;
pub mod token;

pub use edit::{EditOutcome, PlaylistEdit, TrackChange};
pub use error::{Result, ScheduleError};
pub use playlist::ScheduledPlaylist;
pub use schedule::{ExplicitSlot, Schedule, SlotPlan};
pub use slot::{Slot, TrackRef};
pub use time::{format_minute, parse_clock_time};
pub use token::{embed_in_description, has_schedule, strip_token, TOKEN_TAG};
