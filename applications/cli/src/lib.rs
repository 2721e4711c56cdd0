//! Slotlist command-line front end
//!
//! Wires the Spotify client into the playlist editor and the playback
//! synchronizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
