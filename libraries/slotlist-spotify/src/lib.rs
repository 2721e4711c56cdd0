//! Slotlist Spotify Client
//!
//! HTTP client for the Spotify Web API, implementing the playlist and
//! player services the scheduler and synchronizer work against.
//!
//! # Features
//!
//! - **Playlists**: metadata, paginated track lists, description updates,
//!   track reorder and removal
//! - **Player**: playback state, queue, add to queue, skip
//!
//! # Example
//!
//! ```ignore
//! use slotlist_core::{PlayerService, PlaylistId, PlaylistService};
//! use slotlist_spotify::{ApiConfig, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyClient::new(ApiConfig::new(std::env::var("SPOTIFY_TOKEN")?))?;
//!
//!     let tracks = client.all_tracks(&PlaylistId::new("37i9dQZF1DXcBWIGoYBM5M")).await?;
//!     println!("Found {} tracks", tracks.len());
//!
//!     if let Some(now) = client.currently_playing().await? {
//!         println!("Playing {}", now.track.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod player;
mod playlists;
mod types;

pub use client::SpotifyClient;
pub use error::{Result, SpotifyError};
pub use types::{ApiConfig, DEFAULT_BASE_URL, UNAVAILABLE_PREFIX};
