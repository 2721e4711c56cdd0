mod ids;
mod playback;
mod playlist;
mod track;

pub use ids::{DeviceId, PlaylistId, TrackId, UserId};
pub use playback::NowPlaying;
pub use playlist::PlaylistMeta;
pub use track::Track;
