/// ID types for Slotlist entities
///
/// All identifiers are opaque strings owned by the external playlist/player
/// service; they are never generated locally.
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Account of the service user
    UserId
);
string_id!(
    /// Catalog track; local files use their URI
    TrackId
);
string_id!(
    /// Playlist on the service
    PlaylistId
);
string_id!(
    /// Playback device (phone, desktop app, speaker)
    DeviceId
);
