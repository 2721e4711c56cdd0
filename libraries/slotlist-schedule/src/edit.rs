//! User edits as values
//!
//! An edit turns one [`ScheduledPlaylist`] into the next and describes the
//! change the remote track list needs so it keeps matching. The schedule
//! half of the change is always the new playlist's derived schedule.

use crate::playlist::ScheduledPlaylist;
use serde::{Deserialize, Serialize};

/// One user edit of a scheduled playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaylistEdit {
    SplitSlot {
        slot: usize,
    },
    ResizeSlot {
        slot: usize,
        length_minutes: u32,
    },
    RemoveSlot {
        slot: usize,
    },
    RemoveTrack {
        slot: usize,
        index: usize,
    },
    MoveTrack {
        from_slot: usize,
        from_index: usize,
        to_slot: usize,
        to_index: usize,
    },
}

/// Change to apply to the remote track list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackChange {
    /// Move the single track at `range_start` before `insert_before`,
    /// both positions counted in the list before the move
    Reorder {
        range_start: usize,
        insert_before: usize,
    },

    /// Delete the occurrence of `uri` at `position`
    Remove { uri: String, position: usize },
}

/// Result of applying an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Playlist after the edit
    pub playlist: ScheduledPlaylist,

    /// Remote track list change, if the track order changed
    pub track_change: Option<TrackChange>,
}

impl EditOutcome {
    /// Whether the edit had any effect
    pub fn changed(&self, before: &ScheduledPlaylist) -> bool {
        &self.playlist != before
    }
}

impl PlaylistEdit {
    /// Apply the edit to `playlist`
    pub fn apply(&self, playlist: &ScheduledPlaylist) -> EditOutcome {
        match *self {
            PlaylistEdit::SplitSlot { slot } => schedule_only(playlist.split_slot(slot)),
            PlaylistEdit::ResizeSlot {
                slot,
                length_minutes,
            } => schedule_only(playlist.resize_slot(slot, length_minutes)),
            PlaylistEdit::RemoveSlot { slot } => schedule_only(playlist.remove_slot(slot)),
            PlaylistEdit::RemoveTrack { slot, index } => {
                let track_change = playlist.absolute_index(slot, index).and_then(|position| {
                    let track = playlist.slots()[slot].track_at(index)?;
                    Some(TrackChange::Remove {
                        uri: track.uri.clone(),
                        position,
                    })
                });
                EditOutcome {
                    playlist: playlist.remove_track(slot, index),
                    track_change,
                }
            }
            PlaylistEdit::MoveTrack {
                from_slot,
                from_index,
                to_slot,
                to_index,
            } => {
                let next = playlist.move_track(from_slot, from_index, to_slot, to_index);
                let track_change = reorder_for_move(
                    playlist, &next, from_slot, from_index, to_slot, to_index,
                );
                EditOutcome {
                    playlist: next,
                    track_change,
                }
            }
        }
    }
}

fn schedule_only(playlist: ScheduledPlaylist) -> EditOutcome {
    EditOutcome {
        playlist,
        track_change: None,
    }
}

fn reorder_for_move(
    before: &ScheduledPlaylist,
    after: &ScheduledPlaylist,
    from_slot: usize,
    from_index: usize,
    to_slot: usize,
    to_index: usize,
) -> Option<TrackChange> {
    let insert_at = before.move_target(from_slot, from_index, to_slot, to_index)?;
    let from = before.absolute_index(from_slot, from_index)?;
    let to = after.absolute_index(to_slot, insert_at)?;

    if from == to {
        return None;
    }

    let insert_before = if to > from { to + 1 } else { to };
    Some(TrackChange::Reorder {
        range_start: from,
        insert_before,
    })
}
