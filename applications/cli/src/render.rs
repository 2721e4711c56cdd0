//! Plain-text rendering of playlists for the terminal.

use slotlist_core::{Clock, PlaylistMeta};
use slotlist_schedule::{format_minute, ScheduledPlaylist};
use std::fmt::Write;

/// One header per slot, then its tracks numbered within the slot
///
/// The slot that holds `clock`'s current minute is marked with `*`.
pub fn render_playlist(playlist: &ScheduledPlaylist, clock: &dyn Clock) -> String {
    let active = playlist.active_slot(clock).map(|(index, _)| index);
    let mut out = String::new();

    let _ = writeln!(out, "{} [{}]", playlist.title(), playlist.schedule());
    for (index, slot) in playlist.slots().iter().enumerate() {
        let marker = if Some(index) == active { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} slot {index}: {}-{} ({} tracks)",
            format_minute(slot.start_minute()),
            format_minute(slot.end_minute()),
            slot.count()
        );
        for (position, track) in slot.tracks().iter().enumerate() {
            let _ = writeln!(
                out,
                "      {position:>3}. {} ({})",
                track.name,
                track.duration_display()
            );
        }
    }

    out
}

pub fn render_unscheduled(meta: &PlaylistMeta, can_add: bool) -> String {
    if can_add {
        format!(
            "{} has no schedule. Run `slotlist init {}` to add one.",
            meta.title, meta.id
        )
    } else {
        format!(
            "{} has no schedule, and only its owner can add one.",
            meta.title
        )
    }
}
