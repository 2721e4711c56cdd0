//! A time window of the day plus the tracks assigned to it

use slotlist_core::{Clock, Track, TrackId, MINUTES_PER_DAY};
use std::sync::Arc;

/// Shared handle to a track
///
/// Slots only own their ordering; the track data is shared between every
/// playlist value derived from the same load.
pub type TrackRef = Arc<Track>;

/// One contiguous window `[start_minute, end_minute)` and its tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    start_minute: u32,
    end_minute: u32,
    tracks: Vec<TrackRef>,
}

impl Slot {
    /// Create an empty slot
    pub fn new(start_minute: u32, end_minute: u32) -> Self {
        Self::with_tracks(start_minute, end_minute, Vec::new())
    }

    /// Create a slot holding `tracks` in order
    pub fn with_tracks(start_minute: u32, end_minute: u32, tracks: Vec<TrackRef>) -> Self {
        Self {
            start_minute,
            end_minute,
            tracks,
        }
    }

    /// Same end and tracks, new start
    pub fn with_start_minute(&self, start_minute: u32) -> Self {
        Self::with_tracks(start_minute, self.end_minute, self.tracks.clone())
    }

    /// Same window, new tracks
    pub fn with_track_list(&self, tracks: Vec<TrackRef>) -> Self {
        Self::with_tracks(self.start_minute, self.end_minute, tracks)
    }

    /// Split into two halves
    ///
    /// An odd minute goes to the first half. Tracks are split by position,
    /// the first half getting the smaller share. Returns `None` for
    /// one-minute slots.
    pub fn split(&self) -> Option<(Slot, Slot)> {
        let length = self.length();
        if length <= 1 {
            return None;
        }

        let middle = self.start_minute + length / 2 + length % 2;
        let (first, second) = self.tracks.split_at(self.tracks.len() / 2);

        Some((
            Slot::with_tracks(self.start_minute, middle, first.to_vec()),
            Slot::with_tracks(middle, self.end_minute, second.to_vec()),
        ))
    }

    /// Move the end so the slot is `new_length` minutes long
    ///
    /// Returns `None` if the length is zero or longer than a day.
    pub fn resize(&self, new_length: u32) -> Option<Slot> {
        if new_length < 1 || new_length > MINUTES_PER_DAY {
            return None;
        }
        Some(Slot::with_tracks(
            self.start_minute,
            self.start_minute + new_length,
            self.tracks.clone(),
        ))
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn length(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }

    pub fn track_at(&self, index: usize) -> Option<&TrackRef> {
        self.tracks.get(index)
    }

    /// Copy without the track at `index`; unchanged if out of range
    pub fn remove_track(&self, index: usize) -> Slot {
        if index >= self.tracks.len() {
            return self.clone();
        }
        let mut tracks = self.tracks.clone();
        tracks.remove(index);
        self.with_track_list(tracks)
    }

    /// Copy with `track` inserted before `index`; unchanged if `index > count`
    pub fn add_track(&self, index: usize, track: TrackRef) -> Slot {
        if index > self.tracks.len() {
            return self.clone();
        }
        let mut tracks = self.tracks.clone();
        tracks.insert(index, track);
        self.with_track_list(tracks)
    }

    pub fn is_first(&self) -> bool {
        self.start_minute == 0
    }

    pub fn is_last(&self) -> bool {
        self.end_minute == MINUTES_PER_DAY
    }

    /// Content-derived key, changes whenever the window or tracks change
    pub fn id(&self) -> String {
        let mut id = format!("id-{}-{}-", self.start_minute, self.end_minute);
        let ids: Vec<&str> = self.tracks.iter().map(|t| t.id.as_str()).collect();
        id.push_str(&ids.join("-"));
        id
    }

    /// Whether `minute` of the day falls inside this window
    pub fn contains_minute(&self, minute: u32) -> bool {
        minute >= self.start_minute && minute < self.end_minute
    }

    /// Whether the window contains the clock's current minute
    pub fn should_play_now(&self, clock: &dyn Clock) -> bool {
        self.contains_minute(clock.minute_of_day())
    }

    pub fn contains_uri(&self, uri: &str) -> bool {
        self.tracks.iter().any(|t| t.uri == uri)
    }

    pub fn contains_track(&self, id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == id)
    }

    /// Track following `id`, wrapping from the last to the first
    ///
    /// `None` if `id` is not in the slot or is the only track.
    pub fn track_after(&self, id: &TrackId) -> Option<&TrackRef> {
        let index = self.tracks.iter().position(|t| &t.id == id)?;
        if self.tracks.len() < 2 {
            return None;
        }
        self.tracks.get((index + 1) % self.tracks.len())
    }

    pub fn first_track(&self) -> Option<&TrackRef> {
        self.tracks.first()
    }
}
