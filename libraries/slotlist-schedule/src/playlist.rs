//! Playlist partitioned into the slots of its schedule
//!
//! [`ScheduledPlaylist::from_schedule`] is the only place slots are built.
//! Every edit works on a copy of the slots, derives the schedule those
//! slots imply, and hands it back to `from_schedule` together with the
//! flattened track order. Slot boundaries and track counts therefore can
//! never drift apart.

use crate::schedule::{ExplicitSlot, Schedule, SlotPlan};
use crate::slot::{Slot, TrackRef};
use slotlist_core::{Clock, PlaylistId, TrackId, MINUTES_PER_DAY};

/// A playlist with its tracks assigned to daily time slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledPlaylist {
    id: PlaylistId,
    title: String,
    slots: Vec<Slot>,
}

impl ScheduledPlaylist {
    /// Partition `tracks` according to `schedule`
    ///
    /// Each slot takes up to its capacity from the front of the remaining
    /// tracks. The last slot takes everything left over.
    pub fn from_schedule(
        id: PlaylistId,
        title: impl Into<String>,
        schedule: &Schedule,
        tracks: Vec<TrackRef>,
    ) -> Self {
        let plans = schedule.expand();
        let last = plans.len().saturating_sub(1);
        let mut remaining = tracks.into_iter();
        let mut slots = Vec::with_capacity(plans.len());

        for (index, plan) in plans.iter().enumerate() {
            let assigned: Vec<TrackRef> = match plan.capacity() {
                Some(capacity) if index < last => {
                    remaining.by_ref().take(capacity as usize).collect()
                }
                _ => remaining.by_ref().collect(),
            };
            slots.push(Slot::with_tracks(
                plan.start_minute(),
                plan.end_minute(),
                assigned,
            ));
        }

        Self {
            id,
            title: title.into(),
            slots,
        }
    }

    /// Partition `tracks` by the schedule embedded in `description`
    ///
    /// `None` if the description has no valid schedule token.
    pub fn from_description(
        id: PlaylistId,
        title: impl Into<String>,
        description: &str,
        tracks: Vec<TrackRef>,
    ) -> Option<Self> {
        let schedule = Schedule::parse(description)?;
        Some(Self::from_schedule(id, title, &schedule, tracks))
    }

    fn with_slots(&self, slots: Vec<Slot>) -> Self {
        let schedule = schedule_of(&slots);
        let tracks = slots
            .iter()
            .flat_map(|slot| slot.tracks().iter().cloned())
            .collect();
        Self::from_schedule(self.id.clone(), self.title.clone(), &schedule, tracks)
    }

    /// Split slot `index` into two halves of its window and tracks
    pub fn split_slot(&self, index: usize) -> Self {
        let Some((first, second)) = self.slots.get(index).and_then(Slot::split) else {
            return self.clone();
        };

        let mut slots = self.slots.clone();
        slots.splice(index..=index, [first, second]);
        self.with_slots(slots)
    }

    /// Move the end of slot `index` so it lasts `new_length` minutes
    ///
    /// The next slot's start follows the new end while its own end stays
    /// put. Rejected if the next slot would vanish or the last slot would
    /// run past midnight.
    pub fn resize_slot(&self, index: usize, new_length: u32) -> Self {
        let Some(resized) = self.slots.get(index).and_then(|s| s.resize(new_length)) else {
            return self.clone();
        };

        let new_end = resized.end_minute();
        let mut slots = self.slots.clone();
        slots[index] = resized;

        match slots.get_mut(index + 1) {
            Some(next) if new_end < next.end_minute() => {
                *next = next.with_start_minute(new_end);
            }
            Some(_) => return self.clone(),
            None if new_end > MINUTES_PER_DAY => return self.clone(),
            None => {}
        }

        self.with_slots(slots)
    }

    /// Merge slot `index` into the slot after it
    ///
    /// The next slot starts where the removed one did and receives its
    /// tracks in front of its own. The last slot cannot be removed.
    pub fn remove_slot(&self, index: usize) -> Self {
        if index + 1 >= self.slots.len() {
            return self.clone();
        }

        let mut slots = self.slots.clone();
        let removed = slots.remove(index);
        let next = &slots[index];

        let merged: Vec<TrackRef> = removed
            .tracks()
            .iter()
            .chain(next.tracks())
            .cloned()
            .collect();
        slots[index] = next
            .with_start_minute(removed.start_minute())
            .with_track_list(merged);

        self.with_slots(slots)
    }

    /// Drop one track from a slot
    pub fn remove_track(&self, slot_index: usize, track_index: usize) -> Self {
        match self.slots.get(slot_index) {
            Some(slot) if track_index < slot.count() => {
                let mut slots = self.slots.clone();
                slots[slot_index] = slot.remove_track(track_index);
                self.with_slots(slots)
            }
            _ => self.clone(),
        }
    }

    /// Move a track to a new position, possibly in another slot
    ///
    /// Within one slot, `to_index` refers to the position before the move,
    /// so moving down by one lands the track after its old neighbour.
    pub fn move_track(
        &self,
        from_slot: usize,
        from_index: usize,
        to_slot: usize,
        to_index: usize,
    ) -> Self {
        let Some(insert_at) = self.move_target(from_slot, from_index, to_slot, to_index) else {
            return self.clone();
        };
        let Some(track) = self.slots[from_slot].track_at(from_index).cloned() else {
            return self.clone();
        };

        let mut slots = self.slots.clone();
        slots[from_slot] = slots[from_slot].remove_track(from_index);
        slots[to_slot] = slots[to_slot].add_track(insert_at, track);
        self.with_slots(slots)
    }

    /// Insertion index inside `to_slot` once the moved track is taken out
    ///
    /// `None` if any index is out of range.
    pub(crate) fn move_target(
        &self,
        from_slot: usize,
        from_index: usize,
        to_slot: usize,
        to_index: usize,
    ) -> Option<usize> {
        let source = self.slots.get(from_slot)?;
        let target = self.slots.get(to_slot)?;
        source.track_at(from_index)?;

        if from_slot == to_slot {
            let adjusted = if from_index < to_index {
                to_index - 1
            } else {
                to_index
            };
            (adjusted < source.count()).then_some(adjusted)
        } else {
            (to_index <= target.count()).then_some(to_index)
        }
    }

    pub fn id(&self) -> &PlaylistId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// All tracks in slot order
    pub fn tracks(&self) -> Vec<TrackRef> {
        self.slots
            .iter()
            .flat_map(|slot| slot.tracks().iter().cloned())
            .collect()
    }

    pub fn track_count(&self) -> usize {
        self.slots.iter().map(Slot::count).sum()
    }

    /// Schedule implied by the current slot windows and track counts
    pub fn schedule(&self) -> Schedule {
        schedule_of(&self.slots)
    }

    /// Number of tracks in the slots before `slot_index`
    pub fn tracks_before_slot(&self, slot_index: usize) -> usize {
        self.slots.iter().take(slot_index).map(Slot::count).sum()
    }

    /// Position in the flat track list of a track addressed by slot
    pub fn absolute_index(&self, slot_index: usize, track_index: usize) -> Option<usize> {
        let slot = self.slots.get(slot_index)?;
        (track_index < slot.count()).then(|| self.tracks_before_slot(slot_index) + track_index)
    }

    /// Index of the first slot holding track `id`
    pub fn slot_index_of_track(&self, id: &TrackId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.contains_track(id))
    }

    /// Position in the flat track list of the first occurrence of `id`
    pub fn absolute_index_of_track(&self, id: &TrackId) -> Option<usize> {
        self.slots
            .iter()
            .flat_map(|slot| slot.tracks())
            .position(|track| &track.id == id)
    }

    /// The slot whose window contains the clock's current minute
    pub fn active_slot(&self, clock: &dyn Clock) -> Option<(usize, &Slot)> {
        let minute = clock.minute_of_day();
        self.slots
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.contains_minute(minute))
    }

    /// Absolute start and capacity plan behind each slot
    pub fn plan(&self) -> Vec<SlotPlan> {
        self.schedule().expand()
    }
}

fn schedule_of(slots: &[Slot]) -> Schedule {
    let explicit = slots
        .iter()
        .map(|slot| {
            let count = u32::try_from(slot.count()).unwrap_or(u32::MAX);
            ExplicitSlot::new(slot.length(), count)
        })
        .collect();
    Schedule::canonical(explicit)
}
