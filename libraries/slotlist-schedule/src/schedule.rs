//! Daily schedule: a partition of 24 hours into slots with track capacities
//!
//! A schedule only stores its *explicit* slots. Whatever is left of the day
//! after them forms one implicit tail slot with unbounded capacity:
//!
//! ```text
//! explicit:  [ 60 min | cap 2 ][ 60 min | cap 3 ]
//! expanded:  [00:00-01:00 cap 2][01:00-02:00 cap 3][02:00-24:00 unbounded]
//! ```
//!
//! Schedules are values. Every mutation returns a new schedule and leaves
//! the receiver untouched; a mutation that would break an invariant returns
//! an unchanged copy.

use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use slotlist_core::MINUTES_PER_DAY;

/// One explicitly stored slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExplicitSlot {
    /// Slot length in minutes (always positive)
    pub length_minutes: u32,

    /// Target number of tracks
    pub capacity: u32,
}

impl ExplicitSlot {
    pub fn new(length_minutes: u32, capacity: u32) -> Self {
        Self {
            length_minutes,
            capacity,
        }
    }
}

/// A slot of the expanded day, with its absolute start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotPlan {
    /// A slot stored in the schedule
    Explicit {
        start_minute: u32,
        length_minutes: u32,
        capacity: u32,
    },

    /// The computed remainder of the day; takes every leftover track
    ImplicitTail { start_minute: u32, length_minutes: u32 },
}

impl SlotPlan {
    pub fn start_minute(&self) -> u32 {
        match *self {
            SlotPlan::Explicit { start_minute, .. } | SlotPlan::ImplicitTail { start_minute, .. } => {
                start_minute
            }
        }
    }

    pub fn length_minutes(&self) -> u32 {
        match *self {
            SlotPlan::Explicit { length_minutes, .. }
            | SlotPlan::ImplicitTail { length_minutes, .. } => length_minutes,
        }
    }

    pub fn end_minute(&self) -> u32 {
        self.start_minute() + self.length_minutes()
    }

    /// Track capacity, `None` meaning unbounded
    pub fn capacity(&self) -> Option<u32> {
        match *self {
            SlotPlan::Explicit { capacity, .. } => Some(capacity),
            SlotPlan::ImplicitTail { .. } => None,
        }
    }

    pub fn is_implicit(&self) -> bool {
        matches!(self, SlotPlan::ImplicitTail { .. })
    }
}

/// A repeating daily schedule
///
/// Invariants, enforced by every constructor:
/// - every explicit slot is at least one minute long
/// - explicit slots add up to at most a day
/// - explicit slots never add up to exactly a day; the last one is folded
///   into the implicit tail instead, so each effective schedule has exactly
///   one representation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    slots: Vec<ExplicitSlot>,
}

impl Schedule {
    /// Build a schedule from parallel length and capacity lists
    pub fn new(lengths: Vec<u32>, capacities: Vec<u32>) -> Result<Self> {
        if lengths.len() != capacities.len() {
            return Err(ScheduleError::LengthMismatch {
                lengths: lengths.len(),
                capacities: capacities.len(),
            });
        }

        let slots = lengths
            .into_iter()
            .zip(capacities)
            .map(|(length, capacity)| ExplicitSlot::new(length, capacity))
            .collect();

        Self::from_slots(slots)
    }

    /// Build a schedule from explicit slots
    pub fn from_slots(slots: Vec<ExplicitSlot>) -> Result<Self> {
        if let Some(index) = slots.iter().position(|s| s.length_minutes == 0) {
            return Err(ScheduleError::ZeroLength(index));
        }

        let total: u64 = slots.iter().map(|s| u64::from(s.length_minutes)).sum();
        if total > u64::from(MINUTES_PER_DAY) {
            return Err(ScheduleError::ExceedsDay(total));
        }

        Ok(Self::canonical(slots))
    }

    /// The empty schedule: one slot spanning the whole day
    pub fn default_schedule() -> Self {
        Self::default()
    }

    /// Drop a last slot that ends exactly at midnight
    ///
    /// Callers must already have checked the other invariants.
    pub(crate) fn canonical(mut slots: Vec<ExplicitSlot>) -> Self {
        let total: u64 = slots.iter().map(|s| u64::from(s.length_minutes)).sum();
        if total == u64::from(MINUTES_PER_DAY) {
            slots.pop();
        }
        Self { slots }
    }

    /// Explicit slots in order
    pub fn explicit_slots(&self) -> &[ExplicitSlot] {
        &self.slots
    }

    /// Explicit slot lengths in minutes
    pub fn lengths(&self) -> Vec<u32> {
        self.slots.iter().map(|s| s.length_minutes).collect()
    }

    /// Explicit slot capacities
    pub fn capacities(&self) -> Vec<u32> {
        self.slots.iter().map(|s| s.capacity).collect()
    }

    /// Number of explicit slots
    pub fn explicit_len(&self) -> usize {
        self.slots.len()
    }

    /// Sum of explicit slot lengths
    pub fn explicit_minutes(&self) -> u32 {
        self.slots.iter().map(|s| s.length_minutes).sum()
    }

    /// Length of the implicit tail slot, if the explicit slots leave room for one
    pub fn implicit_tail_minutes(&self) -> Option<u32> {
        let remaining = MINUTES_PER_DAY - self.explicit_minutes();
        (remaining > 0).then_some(remaining)
    }

    /// Number of slots in the expanded day
    pub fn slot_count(&self) -> usize {
        self.slots.len() + usize::from(self.implicit_tail_minutes().is_some())
    }

    /// Capacity of explicit slot `index`
    pub fn capacity_at(&self, index: usize) -> Option<u32> {
        self.slots.get(index).map(|s| s.capacity)
    }

    /// Expand into absolute slots covering the whole day
    pub fn expand(&self) -> Vec<SlotPlan> {
        let mut plans = Vec::with_capacity(self.slot_count());
        let mut start_minute = 0;

        for slot in &self.slots {
            plans.push(SlotPlan::Explicit {
                start_minute,
                length_minutes: slot.length_minutes,
                capacity: slot.capacity,
            });
            start_minute += slot.length_minutes;
        }

        if let Some(length_minutes) = self.implicit_tail_minutes() {
            plans.push(SlotPlan::ImplicitTail {
                start_minute,
                length_minutes,
            });
        }

        plans
    }

    /// Give slot `index` a new length
    ///
    /// The difference is taken from (or given to) the next explicit slot so
    /// every later boundary stays where it was. An index past the explicit
    /// slots appends a new empty slot of the requested length instead.
    pub fn resize_at(&self, index: usize, new_length: u32) -> Schedule {
        let mut slots = self.slots.clone();

        if index >= slots.len() {
            slots.push(ExplicitSlot::new(new_length, 0));
            return self.or_unchanged(slots);
        }

        let delta = i64::from(new_length) - i64::from(slots[index].length_minutes);
        slots[index].length_minutes = new_length;

        if let Some(next) = slots.get_mut(index + 1) {
            let next_length = i64::from(next.length_minutes) - delta;
            match u32::try_from(next_length) {
                Ok(length) => next.length_minutes = length,
                Err(_) => return self.clone(),
            }
        }

        self.or_unchanged(slots)
    }

    /// Split slot `index` into two halves
    ///
    /// The first half starts empty and the second keeps the capacity, so
    /// existing tracks move to the later half. Odd lengths lose their
    /// remainder minute to integer division. Splitting the implicit tail
    /// appends one empty explicit slot of half the tail's length.
    pub fn split_at(&self, index: usize) -> Schedule {
        let mut slots = self.slots.clone();

        if let Some(slot) = slots.get(index).copied() {
            let half = slot.length_minutes / 2;
            if half == 0 {
                return self.clone();
            }
            slots.splice(
                index..=index,
                [ExplicitSlot::new(half, 0), ExplicitSlot::new(half, slot.capacity)],
            );
            return self.or_unchanged(slots);
        }

        match self.implicit_tail_minutes() {
            Some(tail) if index == slots.len() && tail / 2 > 0 => {
                slots.push(ExplicitSlot::new(tail / 2, 0));
                self.or_unchanged(slots)
            }
            _ => self.clone(),
        }
    }

    /// Remove slot `index`, merging it forward into the next explicit slot
    pub fn remove_at(&self, index: usize) -> Schedule {
        if index >= self.slots.len() {
            return self.clone();
        }

        let mut slots = self.slots.clone();
        let removed = slots.remove(index);
        if let Some(next) = slots.get_mut(index) {
            next.length_minutes += removed.length_minutes;
            next.capacity = next.capacity.saturating_add(removed.capacity);
        }

        self.or_unchanged(slots)
    }

    /// Overwrite the capacity of slot `index`
    pub fn set_capacity_at(&self, index: usize, capacity: u32) -> Schedule {
        let mut slots = self.slots.clone();
        match slots.get_mut(index) {
            Some(slot) => slot.capacity = capacity,
            None => return self.clone(),
        }
        Schedule::canonical(slots)
    }

    fn or_unchanged(&self, slots: Vec<ExplicitSlot>) -> Schedule {
        Schedule::from_slots(slots).unwrap_or_else(|_| self.clone())
    }
}
