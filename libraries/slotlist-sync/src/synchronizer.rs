//! Reconciles live playback with the active slot
//!
//! One tick:
//! 1. find the slot containing the current minute (nothing to do if none, or if it is empty)
//! 2. read what is playing and what is queued
//! 3. if no queued track belongs to the slot, enqueue the next slot track
//! 4. if the playing track is foreign, skip until it is not, up to a bounded number of times
//!
//! Every player call is awaited before the next decision. Any failure ends
//! the tick early; the next tick starts over.

use crate::error::Result;
use crate::types::{SlotSyncStatus, SyncConfig, TickOutcome, TickReport};
use slotlist_core::{Clock, PlayerService, TrackId};
use slotlist_schedule::{ScheduledPlaylist, Slot, TrackRef};
use std::sync::Arc;
use tracing::{debug, info};

/// Playback synchronizer for one player
pub struct Synchronizer {
    player: Arc<dyn PlayerService>,
    clock: Arc<dyn Clock>,
    config: SyncConfig,
    status: SlotSyncStatus,
    last_observed: Option<TrackId>,
}

impl Synchronizer {
    pub fn new(player: Arc<dyn PlayerService>, clock: Arc<dyn Clock>, config: SyncConfig) -> Self {
        Self {
            player,
            clock,
            config,
            status: SlotSyncStatus::NotActive,
            last_observed: None,
        }
    }

    /// Status after the last tick
    pub fn status(&self) -> SlotSyncStatus {
        self.status
    }

    /// Track that was playing when last checked
    pub fn last_observed(&self) -> Option<&TrackId> {
        self.last_observed.as_ref()
    }

    /// Run one reconciliation against `playlist`
    pub async fn tick(&mut self, playlist: &ScheduledPlaylist) -> Result<TickOutcome> {
        let Some((index, slot)) = playlist.active_slot(self.clock.as_ref()) else {
            self.set_status(SlotSyncStatus::NotActive, None);
            return Ok(TickOutcome::NoActiveSlot);
        };

        if slot.is_empty() {
            self.set_status(SlotSyncStatus::NotActive, Some(index));
            return Ok(TickOutcome::EmptySlot { slot: index });
        }

        let playing = self.player.currently_playing().await?;
        let queue = self.player.queue().await?;

        let Some(playing) = playing else {
            debug!(slot = index, "Nothing playing, skipping tick");
            self.last_observed = None;
            // Nothing foreign to correct
            self.set_status(SlotSyncStatus::ActiveAndInSync, Some(index));
            return Ok(TickOutcome::NothingPlaying { slot: index });
        };

        let current = playing.track.id.clone();
        let device = playing.device_id.clone();
        self.last_observed = Some(current.clone());

        let mut enqueued = None;
        if !queue.iter().any(|track| slot.contains_track(&track.id)) {
            if let Some(track) = next_candidate(slot, &current) {
                debug!(slot = index, track = %track.id, "Enqueueing slot track");
                self.player.enqueue(&track.uri, device.as_ref()).await?;
                enqueued = Some(track.id.clone());
            }
        }

        let mut in_sync = slot.contains_track(&current);
        let mut skips = 0;

        if !in_sync {
            self.set_status(SlotSyncStatus::ActiveAndCorrecting, Some(index));

            while !in_sync && skips < self.config.max_skip_attempts {
                debug!(slot = index, attempt = skips + 1, "Skipping foreign track");
                self.player.skip_next(device.as_ref()).await?;
                skips += 1;

                tokio::time::sleep(self.config.skip_retry_delay()).await;

                self.last_observed = self
                    .player
                    .currently_playing()
                    .await?
                    .map(|now| now.track.id);
                in_sync = self
                    .last_observed
                    .as_ref()
                    .is_some_and(|id| slot.contains_track(id));
            }

            if !in_sync {
                debug!(slot = index, skips, "Playback still outside slot, retrying next tick");
            }
        }

        self.set_status(SlotSyncStatus::ActiveAndInSync, Some(index));

        Ok(TickOutcome::Reconciled(TickReport {
            slot: index,
            enqueued,
            skips,
            in_sync,
        }))
    }

    fn set_status(&mut self, status: SlotSyncStatus, slot: Option<usize>) {
        if self.status != status {
            info!(slot = ?slot, from = ?self.status, to = ?status, "Slot sync status changed");
            self.status = status;
        }
    }
}

/// Track to queue next: the one after the current track if it belongs to
/// the slot, otherwise the slot's first track
fn next_candidate<'a>(slot: &'a Slot, current: &TrackId) -> Option<&'a TrackRef> {
    if slot.contains_track(current) {
        slot.track_after(current)
    } else {
        slot.first_track()
    }
}
