use crate::error::{Result, SyncError};
use crate::synchronizer::Synchronizer;
use crate::task::{PeriodicJob, ScheduledTask};
use crate::types::{SlotSyncStatus, SyncConfig};
use async_trait::async_trait;
use slotlist_core::{Clock, PlayerService};
use slotlist_schedule::ScheduledPlaylist;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Starts and stops playback sync and feeds it the latest playlist
///
/// The playlist is published through a watch channel, so every edit simply
/// replaces the snapshot the next tick reads. A tick in progress keeps the
/// snapshot it started with.
pub struct SyncManager {
    player: Arc<dyn PlayerService>,
    clock: Arc<dyn Clock>,
    config: SyncConfig,
    playlist_tx: watch::Sender<Option<Arc<ScheduledPlaylist>>>,
    status_rx: watch::Receiver<SlotSyncStatus>,
    task: Option<ScheduledTask>,
}

impl SyncManager {
    pub fn new(player: Arc<dyn PlayerService>, clock: Arc<dyn Clock>, config: SyncConfig) -> Self {
        let (playlist_tx, _) = watch::channel(None);
        let (_, status_rx) = watch::channel(SlotSyncStatus::NotActive);

        Self {
            player,
            clock,
            config,
            playlist_tx,
            status_rx,
            task: None,
        }
    }

    /// Publish a new playlist version for the following ticks
    pub fn set_playlist(&self, playlist: ScheduledPlaylist) {
        debug!(playlist = %playlist.id(), "Publishing playlist to sync");
        self.playlist_tx.send_replace(Some(Arc::new(playlist)));
    }

    /// Stop syncing against any playlist; ticks become no-ops
    pub fn clear_playlist(&self) {
        self.playlist_tx.send_replace(None);
    }

    pub fn playlist(&self) -> Option<Arc<ScheduledPlaylist>> {
        self.playlist_tx.borrow().clone()
    }

    /// Start the interval task
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Err(SyncError::AlreadyRunning);
        }
        if self.config.interval_secs == 0 {
            return Err(SyncError::InvalidConfig(
                "interval_secs must be greater than zero".to_string(),
            ));
        }

        let (status_tx, status_rx) = watch::channel(SlotSyncStatus::NotActive);
        self.status_rx = status_rx;

        let job = SyncJob {
            synchronizer: Synchronizer::new(
                self.player.clone(),
                self.clock.clone(),
                self.config.clone(),
            ),
            playlist: self.playlist_tx.subscribe(),
            status: status_tx,
        };

        info!(interval_secs = self.config.interval_secs, "Starting playback sync");
        self.task = Some(ScheduledTask::spawn(
            "playback-sync",
            self.config.interval(),
            job,
        ));

        Ok(())
    }

    /// Cancel the interval task and wait for it to exit
    pub async fn stop(&mut self) -> Result<()> {
        let task = self.task.take().ok_or(SyncError::NotRunning)?;
        info!("Stopping playback sync");
        task.stop().await;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Sync status reported by the most recent tick
    pub fn status(&self) -> SlotSyncStatus {
        if self.task.is_none() {
            return SlotSyncStatus::NotActive;
        }
        *self.status_rx.borrow()
    }
}

struct SyncJob {
    synchronizer: Synchronizer,
    playlist: watch::Receiver<Option<Arc<ScheduledPlaylist>>>,
    status: watch::Sender<SlotSyncStatus>,
}

#[async_trait]
impl PeriodicJob for SyncJob {
    async fn run(&mut self) {
        let snapshot = self.playlist.borrow_and_update().clone();
        let Some(playlist) = snapshot else {
            debug!("No playlist loaded, nothing to sync");
            return;
        };

        match self.synchronizer.tick(&playlist).await {
            Ok(outcome) => debug!(playlist = %playlist.id(), ?outcome, "Sync tick finished"),
            Err(e) => warn!(playlist = %playlist.id(), error = %e, "Sync tick aborted"),
        }

        self.status.send_replace(self.synchronizer.status());
    }
}
