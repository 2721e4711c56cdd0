//! Command handlers.

use crate::config::SlotlistConfig;
use crate::error::CliError;
use crate::render::{render_playlist, render_unscheduled};
use anyhow::Context;
use slotlist_core::{Clock, PlaylistId, SystemClock};
use slotlist_schedule::{parse_clock_time, PlaylistEdit, ScheduledPlaylist};
use slotlist_spotify::SpotifyClient;
use slotlist_sync::{LoadedPlaylist, PlaylistEditor, SyncManager};
use std::sync::Arc;
use tracing::info;

/// Shared handles for one CLI invocation
pub struct App {
    client: Arc<SpotifyClient>,
    editor: PlaylistEditor,
    clock: Arc<dyn Clock>,
    config: SlotlistConfig,
}

impl App {
    pub fn new(config: SlotlistConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let client = Arc::new(SpotifyClient::new(config.api_config())?);

        Ok(Self {
            editor: PlaylistEditor::new(client.clone()),
            client,
            clock: Arc::new(SystemClock),
            config,
        })
    }

    pub async fn show(&self, id: &PlaylistId) -> anyhow::Result<()> {
        match self.editor.load(id).await? {
            LoadedPlaylist::Scheduled(playlist) => {
                print!("{}", render_playlist(&playlist, self.clock.as_ref()));
            }
            LoadedPlaylist::Unscheduled { meta, can_add } => {
                println!("{}", render_unscheduled(&meta, can_add));
            }
        }
        Ok(())
    }

    pub async fn init(&self, id: &PlaylistId) -> anyhow::Result<()> {
        let playlist = self.editor.init_schedule(id).await?;
        print!("{}", render_playlist(&playlist, self.clock.as_ref()));
        Ok(())
    }

    /// Load, apply one edit, save, and print the result
    pub async fn edit(&self, id: &PlaylistId, edit: PlaylistEdit) -> anyhow::Result<()> {
        let playlist = self.scheduled(id).await?;
        let edited = self.editor.apply(&playlist, edit).await?;
        if edited == playlist {
            println!("Nothing changed.");
        }
        print!("{}", render_playlist(&edited, self.clock.as_ref()));
        Ok(())
    }

    /// Resize a slot so that it ends at `end` (`H:MM`)
    pub async fn resize_to(&self, id: &PlaylistId, slot: usize, end: &str) -> anyhow::Result<()> {
        let playlist = self.scheduled(id).await?;
        let length_minutes = length_until(&playlist, slot, end)?;
        self.edit(
            id,
            PlaylistEdit::ResizeSlot {
                slot,
                length_minutes,
            },
        )
        .await
    }

    /// Keep the player inside the active slot until Ctrl-C
    pub async fn sync(&self, id: &PlaylistId) -> anyhow::Result<()> {
        let playlist = self.scheduled(id).await?;

        let mut manager = SyncManager::new(
            self.client.clone(),
            self.clock.clone(),
            self.config.sync.clone(),
        );
        manager.set_playlist(playlist);
        manager.start()?;
        info!(playlist = %id, "Syncing playback, press Ctrl-C to stop");

        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl-C")?;

        manager.stop().await?;
        Ok(())
    }

    async fn scheduled(&self, id: &PlaylistId) -> anyhow::Result<ScheduledPlaylist> {
        match self.editor.load(id).await? {
            LoadedPlaylist::Scheduled(playlist) => Ok(playlist),
            LoadedPlaylist::Unscheduled { .. } => Err(CliError::NotScheduled(id.clone()).into()),
        }
    }
}

/// Minutes from the start of `slot` to the clock time `end`
pub fn length_until(
    playlist: &ScheduledPlaylist,
    slot: usize,
    end: &str,
) -> Result<u32, CliError> {
    let end_minute = parse_clock_time(end)
        .ok_or_else(|| CliError::InvalidArgument(format!("not a time of day: {end}")))?;
    let start = playlist
        .slots()
        .get(slot)
        .ok_or_else(|| CliError::InvalidArgument(format!("no slot {slot}")))?
        .start_minute();

    if end_minute <= start {
        return Err(CliError::InvalidArgument(format!(
            "slot {slot} starts at or after {end}"
        )));
    }
    Ok(end_minute - start)
}
