//! Loading playlists and persisting schedule edits
//!
//! The local playlist only advances once every remote write for an edit
//! has succeeded. On failure the caller keeps the playlist it had.

use crate::error::{Result, SyncError};
use slotlist_core::{PlaylistId, PlaylistMeta, PlaylistService};
use slotlist_schedule::{
    embed_in_description, PlaylistEdit, Schedule, ScheduledPlaylist, TrackChange, TrackRef,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A playlist as found on the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedPlaylist {
    /// The description carries a valid schedule
    Scheduled(ScheduledPlaylist),

    /// No schedule yet; `can_add` when the current user owns the playlist
    Unscheduled { meta: PlaylistMeta, can_add: bool },
}

/// Reads playlists and writes schedule edits back
pub struct PlaylistEditor {
    service: Arc<dyn PlaylistService>,
}

impl PlaylistEditor {
    pub fn new(service: Arc<dyn PlaylistService>) -> Self {
        Self { service }
    }

    /// Fetch a playlist and partition it by its schedule, if it has one
    pub async fn load(&self, id: &PlaylistId) -> Result<LoadedPlaylist> {
        let meta = self.service.playlist_meta(id).await?;

        let Some(schedule) = Schedule::parse(&meta.description) else {
            let user = self.service.current_user_id().await?;
            let can_add = meta.is_owned_by(&user);
            debug!(playlist = %id, can_add, "Playlist has no schedule");
            return Ok(LoadedPlaylist::Unscheduled { meta, can_add });
        };

        let tracks = self.tracks(id).await?;
        debug!(playlist = %id, tracks = tracks.len(), "Loaded scheduled playlist");

        Ok(LoadedPlaylist::Scheduled(ScheduledPlaylist::from_schedule(
            id.clone(),
            meta.title,
            &schedule,
            tracks,
        )))
    }

    /// Give an owned, unscheduled playlist the default schedule
    pub async fn init_schedule(&self, id: &PlaylistId) -> Result<ScheduledPlaylist> {
        let meta = self.service.playlist_meta(id).await?;

        if Schedule::parse(&meta.description).is_some() {
            return Err(SyncError::AlreadyScheduled(id.clone()));
        }

        let user = self.service.current_user_id().await?;
        if !meta.is_owned_by(&user) {
            return Err(SyncError::NotOwner(id.clone()));
        }

        let schedule = Schedule::default_schedule();
        self.write_schedule(id, &meta.description, &schedule).await?;
        info!(playlist = %id, "Added default schedule");

        let tracks = self.tracks(id).await?;
        Ok(ScheduledPlaylist::from_schedule(
            id.clone(),
            meta.title,
            &schedule,
            tracks,
        ))
    }

    /// Apply `edit` locally and write the result back
    ///
    /// Returns the edited playlist once the remote track list and
    /// description both match it. An edit without effect writes nothing.
    pub async fn apply(
        &self,
        current: &ScheduledPlaylist,
        edit: PlaylistEdit,
    ) -> Result<ScheduledPlaylist> {
        let outcome = edit.apply(current);
        if !outcome.changed(current) {
            debug!(playlist = %current.id(), ?edit, "Edit had no effect");
            return Ok(current.clone());
        }

        let id = current.id();
        if let Err(e) = self.persist(id, &outcome.playlist, outcome.track_change).await {
            warn!(playlist = %id, ?edit, error = %e, "Persisting edit failed");
            return Err(e);
        }

        info!(playlist = %id, ?edit, schedule = %outcome.playlist.schedule(), "Edit saved");
        Ok(outcome.playlist)
    }

    async fn persist(
        &self,
        id: &PlaylistId,
        playlist: &ScheduledPlaylist,
        track_change: Option<TrackChange>,
    ) -> Result<()> {
        match track_change {
            Some(TrackChange::Reorder {
                range_start,
                insert_before,
            }) => {
                self.service
                    .reorder_tracks(id, range_start, 1, insert_before)
                    .await?;
            }
            Some(TrackChange::Remove { uri, position }) => {
                self.service.remove_track(id, &uri, position).await?;
            }
            None => {}
        }

        let meta = self.service.playlist_meta(id).await?;
        self.write_schedule(id, &meta.description, &playlist.schedule())
            .await
    }

    async fn write_schedule(
        &self,
        id: &PlaylistId,
        description: &str,
        schedule: &Schedule,
    ) -> Result<()> {
        let description = embed_in_description(description, schedule);
        debug!(playlist = %id, %description, "Writing description");
        self.service.replace_description(id, &description).await?;
        Ok(())
    }

    async fn tracks(&self, id: &PlaylistId) -> Result<Vec<TrackRef>> {
        let tracks = self.service.all_tracks(id).await?;
        Ok(tracks.into_iter().map(Arc::new).collect())
    }
}
