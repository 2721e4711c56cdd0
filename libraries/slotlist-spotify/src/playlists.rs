//! Playlist endpoints.

use crate::client::SpotifyClient;
use crate::error::SpotifyError;
use crate::types::{
    DescriptionUpdate, Page, PlaylistItem, PlaylistObject, RemoveTracksRequest, ReorderRequest,
    TrackPositions, UserObject,
};
use async_trait::async_trait;
use slotlist_core::{
    PlaylistId, PlaylistMeta, PlaylistService, Result, SlotlistError, Track, UserId,
};
use tracing::debug;

/// Largest page size the tracks endpoint accepts.
const TRACKS_PAGE_LIMIT: &str = "100";

const TRACK_FIELDS: &str = "items(track(id,uri,name,duration_ms)),next";

fn playlist_error(id: &PlaylistId, err: SpotifyError) -> SlotlistError {
    match err {
        SpotifyError::NotFound(_) => SlotlistError::PlaylistNotFound(id.clone()),
        other => other.into(),
    }
}

#[async_trait]
impl PlaylistService for SpotifyClient {
    async fn playlist_meta(&self, id: &PlaylistId) -> Result<PlaylistMeta> {
        let url = self.endpoint(&format!("/playlists/{}", id));
        debug!(url = %url, "Fetching playlist");

        let request = self
            .get(&url)
            .query(&[("fields", "id,name,description,owner(id)")]);
        let playlist: PlaylistObject = self
            .fetch(request, "playlist")
            .await
            .map_err(|e| playlist_error(id, e))?;

        Ok(playlist.into())
    }

    async fn all_tracks(&self, id: &PlaylistId) -> Result<Vec<Track>> {
        let first = self.endpoint(&format!("/playlists/{}/tracks", id));
        let mut request = self
            .get(&first)
            .query(&[("fields", TRACK_FIELDS), ("limit", TRACKS_PAGE_LIMIT)]);

        let mut tracks = Vec::new();
        loop {
            let page: Page<PlaylistItem> = self
                .fetch(request, "playlist tracks")
                .await
                .map_err(|e| playlist_error(id, e))?;

            let before = tracks.len();
            for item in page.items {
                let track = item.into_track(tracks.len());
                tracks.push(track);
            }
            debug!(playlist = %id, page = tracks.len() - before, total = tracks.len(), "Fetched tracks page");

            match page.next {
                Some(next) => request = self.get(&next),
                None => break,
            }
        }

        Ok(tracks)
    }

    async fn replace_description(&self, id: &PlaylistId, description: &str) -> Result<()> {
        let url = self.endpoint(&format!("/playlists/{}", id));
        debug!(url = %url, description, "Updating description");

        self.send(self.put(&url).json(&DescriptionUpdate { description }))
            .await
            .map_err(|e| playlist_error(id, e))?;
        Ok(())
    }

    async fn reorder_tracks(
        &self,
        id: &PlaylistId,
        range_start: usize,
        range_length: usize,
        insert_before: usize,
    ) -> Result<()> {
        let url = self.endpoint(&format!("/playlists/{}/tracks", id));
        debug!(url = %url, range_start, range_length, insert_before, "Reordering tracks");

        let body = ReorderRequest {
            range_start,
            range_length,
            insert_before,
        };
        self.send(self.put(&url).json(&body))
            .await
            .map_err(|e| playlist_error(id, e))?;
        Ok(())
    }

    async fn remove_track(&self, id: &PlaylistId, uri: &str, position: usize) -> Result<()> {
        let url = self.endpoint(&format!("/playlists/{}/tracks", id));
        debug!(url = %url, uri, position, "Removing track");

        let body = RemoveTracksRequest {
            tracks: vec![TrackPositions {
                uri,
                positions: vec![position],
            }],
        };
        self.send(self.delete(&url).json(&body))
            .await
            .map_err(|e| playlist_error(id, e))?;
        Ok(())
    }

    async fn current_user_id(&self) -> Result<UserId> {
        let url = self.endpoint("/me");
        let user: UserObject = self.fetch(self.get(&url), "current user").await?;
        Ok(UserId::new(user.id))
    }
}
