//! Player endpoints.
//!
//! The API answers 404 to player commands when the account has no active
//! device; that becomes [`SlotlistError::NoActiveDevice`].

use crate::client::SpotifyClient;
use crate::error::SpotifyError;
use crate::types::{PlaybackState, QueueObject};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use slotlist_core::{DeviceId, NowPlaying, PlayerService, Result, SlotlistError, Track};
use tracing::debug;

fn no_device(e: SpotifyError) -> SlotlistError {
    match e {
        SpotifyError::NotFound(_) => SlotlistError::NoActiveDevice,
        other => other.into(),
    }
}

fn on_device(request: RequestBuilder, device: Option<&DeviceId>) -> RequestBuilder {
    match device {
        Some(device) => request.query(&[("device_id", device.as_str())]),
        None => request,
    }
}

#[async_trait]
impl PlayerService for SpotifyClient {
    async fn currently_playing(&self) -> Result<Option<NowPlaying>> {
        let url = self.endpoint("/me/player");
        let state: Option<PlaybackState> = self
            .fetch_optional(self.get(&url), "playback state")
            .await
            .map_err(no_device)?;

        Ok(state.and_then(PlaybackState::into_now_playing))
    }

    async fn queue(&self) -> Result<Vec<Track>> {
        let url = self.endpoint("/me/player/queue");
        let queue: QueueObject = self
            .fetch(self.get(&url), "queue")
            .await
            .map_err(no_device)?;

        debug!(queued = queue.queue.len(), "Fetched queue");
        Ok(queue.queue.into_iter().map(Track::from).collect())
    }

    async fn enqueue(&self, uri: &str, device: Option<&DeviceId>) -> Result<()> {
        let url = self.endpoint("/me/player/queue");
        debug!(url = %url, uri, device = ?device, "Adding to queue");

        let request = on_device(self.post_empty(&url).query(&[("uri", uri)]), device);
        self.send(request).await.map_err(no_device)?;
        Ok(())
    }

    async fn skip_next(&self, device: Option<&DeviceId>) -> Result<()> {
        let url = self.endpoint("/me/player/next");
        debug!(url = %url, device = ?device, "Skipping to next");

        self.send(on_device(self.post_empty(&url), device))
            .await
            .map_err(no_device)?;
        Ok(())
    }
}
