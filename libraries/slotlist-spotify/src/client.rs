//! Spotify Web API client.

use crate::error::{Result, SpotifyError};
use crate::types::ApiConfig;
use reqwest::header::{CONTENT_LENGTH, RETRY_AFTER};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

/// Client for the Spotify Web API.
///
/// Implements [`slotlist_core::PlaylistService`] and
/// [`slotlist_core::PlayerService`], so the sync layer can drive a real
/// account through it.
///
/// # Example
///
/// ```ignore
/// use slotlist_core::{PlaylistId, PlaylistService};
/// use slotlist_spotify::{ApiConfig, SpotifyClient};
///
/// let client = SpotifyClient::new(ApiConfig::new("BQD...token"))?;
/// let meta = client.playlist_meta(&PlaylistId::new("37i9dQZF1DXcBWIGoYBM5M")).await?;
/// println!("{}: {}", meta.title, meta.description);
/// ```
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    access_token: RwLock<String>,
}

impl SpotifyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(SpotifyError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SpotifyError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Slotlist/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: RwLock::new(config.access_token),
        })
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token (e.g., after the user re-authorized).
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = token.into();
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url)
    }

    pub(crate) fn put(&self, url: &str) -> RequestBuilder {
        self.http.put(url)
    }

    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(url)
    }

    /// Body-less POST; the API answers 411 without a length header.
    pub(crate) fn post_empty(&self, url: &str) -> RequestBuilder {
        self.http.post(url).header(CONTENT_LENGTH, 0)
    }

    /// Authorize, send and check the status of a request.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let token = self.access_token.read().await.clone();
        let response = request.bearer_auth(token).send().await?;
        check_status(response).await
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| SpotifyError::ParseError(format!("Failed to parse {}: {}", what, e)))
    }

    /// Like [`fetch`](Self::fetch), but `204 No Content` yields `None`.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<Option<T>> {
        let response = self.send(request).await?;
        if response.status() == StatusCode::NO_CONTENT {
            debug!(what, "No content");
            return Ok(None);
        }
        response
            .json()
            .await
            .map(Some)
            .map_err(|e| SpotifyError::ParseError(format!("Failed to parse {}: {}", what, e)))
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Prefer the API's own error message over the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(SpotifyError::AuthRequired),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(1);
            warn!(retry_after_secs, "Rate limited");
            Err(SpotifyError::RateLimited { retry_after_secs })
        }
        StatusCode::NOT_FOUND => {
            let body = response.text().await.unwrap_or_default();
            Err(SpotifyError::NotFound(error_message(body)))
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(SpotifyError::Api {
                status: status.as_u16(),
                message: error_message(body),
            })
        }
    }
}
