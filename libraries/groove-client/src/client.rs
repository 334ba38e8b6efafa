//! Groove API client.

use crate::error::{ClientError, Result};
use groove_core::types::{Genre, PageData, PlaylistDetails, TrackDetails};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

/// Client for the read-only library endpoints.
///
/// Requests carry no timeout; a slow server keeps the caller waiting.
#[derive(Debug, Clone)]
pub struct GrooveClient {
    http: Client,
    base_url: String,
}

impl GrooveClient {
    /// Create a client for the server at `base_url`.
    ///
    /// The URL must be absolute http(s); a trailing slash is dropped.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(format!("Groove/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/genres`
    pub async fn genres(&self) -> Result<Vec<Genre>> {
        self.get_json("/api/genres").await
    }

    /// `GET /api/tracks`
    pub async fn tracks(&self) -> Result<Vec<TrackDetails>> {
        self.get_json("/api/tracks").await
    }

    /// `GET /api/playlists`
    pub async fn playlists(&self) -> Result<Vec<PlaylistDetails>> {
        self.get_json("/api/playlists").await
    }

    /// Fetch all three listings concurrently and merge them.
    ///
    /// The first failure fails the whole load; nothing partial is returned
    /// and nothing is retried.
    pub async fn load_page(&self) -> Result<PageData> {
        let (tracks, playlists, genres) =
            tokio::try_join!(self.tracks(), self.playlists(), self.genres())?;

        info!(
            tracks = tracks.len(),
            playlists = playlists.len(),
            genres = genres.len(),
            "Loaded library page"
        );

        Ok(PageData::new(tracks, playlists, genres))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!(url = %url, "Fetching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("{}: {}", endpoint, e)))
    }
}
