//! # Spotify Integration Module
//!
//! Spotify Web API client used as the track catalog of the pipeline.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, code exchange and token refresh
//! - [`search`] - Track and album search, album track listing
//! - [`playlist`] - Playlist track counts and remove/add mutations
//!
//! [`SpotifyCatalog`] ties them together behind the [`Catalog`] trait.
//!
//! ## Rate Limiting
//!
//! Every request goes through [`SpotifyCatalog::send`], which waits out
//! `429 Too Many Requests` answers for up to 120 seconds per attempt
//! (`Retry-After` header) and fails on longer delays.
//!
//! ## API Coverage
//!
//! - `GET /search` - first-candidate track search and album search
//! - `GET /albums/{id}/tracks` - album track listing, paged via `next`
//! - `GET /playlists/{id}/tracks` - playlist track total
//! - `DELETE /playlists/{id}/tracks` - remove all occurrences
//! - `POST /playlists/{id}/tracks` - append tracks
//! - `GET /playlists/{id}` - playlist name

pub mod auth;
pub mod playlist;
pub mod search;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    Res,
    catalog::Catalog,
    config::SpotifySettings,
    types::{PlaylistTracksResponse, SearchResponse, TrackObject, TrackRef},
};

const MAX_RETRY_AFTER_SECS: u64 = 120;

pub struct SpotifyCatalog {
    client: Client,
    settings: SpotifySettings,
    token: String,
}

impl SpotifyCatalog {
    pub fn new(settings: SpotifySettings, token: String) -> Self {
        Self {
            client: Client::new(),
            settings,
            token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.api_url, path.trim_start_matches('/'))
    }

    /// Sends an authorized request, retrying after rate limiting.
    async fn send(&self, request: RequestBuilder) -> Res<Response> {
        loop {
            let attempt = request
                .try_clone()
                .ok_or("request body cannot be retried")?
                .bearer_auth(&self.token);
            let response = attempt.send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(1);
                if retry_after > MAX_RETRY_AFTER_SECS {
                    return Err(format!(
                        "rate limited by Spotify for {} seconds, try again later",
                        retry_after
                    )
                    .into());
                }
                sleep(Duration::from_secs(retry_after)).await;
                continue;
            }

            return Ok(response.error_for_status()?);
        }
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn search_track(&self, query: &str) -> Res<SearchResponse> {
        search::search(self, query, "track").await
    }

    async fn search_album(&self, query: &str) -> Res<SearchResponse> {
        search::search(self, query, "album").await
    }

    async fn album_tracks(&self, url: &str) -> Res<Vec<TrackObject>> {
        search::album_tracks(self, url).await
    }

    async fn playlist_tracks(&self, _owner: &str, playlist: &str) -> Res<PlaylistTracksResponse> {
        playlist::tracks_total(self, playlist).await
    }

    async fn remove_tracks_from_playlist(
        &self,
        _owner: &str,
        playlist: &str,
        tracks: &[TrackRef],
    ) -> Res<()> {
        playlist::remove_tracks(self, playlist, tracks).await
    }

    async fn add_tracks_to_playlist(
        &self,
        _owner: &str,
        playlist: &str,
        tracks: &[TrackRef],
    ) -> Res<()> {
        playlist::add_tracks(self, playlist, tracks).await
    }

    async fn playlist_name(&self, _owner: &str, playlist: &str) -> Res<String> {
        playlist::name(self, playlist).await
    }
}
