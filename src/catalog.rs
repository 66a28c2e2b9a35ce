//! Collaborator boundaries of the resolution and sync pipeline.
//!
//! The core only talks to the outside world through these two traits, so it
//! can be driven by the reqwest clients in [`crate::spotify`] and
//! [`crate::reddit`] as well as by in-memory fakes in tests.

use async_trait::async_trait;

use crate::{
    Res,
    types::{PlaylistTracksResponse, RawPost, SearchResponse, SortMode, TrackObject, TrackRef},
};

/// Read-only, finite source of posts.
#[async_trait]
pub trait Feed: Send + Sync {
    /// Lists at most `limit` posts in feed order.
    async fn list_posts(&self, sort: SortMode, limit: u32) -> Res<Vec<RawPost>>;
}

/// Streaming catalog with search and playlist mutation.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search_track(&self, query: &str) -> Res<SearchResponse>;

    async fn search_album(&self, query: &str) -> Res<SearchResponse>;

    /// Every track of the album behind `url`, in album order.
    async fn album_tracks(&self, url: &str) -> Res<Vec<TrackObject>>;

    async fn playlist_tracks(&self, owner: &str, playlist: &str) -> Res<PlaylistTracksResponse>;

    /// Removes every occurrence of every given track. Absent tracks are ignored.
    async fn remove_tracks_from_playlist(
        &self,
        owner: &str,
        playlist: &str,
        tracks: &[TrackRef],
    ) -> Res<()>;

    /// Appends the tracks to the end of the playlist.
    async fn add_tracks_to_playlist(
        &self,
        owner: &str,
        playlist: &str,
        tracks: &[TrackRef],
    ) -> Res<()>;

    async fn playlist_name(&self, owner: &str, playlist: &str) -> Res<String>;
}
