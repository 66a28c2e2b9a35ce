#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use freshcli::{
    Res,
    catalog::Catalog,
    types::{
        ExternalUrls, Paging, PlaylistTracksResponse, RawPost, SearchResponse, TrackObject,
        TrackRef,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SearchTrack(String),
    SearchAlbum(String),
    AlbumTracks(String),
    Count(String),
    Remove(String, usize),
    Add(String, usize),
}

/// In-memory catalog recording every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub search_results: HashMap<String, Vec<String>>,
    pub albums: HashMap<String, Vec<String>>,
    pub playlists: Mutex<HashMap<String, Vec<TrackRef>>>,
    pub calls: Mutex<Vec<Call>>,
    pub failing_playlist: Option<String>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, links: &[&str]) -> Self {
        self.search_results.insert(
            query.to_string(),
            links.iter().map(|link| link.to_string()).collect(),
        );
        self
    }

    pub fn with_album(mut self, url: &str, links: &[&str]) -> Self {
        self.albums.insert(
            url.to_string(),
            links.iter().map(|link| link.to_string()).collect(),
        );
        self
    }

    pub fn with_playlist(self, id: &str, tracks: Vec<TrackRef>) -> Self {
        self.playlists
            .lock()
            .unwrap()
            .insert(id.to_string(), tracks);
        self
    }

    pub fn failing_on(mut self, playlist: &str) -> Self {
        self.failing_playlist = Some(playlist.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn playlist(&self, id: &str) -> Vec<TrackRef> {
        self.playlists
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn track_object(link: &str) -> TrackObject {
    TrackObject {
        id: link.rsplit('/').next().map(str::to_string),
        name: link.to_string(),
        uri: None,
        external_urls: ExternalUrls {
            spotify: Some(link.to_string()),
        },
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_track(&self, query: &str) -> Res<SearchResponse> {
        self.record(Call::SearchTrack(query.to_string()));
        let items = self
            .search_results
            .get(query)
            .map(|links| links.iter().map(|link| track_object(link)).collect())
            .unwrap_or_default();

        Ok(SearchResponse {
            tracks: Some(Paging {
                items,
                ..Paging::default()
            }),
            albums: None,
        })
    }

    async fn search_album(&self, query: &str) -> Res<SearchResponse> {
        self.record(Call::SearchAlbum(query.to_string()));
        Ok(SearchResponse::default())
    }

    async fn album_tracks(&self, url: &str) -> Res<Vec<TrackObject>> {
        self.record(Call::AlbumTracks(url.to_string()));
        match self.albums.get(url) {
            Some(links) => Ok(links.iter().map(|link| track_object(link)).collect()),
            None => Err(format!("unknown album {}", url).into()),
        }
    }

    async fn playlist_tracks(&self, _owner: &str, playlist: &str) -> Res<PlaylistTracksResponse> {
        self.record(Call::Count(playlist.to_string()));
        Ok(PlaylistTracksResponse {
            total: self.playlist(playlist).len() as u64,
        })
    }

    async fn remove_tracks_from_playlist(
        &self,
        _owner: &str,
        playlist: &str,
        tracks: &[TrackRef],
    ) -> Res<()> {
        self.record(Call::Remove(playlist.to_string(), tracks.len()));
        let mut playlists = self.playlists.lock().unwrap();
        let entries = playlists.entry(playlist.to_string()).or_default();
        entries.retain(|track| !tracks.contains(track));
        Ok(())
    }

    async fn add_tracks_to_playlist(
        &self,
        _owner: &str,
        playlist: &str,
        tracks: &[TrackRef],
    ) -> Res<()> {
        self.record(Call::Add(playlist.to_string(), tracks.len()));
        if self.failing_playlist.as_deref() == Some(playlist) {
            return Err("playlist mutation rejected".into());
        }

        let mut playlists = self.playlists.lock().unwrap();
        playlists
            .entry(playlist.to_string())
            .or_default()
            .extend(tracks.iter().cloned());
        Ok(())
    }

    async fn playlist_name(&self, _owner: &str, playlist: &str) -> Res<String> {
        Ok(format!("Playlist {}", playlist))
    }
}

pub fn track(id: usize) -> TrackRef {
    TrackRef::new(format!("https://open.spotify.com/track/t{}", id))
}

pub fn tracks(range: std::ops::Range<usize>) -> Vec<TrackRef> {
    range.map(track).collect()
}

pub fn post(title: &str, url: &str, domain: &str, score: i64) -> RawPost {
    RawPost {
        title: title.to_string(),
        url: url.to_string(),
        domain: domain.to_string(),
        score,
    }
}
