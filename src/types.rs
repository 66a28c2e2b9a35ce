use std::{collections::HashSet, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Upper bound of tracks sent in a single playlist mutation request.
pub const MAX_BATCH_SIZE: usize = 90;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// A single feed post as delivered by the feed client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    pub title: String,
    pub url: String,
    pub domain: String,
    pub score: i64,
}

/// Search query and annotation tags derived from a post title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTitle {
    pub query: String,
    pub tags: HashSet<String>,
}

impl NormalizedTitle {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Canonical link of a single catalog track, e.g.
/// `https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackRef(String);

impl TrackRef {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical `https://open.spotify.com/track/<id>` reference for a track
    /// link or URI.
    ///
    /// Locale prefixes, trailing slashes and query strings are dropped, so
    /// every link form of one track compares equal. Links without a track id
    /// are kept as given.
    pub fn canonical(link: &str) -> Self {
        match track_id(link) {
            Some(id) => Self(format!("https://open.spotify.com/track/{}", id)),
            None => Self::new(link),
        }
    }

    /// Catalog track id, if the reference carries one.
    pub fn id(&self) -> Option<&str> {
        track_id(&self.0)
    }

    /// Spotify URI (`spotify:track:<id>`) for the playlist endpoints.
    ///
    /// Returns `None` when the reference carries no track id.
    pub fn uri(&self) -> Option<String> {
        self.id().map(|id| format!("spotify:track:{}", id))
    }
}

fn track_id(link: &str) -> Option<&str> {
    if let Some(id) = link.strip_prefix("spotify:track:") {
        return Some(id).filter(|id| !id.is_empty());
    }

    let path = link.split('?').next().unwrap_or_default();
    let mut segments = path.split('/');
    segments.find(|segment| *segment == "track")?;
    segments.next().filter(|id| !id.is_empty())
}

impl fmt::Display for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered group of tracks, never longer than [`MAX_BATCH_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackBatch(Vec<TrackRef>);

impl TrackBatch {
    pub(crate) fn new(tracks: Vec<TrackRef>) -> Self {
        debug_assert!(tracks.len() <= MAX_BATCH_SIZE);
        Self(tracks)
    }

    pub fn tracks(&self) -> &[TrackRef] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Kind of a direct catalog link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Track,
    Album,
}

/// Listing order of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    Hot,
    New,
    Rising,
    #[value(name = "random_rising")]
    RandomRising,
    Controversial,
    #[default]
    Top,
}

impl SortMode {
    /// Path segment of the listing endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SortMode::Hot => "hot",
            SortMode::New => "new",
            SortMode::Rising => "rising",
            SortMode::RandomRising => "randomrising",
            SortMode::Controversial => "controversial",
            SortMode::Top => "top",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::RandomRising => "random_rising",
            other => other.endpoint(),
        };
        f.write_str(name)
    }
}

/// Track counts of one playlist around one remove-then-add cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub batch: usize,
    pub playlist: String,
    pub before: u64,
    pub after: u64,
}

impl BatchReport {
    pub fn net_change(&self) -> i64 {
        self.after as i64 - self.before as i64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub entries: Vec<BatchReport>,
}

impl SyncReport {
    pub fn batches(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.batch + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Tabled)]
pub struct SyncTableRow {
    pub batch: usize,
    pub playlist: String,
    pub before: u64,
    pub after: u64,
    pub added: i64,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
}

// Spotify Web API

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub uri: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            total: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<TrackObject>>,
    pub albums: Option<Paging<AlbumObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackUri {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksRequest {
    pub tracks: Vec<TrackUri>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

// reddit API

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditAccessToken {
    pub access_token: String,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
    pub after: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingChild {
    pub data: RawPost,
}
