//! Track resolution.
//!
//! [`TrackResolver`] turns feed posts into catalog track references. Posts
//! that link straight into the catalog are resolved from their URL, every
//! other post is searched by its normalized title and the first candidate
//! wins. A miss is never an error: it resolves to nothing.

use std::collections::HashSet;

use crate::{
    Res,
    catalog::Catalog,
    title,
    types::{LinkKind, RawPost, SearchResponse, TrackRef},
    utils,
};

/// Domain of posts that link directly into the catalog.
pub const CATALOG_DOMAIN: &str = "open.spotify.com";

pub const DISCUSSION_TAG: &str = "discussion";

/// Tags that mark a post as an album rather than a single track.
pub const ALBUM_TAGS: [&str; 2] = ["album", "impressions"];

/// Caller-side filtering rules and normalization settings for one scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Posts scoring below this are skipped.
    pub threshold: Option<i64>,
    /// Only accept posts carrying `curated_tag`.
    pub curated_only: bool,
    pub curated_tag: String,
    /// Expand direct album links into their tracks.
    pub include_albums: bool,
    pub markers: HashSet<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            threshold: None,
            curated_only: false,
            curated_tag: "fresh".to_string(),
            include_albums: false,
            markers: HashSet::new(),
        }
    }
}

/// Why a post produced no tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    Discussion,
    BelowThreshold,
    NotCurated,
    AlbumSearch,
    NoMatch,
}

/// Outcome of resolving one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Accepted(Vec<TrackRef>),
    Skipped(Skip),
}

pub struct TrackResolver<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: Catalog + ?Sized> TrackResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Searches the catalog for `query` and returns the first candidate.
    ///
    /// Blank queries resolve to `None` without issuing a request.
    pub async fn resolve_by_query(&self, query: &str) -> Res<Option<TrackRef>> {
        if query.trim().is_empty() {
            return Ok(None);
        }

        let search = self.catalog.search_track(query).await?;
        Ok(first_track(&search))
    }

    /// Resolves a direct catalog link.
    ///
    /// Track links resolve to their canonical form. Album
    /// links resolve to every album track when `include_album_tracks` is set
    /// and to nothing otherwise.
    pub async fn resolve_by_url(&self, url: &str, include_album_tracks: bool) -> Res<Vec<TrackRef>> {
        let link = utils::strip_query(url);

        match utils::classify_link(link) {
            Some(LinkKind::Track) => Ok(vec![TrackRef::canonical(link)]),
            Some(LinkKind::Album) if include_album_tracks => {
                let tracks = self.catalog.album_tracks(link).await?;
                Ok(tracks
                    .into_iter()
                    .filter_map(|track| track.external_urls.spotify)
                    .map(|link| TrackRef::canonical(&link))
                    .collect())
            }
            Some(LinkKind::Album) | None => Ok(Vec::new()),
        }
    }

    /// Applies the filtering rules of `options` to `post` and resolves it.
    pub async fn resolve_post(&self, post: &RawPost, options: &ScanOptions) -> Res<Resolution> {
        let normalized = title::normalize(&post.title, &options.markers);

        if normalized.has_tag(DISCUSSION_TAG) {
            return Ok(Resolution::Skipped(Skip::Discussion));
        }

        if let Some(threshold) = options.threshold {
            if post.score < threshold {
                return Ok(Resolution::Skipped(Skip::BelowThreshold));
            }
        }

        if options.curated_only && !normalized.has_tag(&options.curated_tag.to_lowercase()) {
            return Ok(Resolution::Skipped(Skip::NotCurated));
        }

        if post.domain == CATALOG_DOMAIN {
            let tracks = self.resolve_by_url(&post.url, options.include_albums).await?;
            return Ok(accepted_or_miss(tracks));
        }

        if ALBUM_TAGS.iter().any(|tag| normalized.has_tag(tag)) {
            // album search results are not turned into tracks yet
            if !normalized.query.is_empty() {
                self.catalog.search_album(&normalized.query).await?;
            }
            return Ok(Resolution::Skipped(Skip::AlbumSearch));
        }

        let track = self.resolve_by_query(&normalized.query).await?;
        Ok(accepted_or_miss(track.into_iter().collect()))
    }
}

fn accepted_or_miss(tracks: Vec<TrackRef>) -> Resolution {
    if tracks.is_empty() {
        Resolution::Skipped(Skip::NoMatch)
    } else {
        Resolution::Accepted(tracks)
    }
}

/// First search candidate that carries a catalog link.
pub fn first_track(search: &SearchResponse) -> Option<TrackRef> {
    search
        .tracks
        .as_ref()?
        .items
        .iter()
        .find_map(|item| item.external_urls.spotify.as_deref())
        .map(TrackRef::canonical)
}
