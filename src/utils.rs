use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{LinkKind, TrackRef};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Removes a `?query` suffix from a link.
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Classifies a catalog link by the first `track` or `album` path segment.
///
/// Locale prefixes such as `/intl-de/` are skipped over.
pub fn classify_link(url: &str) -> Option<LinkKind> {
    let path = strip_query(url);
    let path = path.split_once("://").map_or(path, |(_, rest)| rest);

    path.split('/').skip(1).find_map(|segment| match segment {
        "track" => Some(LinkKind::Track),
        "album" => Some(LinkKind::Album),
        _ => None,
    })
}

/// Keeps the first occurrence of every track, preserving order.
///
/// Tracks are compared by catalog id, so different link forms of one track
/// count as duplicates.
pub fn remove_duplicate_tracks(tracks: &mut Vec<TrackRef>) {
    let mut seen = HashSet::new();
    tracks.retain(|track| {
        let key = track.uri().unwrap_or_else(|| track.to_string());
        seen.insert(key)
    });
}

/// User agent following the reddit API rules:
/// `<platform>:<app id>:<version> (by /u/<username>)`.
pub fn user_agent(reddit_username: &str) -> String {
    format!(
        "rust:{app}:v{version} (by /u/{user})",
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        user = reddit_username
    )
}

/// Parses a comma separated marker list into a lower-cased set.
pub fn parse_markers(list: &str) -> HashSet<String> {
    list.split(',')
        .map(|marker| marker.trim().to_lowercase())
        .filter(|marker| !marker.is_empty())
        .collect()
}
