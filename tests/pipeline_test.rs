mod common;

use common::{Call, FakeCatalog, post};
use freshcli::cli::collect_tracks;
use freshcli::config::DEFAULT_FEATURE_MARKERS;
use freshcli::resolver::ScanOptions;
use freshcli::sync::PlaylistSyncEngine;
use freshcli::types::TrackRef;
use indicatif::ProgressBar;

fn options() -> ScanOptions {
    ScanOptions {
        include_albums: true,
        markers: DEFAULT_FEATURE_MARKERS
            .iter()
            .map(|marker| marker.to_string())
            .collect(),
        ..ScanOptions::default()
    }
}

fn catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_search("kendrick lamar humble.", &["https://open.spotify.com/track/humble"])
        .with_search("drake toosie slide", &["https://open.spotify.com/track/toosie"])
        .with_album(
            "https://open.spotify.com/album/damn",
            &[
                "https://open.spotify.com/track/blood",
                "https://open.spotify.com/track/dna",
            ],
        )
}

#[tokio::test]
async fn test_collect_tracks_keeps_feed_order() {
    let catalog = catalog();
    let posts = vec![
        post(
            "[FRESH] Kendrick Lamar - HUMBLE.",
            "https://youtu.be/humble",
            "youtu.be",
            900,
        ),
        post(
            "[DISCUSSION] Daily Discussion Thread",
            "https://reddit.com/r/hiphopheads/x",
            "self.hiphopheads",
            50,
        ),
        post(
            "[FRESH ALBUM] Kendrick Lamar - DAMN.",
            "https://open.spotify.com/album/damn?si=1",
            "open.spotify.com",
            800,
        ),
        post(
            "[FRESH] Drake - Toosie Slide ft. Future",
            "https://soundcloud.com/drake/toosie",
            "soundcloud.com",
            700,
        ),
        post(
            "[FRESH] Nobody - Unknown Song",
            "https://youtu.be/unknown",
            "youtu.be",
            10,
        ),
    ];

    let tracks = collect_tracks(&catalog, &posts, &options(), false, &ProgressBar::hidden()).await;

    assert_eq!(
        tracks,
        vec![
            TrackRef::new("https://open.spotify.com/track/humble"),
            TrackRef::new("https://open.spotify.com/track/blood"),
            TrackRef::new("https://open.spotify.com/track/dna"),
            TrackRef::new("https://open.spotify.com/track/toosie"),
        ]
    );
}

#[tokio::test]
async fn test_collect_tracks_skips_failing_posts() {
    let catalog = catalog();
    let posts = vec![
        post(
            "[FRESH ALBUM] Someone - Missing",
            "https://open.spotify.com/album/missing",
            "open.spotify.com",
            10,
        ),
        post(
            "Drake - Toosie Slide",
            "https://youtu.be/toosie",
            "youtu.be",
            10,
        ),
    ];

    let tracks = collect_tracks(&catalog, &posts, &options(), true, &ProgressBar::hidden()).await;

    assert_eq!(
        tracks,
        vec![TrackRef::new("https://open.spotify.com/track/toosie")]
    );
}

#[tokio::test]
async fn test_collected_tracks_sync_into_playlist() {
    let catalog = catalog();
    let posts = vec![
        post(
            "Kendrick Lamar - HUMBLE.",
            "https://open.spotify.com/track/humble",
            "open.spotify.com",
            10,
        ),
        post(
            "[FRESH] Kendrick Lamar - HUMBLE.",
            "https://youtu.be/humble",
            "youtu.be",
            10,
        ),
    ];

    let tracks = collect_tracks(&catalog, &posts, &options(), false, &ProgressBar::hidden()).await;
    assert_eq!(tracks.len(), 2);

    let report = PlaylistSyncEngine::new(&catalog, "owner")
        .sync(&tracks, &["p1".to_string()])
        .await
        .unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(
        catalog.playlist("p1"),
        vec![TrackRef::new("https://open.spotify.com/track/humble")]
    );
}

#[tokio::test]
async fn test_same_track_from_search_and_locale_link_is_added_once() {
    let catalog = FakeCatalog::new().with_search(
        "drake god's plan",
        &["https://open.spotify.com/track/6DCZcSspjsKoFjzjrWoCdn"],
    );
    let posts = vec![
        post(
            "[FRESH] Drake - God's Plan",
            "https://youtu.be/xpVfcZ0ZcFM",
            "youtu.be",
            10,
        ),
        post(
            "[FRESH] Drake - God's Plan",
            "https://open.spotify.com/intl-de/track/6DCZcSspjsKoFjzjrWoCdn?si=1",
            "open.spotify.com",
            10,
        ),
    ];

    let tracks = collect_tracks(&catalog, &posts, &options(), false, &ProgressBar::hidden()).await;
    assert_eq!(tracks[0], tracks[1]);

    PlaylistSyncEngine::new(&catalog, "owner")
        .sync(&tracks, &["p1".to_string()])
        .await
        .unwrap();

    assert!(catalog.calls().contains(&Call::Add("p1".to_string(), 1)));
    assert_eq!(
        catalog.playlist("p1"),
        vec![TrackRef::new(
            "https://open.spotify.com/track/6DCZcSspjsKoFjzjrWoCdn"
        )]
    );
}
