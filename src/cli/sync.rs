use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    catalog::{Catalog, Feed},
    config::{self, RedditSettings, SpotifySettings},
    error, info,
    management::{PlaylistManager, TokenManager},
    reddit::RedditFeed,
    resolver::{Resolution, ScanOptions, TrackResolver},
    spotify::SpotifyCatalog,
    success,
    sync::PlaylistSyncEngine,
    types::{RawPost, SortMode, SyncReport, SyncTableRow, TrackRef},
    warning,
};

/// Options of a single `freshcli sync` run.
#[derive(Debug, Clone)]
pub struct SyncArgs {
    pub sort: SortMode,
    pub limit: u32,
    pub threshold: Option<i64>,
    pub include_albums: bool,
    pub fresh: bool,
    pub verbose: bool,
    pub subreddit: String,
    pub batch_size: usize,
}

pub async fn sync(args: SyncArgs) {
    let spotify_settings = match SpotifySettings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid Spotify configuration: {}", e),
    };
    let reddit_settings = match RedditSettings::from_env(&args.subreddit) {
        Ok(settings) => settings,
        Err(e) => error!("Invalid reddit configuration: {}", e),
    };

    let playlists = match PlaylistManager::new(None).load().await {
        Ok(manager) if !manager.is_empty() => manager.all().to_vec(),
        Ok(_) => error!("No target playlists configured. Run freshcli playlists add <id>"),
        Err(e) => error!("Failed to load target playlists: {}", e),
    };

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load token. Please run freshcli auth\n Error: {}", e),
    };
    let token = token_mgr
        .get_valid_token(&spotify_settings.token_url, &spotify_settings.client_id)
        .await;

    let owner = spotify_settings.user.clone();
    let catalog = SpotifyCatalog::new(spotify_settings, token);
    let feed = RedditFeed::new(reddit_settings);

    if args.verbose {
        info!(
            "Scanning r/{} ({}, {} posts)",
            feed.subreddit(),
            args.sort,
            args.limit
        );
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message("Fetching posts...");

    let posts = match feed.list_posts(args.sort, args.limit).await {
        Ok(posts) => posts,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot read r/{}: {}", feed.subreddit(), e);
        }
    };

    let options = ScanOptions {
        threshold: args.threshold,
        curated_only: args.fresh,
        include_albums: args.include_albums,
        markers: config::feature_markers(),
        ..ScanOptions::default()
    };

    let tracks = collect_tracks(&catalog, &posts, &options, args.verbose, &pb).await;
    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("No new tracks have been added.");
        return;
    }

    info!(
        "Resolved {} tracks from {} posts",
        tracks.len(),
        posts.len()
    );

    let engine = PlaylistSyncEngine::new(&catalog, owner.clone()).with_batch_size(args.batch_size);
    let report = match engine.sync(&tracks, &playlists).await {
        Ok(report) => report,
        Err(e) => error!("An error has occurred removing or adding new tracks: {}", e),
    };

    if args.verbose {
        print_net_changes(&catalog, &owner, &report).await;
    }

    let rows: Vec<SyncTableRow> = report
        .entries
        .iter()
        .map(|entry| SyncTableRow {
            batch: entry.batch + 1,
            playlist: entry.playlist.clone(),
            before: entry.before,
            after: entry.after,
            added: entry.net_change(),
        })
        .collect();
    println!("{}", Table::new(rows));

    success!(
        "Synced {} tracks into {} playlists in {} batches",
        tracks.len(),
        playlists.len(),
        report.batches()
    );
}

/// Resolves `posts` in feed order and returns the accepted tracks.
///
/// A post that fails to resolve is reported and skipped.
pub async fn collect_tracks<C: Catalog + ?Sized>(
    catalog: &C,
    posts: &[RawPost],
    options: &ScanOptions,
    verbose: bool,
    pb: &ProgressBar,
) -> Vec<TrackRef> {
    let resolver = TrackResolver::new(catalog);
    let mut tracks = Vec::new();

    for (index, post) in posts.iter().enumerate() {
        pb.set_message(format!(
            "Resolving post {current}/{total}",
            current = index + 1,
            total = posts.len()
        ));

        match resolver.resolve_post(post, options).await {
            Ok(Resolution::Accepted(resolved)) => {
                if verbose {
                    pb.suspend(|| {
                        info!("Post: {}", post.title);
                        info!("URL: {}", post.url);
                        info!("Score: {}", post.score);
                    });
                }
                tracks.extend(resolved);
            }
            Ok(Resolution::Skipped(_)) => {}
            Err(e) => pb.suspend(|| warning!("Cannot resolve '{}': {}", post.title, e)),
        }
    }

    tracks
}

async fn print_net_changes<C: Catalog + ?Sized>(catalog: &C, owner: &str, report: &SyncReport) {
    for entry in &report.entries {
        let name = catalog
            .playlist_name(owner, &entry.playlist)
            .await
            .unwrap_or_else(|_| entry.playlist.clone());
        info!("New tracks added to {}: {}", name, entry.net_change());
    }
}
