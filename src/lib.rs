//! Fresh Track Collector CLI Library
//!
//! This library scans a subreddit feed of music-recommendation posts, resolves
//! every post to a Spotify track and keeps a set of playlists in sync with the
//! resolved tracks.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `catalog` - Collaborator traits for the post feed and the track catalog
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token and target playlist persistence
//! - `reddit` - reddit feed client
//! - `resolver` - Post filtering and track resolution
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `sync` - Batched remove-then-add playlist synchronization
//! - `title` - Post title normalization
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod reddit;
pub mod resolver;
pub mod server;
pub mod spotify;
pub mod sync;
pub mod title;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Collaborator calls (feed, catalog, caches) return this boxed error so
/// transport, decoding and IO failures can travel through one channel while
/// keeping the Send + Sync bounds needed in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Scanning r/{}", subreddit);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for unrecoverable errors: the process terminates with exit
/// code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Failed to load token. Please run freshcli auth");
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a single post that failed to resolve.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
