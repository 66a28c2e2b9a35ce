//! Configuration management for freshcli.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in `<data_local_dir>/freshcli/`
//! 3. Application defaults (where applicable)
//!
//! The getters never panic; a missing variable surfaces as a
//! [`ConfigError`]. Clients receive their settings as explicit
//! [`SpotifySettings`] / [`RedditSettings`] values.

use std::{collections::HashSet, env, path::PathBuf};

use crate::utils;

/// Words that start an unbracketed featuring credit.
pub const DEFAULT_FEATURE_MARKERS: [&str; 8] = [
    "feat", "feat.", "ft", "ft.", "featuring", "ftg", "ftg.", "w/",
];

pub const DEFAULT_SUBREDDIT: &str = "hiphopheads";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Loads environment variables from `<data_local_dir>/freshcli/.env`.
///
/// Creates the directory if needed. A missing `.env` file is fine: the
/// variables may come from the process environment instead.
///
/// - Linux: `~/.local/share/freshcli/.env`
/// - macOS: `~/Library/Application Support/freshcli/.env`
/// - Windows: `%LOCALAPPDATA%/freshcli/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything freshcli stores locally.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("freshcli");
    path
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Address the local OAuth callback server binds to, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> Result<String, ConfigError> {
    require("SERVER_ADDRESS")
}

/// Spotify user that owns the target playlists.
pub fn spotify_user() -> Result<String, ConfigError> {
    require("SPOTIFY_USER_ID")
}

pub fn spotify_client_id() -> Result<String, ConfigError> {
    require("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Must match the redirect URI registered for the Spotify application.
pub fn spotify_redirect_uri() -> Result<String, ConfigError> {
    require("SPOTIFY_API_REDIRECT_URI")
}

/// e.g. `playlist-modify-public playlist-modify-private`
pub fn spotify_scope() -> Result<String, ConfigError> {
    require("SPOTIFY_API_AUTH_SCOPE")
}

pub fn spotify_apiauth_url() -> Result<String, ConfigError> {
    require("SPOTIFY_API_AUTH_URL")
}

/// Base URL of the Web API, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> Result<String, ConfigError> {
    require("SPOTIFY_API_URL")
}

pub fn spotify_apitoken_url() -> Result<String, ConfigError> {
    require("SPOTIFY_API_TOKEN_URL")
}

pub fn reddit_client_id() -> Result<String, ConfigError> {
    require("REDDIT_CLIENT_ID")
}

pub fn reddit_client_secret() -> Result<String, ConfigError> {
    require("REDDIT_CLIENT_SECRET")
}

pub fn reddit_username() -> Result<String, ConfigError> {
    require("REDDIT_USERNAME")
}

/// Featuring markers from `FEATURE_MARKERS`, or the defaults.
pub fn feature_markers() -> HashSet<String> {
    match env::var("FEATURE_MARKERS") {
        Ok(list) if !list.trim().is_empty() => utils::parse_markers(&list),
        _ => DEFAULT_FEATURE_MARKERS
            .iter()
            .map(|marker| marker.to_string())
            .collect(),
    }
}

/// Everything the Spotify catalog client needs.
#[derive(Debug, Clone)]
pub struct SpotifySettings {
    pub api_url: String,
    pub token_url: String,
    pub client_id: String,
    pub user: String,
}

impl SpotifySettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: spotify_apiurl()?.trim_end_matches('/').to_string(),
            token_url: spotify_apitoken_url()?,
            client_id: spotify_client_id()?,
            user: spotify_user()?,
        })
    }
}

/// Everything the reddit feed client needs.
#[derive(Debug, Clone)]
pub struct RedditSettings {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub subreddit: String,
}

impl RedditSettings {
    pub fn from_env(subreddit: &str) -> Result<Self, ConfigError> {
        let subreddit = subreddit.trim().trim_start_matches("r/").to_string();
        if subreddit.is_empty() || subreddit.contains('/') {
            return Err(ConfigError::Invalid {
                name: "subreddit",
                reason: format!("'{}' is not a subreddit name", subreddit),
            });
        }

        Ok(Self {
            client_id: reddit_client_id()?,
            client_secret: reddit_client_secret()?,
            username: reddit_username()?,
            subreddit,
        })
    }
}
