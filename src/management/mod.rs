mod auth;
mod playlist;

pub use auth::TokenManager;
pub use playlist::PlaylistManager;
pub use playlist::playlist_id;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
