use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{info, spotify, types::PkceToken};

/// Authorizes freshcli to modify the user's playlists.
pub async fn auth() {
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    info!("Waiting for Spotify authorization...");
    spotify::auth::auth(shared_state).await;
}
