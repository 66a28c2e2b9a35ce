use tabled::Table;

use crate::{
    catalog::Catalog,
    config::SpotifySettings,
    error, info,
    management::{PlaylistManager, TokenManager},
    spotify::SpotifyCatalog,
    success,
    types::PlaylistTableRow,
    warning,
};

/// Lists the target playlists. Names are looked up when a token is cached.
pub async fn list_playlists() {
    let manager = load_manager().await;
    if manager.is_empty() {
        warning!("No target playlists configured. Run freshcli playlists add <id>");
        return;
    }

    let catalog = catalog().await;
    let mut rows = Vec::new();
    for id in manager.all() {
        let name = match &catalog {
            Some((catalog, owner)) => catalog
                .playlist_name(owner, id)
                .await
                .unwrap_or_else(|_| "-".to_string()),
            None => "-".to_string(),
        };
        rows.push(PlaylistTableRow {
            id: id.clone(),
            name,
        });
    }

    println!("{}", Table::new(rows));
}

pub async fn add_playlists(ids: Vec<String>) {
    let mut manager = load_manager().await;
    if let Err(e) = manager.add_playlists(&ids).persist().await {
        error!("Failed to save target playlists: {}", e);
    }
    success!("{} target playlists configured.", manager.all().len());
}

pub async fn remove_playlists(ids: Vec<String>) {
    let mut manager = load_manager().await;
    if let Err(e) = manager.remove_playlists(&ids).persist().await {
        error!("Failed to save target playlists: {}", e);
    }
    success!("{} target playlists configured.", manager.all().len());
}

async fn load_manager() -> PlaylistManager {
    match PlaylistManager::new(None).load().await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load target playlists: {}", e),
    }
}

async fn catalog() -> Option<(SpotifyCatalog, String)> {
    let settings = SpotifySettings::from_env().ok()?;
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(_) => {
            info!("Run freshcli auth to show playlist names.");
            return None;
        }
    };
    let token = token_mgr
        .get_valid_token(&settings.token_url, &settings.client_id)
        .await;
    let owner = settings.user.clone();
    Some((SpotifyCatalog::new(settings, token), owner))
}
