use std::path::PathBuf;

use crate::config;

use super::StoreError;

/// Persistent list of the playlists a sync writes into.
#[derive(Debug, Clone, Default)]
pub struct PlaylistManager {
    playlists: Vec<String>,
    path: Option<PathBuf>,
}

impl PlaylistManager {
    pub fn new(playlists: Option<Vec<String>>) -> Self {
        Self {
            playlists: playlists.unwrap_or_default(),
            path: None,
        }
    }

    /// Uses `path` instead of `<data_local_dir>/freshcli/playlists.json`.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Loads the stored ids. A missing file yields an empty list.
    pub async fn load(self) -> Result<Self, StoreError> {
        let path = self.path();
        let playlists = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { playlists, ..self })
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.playlists)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Adds ids that are not stored yet. Accepts playlist links as well as
    /// bare ids.
    pub fn add_playlists(&mut self, ids: &[String]) -> &mut Self {
        for id in ids.iter().filter_map(|id| playlist_id(id)) {
            if !self.playlists.contains(&id) {
                self.playlists.push(id);
            }
        }
        self
    }

    pub fn remove_playlists(&mut self, ids: &[String]) -> &mut Self {
        let ids: Vec<String> = ids.iter().filter_map(|id| playlist_id(id)).collect();
        self.playlists.retain(|stored| !ids.contains(stored));
        self
    }

    pub fn all(&self) -> &[String] {
        &self.playlists
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| config::data_dir().join("playlists.json"))
    }
}

/// Extracts the id from `https://open.spotify.com/playlist/<id>?si=..`,
/// `spotify:playlist:<id>` or a bare id.
pub fn playlist_id(input: &str) -> Option<String> {
    let input = input.trim();
    let id = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some((_, rest)) = input.split_once("/playlist/") {
        rest.split(['?', '/']).next().unwrap_or_default()
    } else {
        input
    };

    (!id.is_empty()).then(|| id.to_string())
}
