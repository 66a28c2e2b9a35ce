//! Playlist synchronization.
//!
//! Resolved tracks are committed to every target playlist in batches of at
//! most [`MAX_BATCH_SIZE`]. Per batch and playlist the engine removes every
//! occurrence of the batch's tracks and then adds them again, so a track ends
//! up in a playlist exactly once no matter how often it was synced. Running
//! the same sync twice leaves the playlist unchanged the second time.

use crate::{
    Res,
    catalog::Catalog,
    types::{BatchReport, MAX_BATCH_SIZE, SyncReport, TrackBatch, TrackRef},
    utils,
};

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to sync batch {batch} into playlist {playlist}: {source}")]
    Playlist {
        batch: usize,
        playlist: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Splits `tracks` into consecutive batches, preserving order.
///
/// The batch size is clamped to `1..=MAX_BATCH_SIZE`; only the last batch
/// may be shorter.
pub fn partition(tracks: &[TrackRef], batch_size: usize) -> Vec<TrackBatch> {
    let size = batch_size.clamp(1, MAX_BATCH_SIZE);
    tracks
        .chunks(size)
        .map(|chunk| TrackBatch::new(chunk.to_vec()))
        .collect()
}

pub struct PlaylistSyncEngine<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    owner: String,
    batch_size: usize,
}

impl<'a, C: Catalog + ?Sized> PlaylistSyncEngine<'a, C> {
    pub fn new(catalog: &'a C, owner: impl Into<String>) -> Self {
        Self {
            catalog,
            owner: owner.into(),
            batch_size: MAX_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Commits `tracks` to every playlist in `playlists`.
    ///
    /// Duplicate references are collapsed first. The first failing catalog
    /// call aborts the run; batches that already completed stay committed
    /// and re-running the sync is safe.
    pub async fn sync(
        &self,
        tracks: &[TrackRef],
        playlists: &[String],
    ) -> Result<SyncReport, SyncError> {
        let mut unique = tracks.to_vec();
        utils::remove_duplicate_tracks(&mut unique);

        let mut report = SyncReport::default();
        for (index, batch) in partition(&unique, self.batch_size).iter().enumerate() {
            for playlist in playlists {
                let entry = self
                    .sync_batch(index, batch, playlist)
                    .await
                    .map_err(|source| SyncError::Playlist {
                        batch: index,
                        playlist: playlist.clone(),
                        source,
                    })?;
                report.entries.push(entry);
            }
        }

        Ok(report)
    }

    async fn sync_batch(
        &self,
        index: usize,
        batch: &TrackBatch,
        playlist: &str,
    ) -> Res<BatchReport> {
        let before = self
            .catalog
            .playlist_tracks(&self.owner, playlist)
            .await?
            .total;

        self.catalog
            .remove_tracks_from_playlist(&self.owner, playlist, batch.tracks())
            .await?;
        self.catalog
            .add_tracks_to_playlist(&self.owner, playlist, batch.tracks())
            .await?;

        let after = self
            .catalog
            .playlist_tracks(&self.owner, playlist)
            .await?
            .total;

        Ok(BatchReport {
            batch: index,
            playlist: playlist.to_string(),
            before,
            after,
        })
    }
}
