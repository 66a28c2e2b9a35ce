use crate::{
    Res,
    types::{
        AddTracksRequest, PlaylistResponse, PlaylistTracksResponse, RemoveTracksRequest,
        SnapshotResponse, TrackRef, TrackUri,
    },
};

use super::SpotifyCatalog;

fn tracks_endpoint(catalog: &SpotifyCatalog, playlist: &str) -> String {
    catalog.endpoint(&format!("playlists/{}/tracks", playlist))
}

fn uris(tracks: &[TrackRef]) -> Res<Vec<String>> {
    let mut uris = Vec::with_capacity(tracks.len());
    for track in tracks {
        match track.uri() {
            Some(uri) => uris.push(uri),
            None => return Err(format!("'{}' is not a track link", track).into()),
        }
    }
    Ok(uris)
}

pub async fn tracks_total(
    catalog: &SpotifyCatalog,
    playlist: &str,
) -> Res<PlaylistTracksResponse> {
    let request = catalog
        .client
        .get(tracks_endpoint(catalog, playlist))
        .query(&[("fields", "total"), ("limit", "1")]);

    let response = catalog.send(request).await?;
    Ok(response.json::<PlaylistTracksResponse>().await?)
}

/// Removes all occurrences of the given tracks.
pub async fn remove_tracks(
    catalog: &SpotifyCatalog,
    playlist: &str,
    tracks: &[TrackRef],
) -> Res<()> {
    if tracks.is_empty() {
        return Ok(());
    }

    let body = RemoveTracksRequest {
        tracks: uris(tracks)?
            .into_iter()
            .map(|uri| TrackUri { uri })
            .collect(),
    };
    let request = catalog
        .client
        .delete(tracks_endpoint(catalog, playlist))
        .json(&body);

    catalog
        .send(request)
        .await?
        .json::<SnapshotResponse>()
        .await?;
    Ok(())
}

pub async fn add_tracks(
    catalog: &SpotifyCatalog,
    playlist: &str,
    tracks: &[TrackRef],
) -> Res<()> {
    if tracks.is_empty() {
        return Ok(());
    }

    let body = AddTracksRequest {
        uris: uris(tracks)?,
    };
    let request = catalog
        .client
        .post(tracks_endpoint(catalog, playlist))
        .json(&body);

    catalog
        .send(request)
        .await?
        .json::<SnapshotResponse>()
        .await?;
    Ok(())
}

pub async fn name(catalog: &SpotifyCatalog, playlist: &str) -> Res<String> {
    let request = catalog
        .client
        .get(catalog.endpoint(&format!("playlists/{}", playlist)))
        .query(&[("fields", "name")]);

    let response = catalog.send(request).await?;
    Ok(response.json::<PlaylistResponse>().await?.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpotifySettings;

    #[test]
    fn test_tracks_endpoint_is_not_user_scoped() {
        let catalog = SpotifyCatalog::new(
            SpotifySettings {
                api_url: "https://api.spotify.com/v1".to_string(),
                token_url: String::new(),
                client_id: String::new(),
                user: "owner".to_string(),
            },
            String::new(),
        );

        assert_eq!(
            tracks_endpoint(&catalog, "abc"),
            "https://api.spotify.com/v1/playlists/abc/tracks"
        );
    }
}
