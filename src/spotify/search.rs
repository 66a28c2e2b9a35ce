use crate::{
    Res,
    types::{Paging, SearchResponse, TrackObject},
    utils,
};

use super::SpotifyCatalog;

const SEARCH_LIMIT: &str = "10";
const ALBUM_PAGE_LIMIT: u32 = 50;

/// Searches the catalog; `kind` is `track` or `album`.
pub async fn search(catalog: &SpotifyCatalog, query: &str, kind: &str) -> Res<SearchResponse> {
    let request = catalog
        .client
        .get(catalog.endpoint("search"))
        .query(&[("q", query), ("type", kind), ("limit", SEARCH_LIMIT)]);

    let response = catalog.send(request).await?;
    Ok(response.json::<SearchResponse>().await?)
}

/// Lists every track of the album behind `url`, following `next` links.
pub async fn album_tracks(catalog: &SpotifyCatalog, url: &str) -> Res<Vec<TrackObject>> {
    let album_id =
        album_id(url).ok_or_else(|| format!("'{}' does not point to an album", url))?;

    let mut next = Some(format!(
        "{endpoint}?limit={limit}",
        endpoint = catalog.endpoint(&format!("albums/{}/tracks", album_id)),
        limit = ALBUM_PAGE_LIMIT
    ));
    let mut tracks = Vec::new();

    while let Some(page_url) = next {
        let response = catalog.send(catalog.client.get(&page_url)).await?;
        let page = response.json::<Paging<TrackObject>>().await?;
        tracks.extend(page.items);
        next = page.next;
    }

    Ok(tracks)
}

fn album_id(url: &str) -> Option<&str> {
    let mut segments = utils::strip_query(url).split('/');
    segments.find(|segment| *segment == "album")?;
    segments.next().filter(|id| !id.is_empty())
}
