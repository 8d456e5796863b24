use serde::Deserialize;
use url::Url;

use crate::{FailureKind, FetchError, FetchedPage, FetchedRecord};

/// List endpoint payload: `{"count", "next", "previous", "results": [{"name", "url"}]}`.
#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    results: Vec<ResultEntry>,
}

#[derive(Debug, Deserialize)]
struct ResultEntry {
    name: String,
    url: String,
}

/// Decode one page. Relative `next`/`previous` links are resolved against `base`,
/// and an empty link counts as absent.
pub fn decode_page(bytes: &[u8], base: &Url) -> Result<FetchedPage, FetchError> {
    let response: PageResponse = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    Ok(FetchedPage {
        records: response
            .results
            .into_iter()
            .map(|entry| FetchedRecord {
                name: entry.name,
                url: entry.url,
            })
            .collect(),
        next_cursor: resolve_link(base, response.next)?,
        previous_cursor: resolve_link(base, response.previous)?,
        total_count: response.count,
        final_url: base.to_string(),
    })
}

fn resolve_link(base: &Url, link: Option<String>) -> Result<Option<String>, FetchError> {
    let Some(link) = link.filter(|l| !l.trim().is_empty()) else {
        return Ok(None);
    };
    base.join(link.trim())
        .map(|url| Some(url.to_string()))
        .map_err(|err| FetchError::new(FailureKind::Decode, format!("bad link {link:?}: {err}")))
}
