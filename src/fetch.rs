//! Toadua API access and dump caching.
//!
//! The API answers a POST of `{"action": "search", "query": ["scope", ...]}`
//! with the full dump for that scope. [`read_or_fetch`] keeps a copy on disk
//! so repeat runs stay offline.

use serde_json::json;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::{parse_dump, read_dump, Entry, ToaglossError};

/// Public Toadua instance.
pub const DEFAULT_API_URL: &str = "https://toadua.uakci.pl/api";
/// Where the raw dump is cached, relative to the working directory.
pub const DEFAULT_CACHE_PATH: &str = "data/toadua/dump.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Download the raw dump for `scope` from `url`.
pub fn fetch_dump(url: &str, scope: &str) -> Result<Vec<u8>, ToaglossError> {
    let payload = json!({ "action": "search", "query": ["scope", scope] });
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.post(url).json(&payload).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    if bytes.is_empty() {
        return Err(ToaglossError::Fetch(format!("empty dump from {url}")));
    }
    Ok(bytes.to_vec())
}

/// Read the cached dump at `cache`, fetching from `url` on a cache miss.
///
/// A fetched dump is written to `cache` verbatim before parsing, so later
/// runs see exactly the bytes this run saw.
pub fn read_or_fetch<P: AsRef<Path>>(
    cache: P,
    url: &str,
    scope: &str,
) -> Result<Vec<Entry>, ToaglossError> {
    let cache = cache.as_ref();
    if cache.exists() {
        return read_dump(cache);
    }
    let raw = fetch_dump(url, scope)?;
    if let Some(parent) = cache.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(cache, &raw)?;
    parse_dump(&raw)
}

// ---------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cache_hit_never_fetches() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("dump.json");
        let mut f = fs::File::create(&cache).unwrap();
        f.write_all(br#"[{"head": "toa", "body": "b"}]"#).unwrap();

        // The URL is unusable on purpose; a cache hit must not touch it.
        let entries = read_or_fetch(&cache, "http://invalid.invalid/api", "en").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].head, "toa");
    }
}
