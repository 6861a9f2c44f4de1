//! Toadua dump parsing.
//!
//! The live API wraps entries in `{"results": [...]}` while pre-filtered
//! snapshots are bare arrays of `{head, body}` objects. Both shapes parse
//! into the same [`Entry`] list.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::ToaglossError;

/// One dictionary entry from a Toadua dump.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// The word or phrase being defined.
    pub head: String,
    /// The definition body, with `▯` marking argument slots.
    pub body: String,
    /// Language scope such as `en`. Absent in pre-filtered snapshots.
    #[serde(default)]
    pub scope: Option<String>,
    /// Community vote score. Absent in pre-filtered snapshots.
    #[serde(default)]
    pub score: Option<i64>,
    /// Submitting account. Absent in pre-filtered snapshots.
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Dump {
    Full { results: Vec<Entry> },
    Basic(Vec<Entry>),
}

/// Parse a dump from raw JSON bytes, accepting either dump shape.
pub fn parse_dump(data: &[u8]) -> Result<Vec<Entry>, ToaglossError> {
    let dump: Dump = serde_json::from_slice(data)?;
    Ok(match dump {
        Dump::Full { results } => results,
        Dump::Basic(entries) => entries,
    })
}

/// Read and parse a dump file.
pub fn read_dump<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, ToaglossError> {
    let data = fs::read(path)?;
    parse_dump(&data)
}

// ---------------------------------------------------------------------------
// Tests
