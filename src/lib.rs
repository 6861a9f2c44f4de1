//! Core logic for the Toadua gloss extraction pipeline.
//!
//! A Toadua dump is a JSON list of community dictionary entries. This crate
//! turns such a dump into short English glosses and guessed argument frames:
//! [`entry`] parses the dump, [`filter`] selects the entries worth keeping,
//! [`gloss`] and [`frame`] derive a gloss and a frame from each definition
//! body, and [`output`] writes the results as a head/gloss TSV table or as
//! JSON maps. [`fetch`] talks to the Toadua API and caches the dump on disk.

pub mod config;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod frame;
pub mod gloss;
pub mod io_utils;
pub mod output;
pub mod stats;

pub use config::Config;
pub use entry::{parse_dump, read_dump, Entry};
pub use error::ToaglossError;
pub use fetch::{fetch_dump, read_or_fetch, DEFAULT_API_URL, DEFAULT_CACHE_PATH};
pub use filter::SelectionRules;
pub use frame::guess_frame;
pub use gloss::extract_gloss;
pub use output::{build_maps, write_json_map, write_tsv, DataMaps};
pub use stats::ExtractStats;

/// Placeholder glyph marking an argument slot in a definition body.
pub const PLACEHOLDER: char = '▯';
/// Longest gloss worth emitting, in characters.
pub const GLOSS_MAX_CHARS: usize = 22;
/// Longest head worth emitting, in characters.
pub const HEAD_MAX_CHARS: usize = 30;
