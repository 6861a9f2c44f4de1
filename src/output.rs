//! Result writers.
//!
//! Two output forms exist. The TSV table lists `head<TAB>gloss` lines sorted
//! by head, one line per surviving entry. The JSON maps key glosses and
//! frames by head; entries are folded in ascending score order so that a
//! higher scoring definition of the same head wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::{
    extract_gloss, guess_frame, Config, Entry, ExtractStats, SelectionRules, ToaglossError,
};

/// Gloss and frame maps keyed by head.
#[derive(Debug, Default)]
pub struct DataMaps {
    pub glosses: BTreeMap<String, String>,
    pub frames: BTreeMap<String, String>,
}

fn check_gloss_bounds(config: &Config) -> Result<(), ToaglossError> {
    if config.min_gloss_chars > config.max_gloss_chars {
        return Err(ToaglossError::Config(
            "minimum gloss length exceeds the maximum".to_string(),
        ));
    }
    Ok(())
}

/// Write the head/gloss table for `entries` to `out`.
///
/// Entries are sorted by head; ties keep dump order, so duplicate heads
/// produce one line each. Returns the number of lines written.
pub fn write_tsv<W: Write>(
    entries: &[Entry],
    rules: &SelectionRules,
    config: &Config,
    out: W,
    stats: &mut ExtractStats,
) -> Result<u64, ToaglossError> {
    check_gloss_bounds(config)?;

    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.head.cmp(&b.head));

    let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);
    let mut emitted = 0u64;

    for entry in sorted {
        stats.tick_entry();
        if !rules.keep(entry) {
            stats.tick_dropped_selection();
            continue;
        }
        let gloss = match extract_gloss(&entry.body, &entry.head) {
            Some(g) => g,
            None => {
                stats.tick_no_gloss();
                continue;
            }
        };
        let len = gloss.chars().count();
        if len < config.min_gloss_chars || len > config.max_gloss_chars {
            stats.tick_gloss_out_of_bounds();
            continue;
        }
        if entry.head.chars().count() > config.max_head_chars {
            stats.tick_head_too_long();
            continue;
        }
        wtr.write_record(&[entry.head.as_str(), gloss.as_str()])?;
        stats.tick_emitted();
        emitted += 1;
    }

    wtr.flush()?;
    Ok(emitted)
}

/// Fold `entries` into gloss and frame maps keyed by head.
///
/// Entries are visited in ascending score order, so on duplicate heads the
/// higher scoring entry overwrites the lower one. A head too long for the
/// configured bound contributes neither a gloss nor a frame. Frames are
/// stored whenever non-empty, including the `?` guess.
pub fn build_maps(
    entries: &[Entry],
    rules: &SelectionRules,
    config: &Config,
) -> Result<DataMaps, ToaglossError> {
    check_gloss_bounds(config)?;

    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.score.unwrap_or(0));

    let mut maps = DataMaps::default();
    for entry in sorted {
        if !rules.keep(entry) {
            continue;
        }
        if entry.head.chars().count() > config.max_head_chars {
            continue;
        }
        if let Some(gloss) = extract_gloss(&entry.body, &entry.head) {
            let len = gloss.chars().count();
            if len >= config.min_gloss_chars && len <= config.max_gloss_chars {
                maps.glosses.insert(entry.head.clone(), gloss);
            }
        }
        let frame = guess_frame(&entry.body);
        if !frame.is_empty() {
            maps.frames.insert(entry.head.clone(), frame);
        }
    }
    Ok(maps)
}

/// Write one map as compact JSON, keys in sorted order.
pub fn write_json_map<P: AsRef<Path>>(
    path: P,
    map: &BTreeMap<String, String>,
) -> Result<(), ToaglossError> {
    let data = serde_json::to_string(map)?;
    fs::write(path, data)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(head: &str, body: &str, score: i64) -> Entry {
        Entry {
            head: head.to_string(),
            body: body.to_string(),
            scope: Some("en".to_string()),
            score: Some(score),
            user: None,
        }
    }

    #[test]
    fn tsv_is_sorted_by_head() {
        let entries = vec![
            entry("zu", "▯ is a word.", 1),
            entry("apple", "▯ is an apple.", 1),
        ];
        let mut buf = Vec::new();
        let mut stats = ExtractStats::new();
        let n = write_tsv(
            &entries,
            &SelectionRules::default(),
            &Config::default(),
            &mut buf,
            &mut stats,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(buf, b"apple\tapple\nzu\tword\n");
    }

    #[test]
    fn tsv_keeps_duplicate_heads_in_dump_order() {
        let entries = vec![
            entry("toa", "▯ is a word.", 0),
            entry("toa", "▯ is a term.", 5),
        ];
        let mut buf = Vec::new();
        let mut stats = ExtractStats::new();
        write_tsv(
            &entries,
            &SelectionRules::default(),
            &Config::default(),
            &mut buf,
            &mut stats,
        )
        .unwrap();
        assert_eq!(buf, b"toa\tword\ntoa\tterm\n");
    }

    #[test]
    fn tsv_enforces_bounds() {
        let long_head = "x".repeat(31);
        let entries = vec![
            entry(&long_head, "▯ is a word.", 1),
            entry("toa", "▯ is a very excessively padded long phrase here.", 1),
        ];
        let mut buf = Vec::new();
        let mut stats = ExtractStats::new();
        let n = write_tsv(
            &entries,
            &SelectionRules::default(),
            &Config::default(),
            &mut buf,
            &mut stats,
        )
        .unwrap();
        assert_eq!(n, 0);
        assert_eq!(stats.head_too_long, 1);
        assert_eq!(stats.gloss_out_of_bounds, 1);
    }

    #[test]
    fn higher_score_wins_the_map() {
        let entries = vec![
            entry("toa", "▯ is a term.", 5),
            entry("toa", "▯ is a word.", 0),
        ];
        let maps = build_maps(&entries, &SelectionRules::for_maps(), &Config::default()).unwrap();
        assert_eq!(maps.glosses.get("toa").map(String::as_str), Some("term"));
    }

    #[test]
    fn frames_keep_the_fallback_guess() {
        let entries = vec![
            entry("toa", "", 0),
            entry("kuna", "nothing slotted", 0),
        ];
        let maps = build_maps(&entries, &SelectionRules::for_maps(), &Config::default()).unwrap();
        assert_eq!(maps.frames.get("toa").map(String::as_str), Some("?"));
        assert_eq!(maps.frames.get("kuna"), None);
    }

    #[test]
    fn inverted_gloss_bounds_are_rejected() {
        let entries = vec![entry("toa", "▯ is a word.", 1)];
        let config = Config {
            min_gloss_chars: 10,
            max_gloss_chars: 3,
            ..Config::default()
        };

        let mut buf: Vec<u8> = Vec::new();
        let mut stats = ExtractStats::new();
        let err = write_tsv(
            &entries,
            &SelectionRules::default(),
            &config,
            &mut buf,
            &mut stats,
        )
        .unwrap_err();
        assert!(matches!(err, ToaglossError::Config(_)));

        let err = build_maps(&entries, &SelectionRules::for_maps(), &config).unwrap_err();
        assert!(matches!(err, ToaglossError::Config(_)));
    }
}
