//! Serial-frame guessing from Toadua definition bodies.
//!
//! Each `▯` slot of a definition is classified by the surrounding wording
//! and the classification letters are joined with spaces: `c` for an
//! ordinary continuant slot, `0` for a clausal "... is the case" slot,
//! `1` for a property slot and `2` for a relation slot. `▯ tells ▯ that
//! ▯ is the case.` becomes `c c 0`.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes only; digits and letters from other scripts are plain text.
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\d)").expect("valid regex"));

static CLAUSAL_SLOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"▯ (\S+ ){0,2}the case").expect("valid regex"));

static SATISFIED_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"satisf(?-u:\w+) (property )?▯").expect("valid regex"));

static PROPERTY_SLOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"property ▯").expect("valid regex"));

static RELATION_SLOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"relation ▯").expect("valid regex"));

static NON_SLOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^012▯]").expect("valid regex"));

/// Guess the argument frame of a definition.
///
/// Works on the first clause that is not a `predicate:` note. Returns
/// `"?"` when there is no usable clause and the empty string when the
/// clause has no slots at all.
pub fn guess_frame(body: &str) -> String {
    let clause = body
        .split(';')
        .find(|clause| !clause.starts_with("predicate:"));
    let clause = match clause {
        None | Some("") => return "?".to_string(),
        Some(clause) => clause,
    };

    let frame = clause.to_lowercase();
    let frame = DIGITS.replace_all(&frame, "");
    let frame = CLAUSAL_SLOT.replace_all(&frame, "0");
    let frame = SATISFIED_PROPERTY.replace_all(&frame, "1");
    let frame = PROPERTY_SLOT.replace_all(&frame, "1");
    let frame = RELATION_SLOT.replace_all(&frame, "2");
    let frame = NON_SLOT.replace_all(&frame, "");
    let frame = frame.replace('▯', "c");

    let letters: Vec<String> = frame.chars().map(|c| c.to_string()).collect();
    letters.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
