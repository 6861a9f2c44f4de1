//! Gloss extraction from Toadua definition bodies.
//!
//! A definition like `▯ is a small bird.` is turned into the short gloss
//! `small bird` by an ordered chain of pattern rules; the first rule that
//! matches wins:
//!
//! 1. a quoted lowercase phrase directly followed by `;` is returned
//!    verbatim,
//! 2. the text is cut at the first `;`, a trailing period and a trailing
//!    parenthesized tail are removed,
//! 3. definitions with three or more `▯` slots are collapsed to their
//!    first two slots,
//! 4. a trailing connector + `▯` tail (` of ▯`, ` to ▯`, ...) is removed,
//! 5. the copula template `▯ is/are [a/an/the] REST` captures REST,
//! 6. the bare template `▯ REST [ ▯]` captures REST.
//!
//! Captures from 5 and 6 keep only the first `/`-alternative and lose any
//! literal parentheses. No rule matching is a normal outcome, not an
//! error; the function is total and allocates only for returned glosses.

use crate::PLACEHOLDER;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static QUOTED_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['‘’"“”]([a-z .]+)['‘’"“”];"#).expect("valid regex"));

static PAREN_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.+\)$").expect("valid regex"));

// The two literal spaces are intentional: with the connector absent the
// tail only matches `"  ▯"`, never `" ▯"`. The bare template below
// handles single-space tails instead.
static CONNECTOR_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" (of|for|to|by|from)? ▯$").expect("valid regex"));

static COPULA_TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^▯ (?:is|are) (?:(?:a|an|the) )?([^▯]+)$").expect("valid regex"));

static BARE_TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^▯ ([^▯]+)( ▯)?$").expect("valid regex"));

/// Derive a short gloss from a definition body.
///
/// `head` is accepted for signature symmetry with future per-headword
/// rules but takes no part in the current logic. Returns `None` when no
/// rule matches; the caller decides which glosses are short enough to
/// keep.
pub fn extract_gloss(body: &str, head: &str) -> Option<String> {
    let _ = head;

    if let Some(caps) = QUOTED_PHRASE.captures(body) {
        return Some(caps[1].to_string());
    }

    let clause = body.split(';').next().unwrap_or(body).trim();
    let clause = clause.strip_suffix('.').unwrap_or(clause);
    let clause = PAREN_TAIL.replace(clause, "");
    let clause = collapse_placeholders(&clause);
    let clause = clause.trim();
    let clause = CONNECTOR_TAIL.replace(clause, "");

    if let Some(caps) = COPULA_TEMPLATE.captures(&clause) {
        return Some(gloss_word(&caps[1]));
    }
    if let Some(caps) = BARE_TEMPLATE.captures(&clause) {
        return Some(gloss_word(&caps[1]));
    }
    None
}

/// Collapse definitions with three or more placeholder slots down to the
/// segment through the second slot, so `▯ gives ▯ to ▯` becomes
/// `▯ gives ▯` before template matching.
fn collapse_placeholders(text: &str) -> Cow<'_, str> {
    if text.matches(PLACEHOLDER).count() < 3 {
        return Cow::Borrowed(text);
    }
    let mut parts = text.split(PLACEHOLDER);
    let first = parts.next().unwrap_or("");
    let second = parts.next().unwrap_or("");
    Cow::Owned(format!("{first}{PLACEHOLDER}{second}{PLACEHOLDER}"))
}

// Keep the first `/`-alternative of a captured gloss and drop literal
// parenthesis characters (their contents stay).
fn gloss_word(text: &str) -> String {
    text.split('/')
        .next()
        .unwrap_or("")
        .trim()
        .replace(['(', ')'], "")
}

// ---------------------------------------------------------------------------
// Tests
