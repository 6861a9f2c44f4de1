//! Entry selection.
//!
//! Pre-filtered snapshots omit `scope` and `score`, so a rule only applies
//! when the entry actually carries the field. Absent fields always pass.

use crate::Entry;

/// Which dump entries take part in extraction.
#[derive(Debug, Clone)]
pub struct SelectionRules {
    /// Required language scope, or `None` to accept every scope.
    pub scope: Option<String>,
    /// Minimum community score, or `None` to accept every score.
    pub min_score: Option<i64>,
    /// Discard heads containing spaces.
    pub single_word_heads: bool,
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self {
            scope: Some("en".to_string()),
            min_score: Some(0),
            single_word_heads: true,
        }
    }
}

impl SelectionRules {
    /// Rules for the gloss map builders, which keep multi-word heads.
    pub fn for_maps() -> Self {
        Self {
            single_word_heads: false,
            ..Self::default()
        }
    }

    /// Whether `entry` survives these rules.
    pub fn keep(&self, entry: &Entry) -> bool {
        if let (Some(want), Some(have)) = (&self.scope, &entry.scope) {
            if want != have {
                return false;
            }
        }
        if let (Some(min), Some(score)) = (self.min_score, entry.score) {
            if score < min {
                return false;
            }
        }
        if self.single_word_heads && entry.head.contains(' ') {
            return false;
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(head: &str, scope: Option<&str>, score: Option<i64>) -> Entry {
        Entry {
            head: head.to_string(),
            body: String::new(),
            scope: scope.map(str::to_string),
            score,
            user: None,
        }
    }

    #[test]
    fn scope_must_match_when_present() {
        let rules = SelectionRules::default();
        assert!(rules.keep(&entry("toa", Some("en"), Some(0))));
        assert!(!rules.keep(&entry("toa", Some("toa"), Some(0))));
        assert!(rules.keep(&entry("toa", None, Some(0))));
    }

    #[test]
    fn score_threshold() {
        let rules = SelectionRules::default();
        assert!(rules.keep(&entry("toa", Some("en"), Some(0))));
        assert!(!rules.keep(&entry("toa", Some("en"), Some(-1))));
        assert!(rules.keep(&entry("toa", Some("en"), None)));
    }

    #[test]
    fn multi_word_heads() {
        let rules = SelectionRules::default();
        assert!(!rules.keep(&entry("du shao", Some("en"), Some(0))));
        assert!(SelectionRules::for_maps().keep(&entry("du shao", Some("en"), Some(0))));
    }

    #[test]
    fn disabled_rules_pass_everything() {
        let rules = SelectionRules {
            scope: None,
            min_score: None,
            single_word_heads: false,
        };
        assert!(rules.keep(&entry("du shao", Some("toa"), Some(-5))));
    }
}
