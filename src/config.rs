use crate::{GLOSS_MAX_CHARS, HEAD_MAX_CHARS};

/// Runtime configuration parameters for the extraction pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shortest gloss worth emitting, in characters.
    pub min_gloss_chars: usize,
    /// Longest gloss worth emitting, in characters.
    pub max_gloss_chars: usize,
    /// Longest head worth emitting, in characters.
    pub max_head_chars: usize,
    /// Language scope entries must carry, e.g. `en`.
    pub scope: String,
    /// Minimum community score entries must carry.
    pub min_score: i64,
    /// Whether heads containing spaces are discarded.
    pub single_word_heads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_gloss_chars: 1,
            max_gloss_chars: GLOSS_MAX_CHARS,
            max_head_chars: HEAD_MAX_CHARS,
            scope: "en".to_string(),
            min_score: 0,
            single_word_heads: true,
        }
    }
}

impl Config {
    /// Selection rules derived from this configuration.
    pub fn selection_rules(&self) -> crate::SelectionRules {
        crate::SelectionRules {
            scope: Some(self.scope.clone()),
            min_score: Some(self.min_score),
            single_word_heads: self.single_word_heads,
        }
    }
}
