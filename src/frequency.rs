//! Whole-text word frequency table
//!
//! Built once per input text with filtering applied (alphanumeric-only,
//! stopwords excluded); looked up per sentence without filtering. Tokens
//! that were never inserted resolve to a count of zero through
//! [`FrequencyTable::count`], so stopwords and punctuation contribute
//! nothing at scoring time without a second filter pass. Keep the two
//! passes separate: the lookup relies on absence-as-zero.

use rustc_hash::FxHashMap;

use crate::nlp::{StopwordFilter, WordTokenizer};

/// Mapping from normalized word token to its whole-text occurrence count.
///
/// Invariant: a token is present iff it is purely alphanumeric and not a
/// stopword; its count is the total across the whole text, not per sentence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl FrequencyTable {
    /// Build the table over the whole of `text`.
    pub fn build(text: &str, tokenizer: &WordTokenizer, stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokenizer.tokenize(text) {
            if tokenizer.is_alphanumeric(&token) && !stopwords.is_stopword(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count for `token`, zero if absent.
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns `true` if `token` is part of the filtered vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if every token was filtered out. A valid state; every
    /// sentence then scores zero.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
