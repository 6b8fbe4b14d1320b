//! Core value types shared across the pipeline.
//!
//! Everything here is a transient, immutable value: constructed once per
//! call, never mutated afterwards, no identity beyond the call that made it.

use serde::{Deserialize, Serialize};

/// A sentence as produced by segmentation, with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Verbatim sentence text, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offset of the sentence start in the source text.
    pub start: usize,
    /// Byte offset one past the sentence end in the source text.
    pub end: usize,
    /// Zero-based position in document order. Duplicated sentence text
    /// still gets distinct indices.
    pub index: usize,
}

/// A sentence together with the frequency score it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// Sum of whole-text frequency counts over the sentence's tokens.
    pub score: u64,
}

/// Result of extractive summarization.
///
/// `text` is the selected sentences joined with single spaces, in original
/// document order. `sentences` carries the same selection with scores and
/// source positions for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub text: String,
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Returns `true` if no sentences were selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Three-way sentiment classification of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a compound polarity score in [-1, 1] to a label.
    ///
    /// Thresholds are contract values: `>= 0.05` is positive, `<= -0.05` is
    /// negative, everything between is neutral. Boundaries are inclusive.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= crate::sentiment::POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= crate::sentiment::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Classification result with the raw compound score kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentReport {
    pub label: SentimentLabel,
    /// Compound polarity in [-1, 1].
    pub compound: f64,
}
