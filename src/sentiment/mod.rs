//! Sentiment classification
//!
//! Computes a compound polarity score over the raw text through the
//! lexicon scorer and maps it to a three-way label with fixed thresholds.
//! The thresholds are contract values; boundaries are inclusive.

pub mod lexicon;

pub use lexicon::SentimentLexicon;

use crate::types::{SentimentLabel, SentimentReport};

/// Compound score at or above which a text is labeled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which a text is labeled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Lexicon-backed three-way sentiment classifier.
///
/// The lexicon is built once at construction; every call is stateless and
/// total over all string inputs, including empty text (compound 0, neutral).
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the built-in lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer over a custom lexicon.
    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Classify `text` as positive, negative, or neutral.
    pub fn classify(&self, text: &str) -> SentimentLabel {
        SentimentLabel::from_compound(self.lexicon.compound(text))
    }

    /// Classify `text`, keeping the raw compound score for diagnostics.
    pub fn analyze(&self, text: &str) -> SentimentReport {
        let compound = self.lexicon.compound(text);
        SentimentReport {
            label: SentimentLabel::from_compound(compound),
            compound,
        }
    }
}
