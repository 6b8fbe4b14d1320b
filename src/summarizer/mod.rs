//! Extractive summarization
//!
//! Scores each sentence by the whole-text frequency counts of its tokens
//! and selects the top-K, re-emitted verbatim in document order.
//!
//! Scoring is two-pass by contract: the frequency table is built with
//! alphanumeric/stopword filtering, then each sentence is re-tokenized
//! *without* filtering and its tokens looked up directly. Filtered tokens
//! were never inserted, so they contribute zero (see [`crate::frequency`]).

pub mod selector;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::frequency::FrequencyTable;
use crate::nlp::{SentenceSegmenter, StopwordFilter, WordTokenizer};
use crate::types::{ScoredSentence, Sentence, Summary};

use selector::select_top_k;

/// Configuration for the summarizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Number of sentences to select. Must be >= 1; values larger than the
    /// sentence count return every sentence.
    pub num_sentences: usize,
    /// Stopword language tag (see [`StopwordFilter::new`]).
    pub language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            language: "en".to_string(),
        }
    }
}

/// Frequency-based extractive summarizer.
///
/// Holds its tokenizer and stopword set, built once at construction and
/// shared by reference across calls. Each call is stateless; parallel use
/// over independent inputs needs no coordination.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: WordTokenizer,
    segmenter: SentenceSegmenter,
    stopwords: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default config (3 sentences, English).
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer from an explicit config.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self {
            config,
            tokenizer: WordTokenizer::new(),
            segmenter: SentenceSegmenter::new(),
            stopwords,
        }
    }

    /// Set the number of sentences to select.
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Replace the stopword filter (e.g. with a custom list).
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Summarize `text` into at most `num_sentences` sentences.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::EmptyInput`] if `text` is empty or
    ///   whitespace-only.
    /// - [`PipelineError::InvalidParameter`] if `num_sentences` is 0. The
    ///   value is never clamped.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        if self.config.num_sentences == 0 {
            return Err(PipelineError::invalid_parameter(
                "num_sentences",
                self.config.num_sentences,
                "must be >= 1",
            ));
        }

        let sentences = self.segmenter.segment(text);
        let table = FrequencyTable::build(text, &self.tokenizer, &self.stopwords);
        let scored = self.score_sentences(sentences, &table);
        let selected = select_top_k(scored, self.config.num_sentences);

        let joined = selected
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Summary {
            text: joined,
            sentences: selected,
        })
    }

    /// Score every sentence by summing table counts over its raw token
    /// stream. No filtering here; absent tokens count zero.
    fn score_sentences(&self, sentences: Vec<Sentence>, table: &FrequencyTable) -> Vec<ScoredSentence> {
        sentences
            .into_iter()
            .map(|sentence| {
                let score = self
                    .tokenizer
                    .tokenize(&sentence.text)
                    .iter()
                    .map(|token| u64::from(table.count(token)))
                    .sum();
                ScoredSentence { sentence, score }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer(k: usize) -> Summarizer {
        // Fixed stopword list keeps these tests independent of the packaged
        // English list.
        Summarizer::new()
            .with_num_sentences(k)
            .with_stopwords(StopwordFilter::from_list(&["are", "too", "i", "is", "a"]))
    }

    #[test]
    fn test_selects_highest_scoring_sentences() {
        let text = "Cats are great. Dogs are great too. I love pizza.";
        let summary = summarizer(2).summarize(text).unwrap();

        // "great" occurs twice, so both "great" sentences outscore the last.
        assert_eq!(summary.text, "Cats are great. Dogs are great too.");
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_output_preserves_document_order() {
        // Last sentence scores highest; order must still be document order.
        let text = "Plain filler here. More filler. Rust rust rust rust.";
        let summary = summarizer(2).summarize(text).unwrap();

        let first_pos = summary.sentences[0].sentence.index;
        let second_pos = summary.sentences[1].sentence.index;
        assert!(first_pos < second_pos);
        assert!(summary.text.ends_with("Rust rust rust rust."));
    }

    #[test]
    fn test_k_exceeding_sentence_count_returns_all() {
        let text = "One thing. Another thing.";
        let summary = summarizer(10).summarize(text).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.text, "One thing. Another thing.");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = summarizer(3).summarize("   \n ").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
    }

    #[test]
    fn test_zero_sentences_is_rejected() {
        let err = summarizer(0).summarize("Some text.").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidParameter { .. }));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let text = "Cats are great. Dogs are great too. I love pizza.";
        let s = summarizer(2);
        let a = s.summarize(text).unwrap();
        let b = s.summarize(text).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_ties_break_by_earliest_position() {
        // All sentences score equally; the first k must win.
        let text = "Alpha beta. Gamma delta. Epsilon zeta.";
        let summary = summarizer(2).summarize(text).unwrap();

        assert_eq!(summary.text, "Alpha beta. Gamma delta.");
    }

    #[test]
    fn test_all_stopword_text_scores_zero_but_summarizes() {
        // Every token filtered from the table; scores are all zero and
        // selection falls back to position order.
        let text = "I are too. Is a too.";
        let summary = summarizer(1).summarize(text).unwrap();

        assert_eq!(summary.text, "I are too.");
        assert_eq!(summary.sentences[0].score, 0);
    }

    #[test]
    fn test_summary_sentences_are_verbatim() {
        let text = "Cats are great. Dogs are great too. I love pizza.";
        let summary = summarizer(3).summarize(text).unwrap();

        for scored in &summary.sentences {
            assert!(text.contains(&scored.sentence.text));
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SummarizerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_sentences, 3);
        assert_eq!(back.language, "en");
    }
}
