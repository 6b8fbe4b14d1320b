//! # sumlex
//!
//! Frequency-based extractive summarization and lexicon sentiment
//! classification.
//!
//! The summarizer builds a whole-text word frequency table (lowercased,
//! alphanumeric-only, stopwords excluded), scores each sentence by the
//! table weight of its tokens, and returns the top-K sentences verbatim in
//! document order. The sentiment classifier maps a lexicon compound score
//! in [-1, 1] to positive / negative / neutral with fixed ±0.05 thresholds.
//!
//! Both components are stateless per call and deterministic for identical
//! inputs; their stopword set and lexicon are resolved once at
//! construction.
//!
//! # Quick start
//!
//! ```
//! use sumlex::{Summarizer, SentimentAnalyzer, SentimentLabel};
//!
//! let summarizer = Summarizer::new().with_num_sentences(2);
//! let summary = summarizer
//!     .summarize("Cats are great. Dogs are great too. I love pizza.")
//!     .unwrap();
//! assert_eq!(summary.text, "Cats are great. Dogs are great too.");
//!
//! let analyzer = SentimentAnalyzer::new();
//! assert_eq!(analyzer.classify("I love this!"), SentimentLabel::Positive);
//! ```
//!
//! Batch helpers in [`batch`] process independent inputs in parallel, and
//! [`TextPipeline`] runs both components over one input.

pub mod batch;
pub mod error;
pub mod frequency;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod summarizer;
pub mod types;

pub use error::{PipelineError, Result};
pub use frequency::FrequencyTable;
pub use nlp::{SentenceSegmenter, StopwordFilter, WordTokenizer};
pub use pipeline::{TextPipeline, TextReport};
pub use sentiment::{SentimentAnalyzer, SentimentLexicon};
pub use summarizer::{Summarizer, SummarizerConfig};
pub use types::{ScoredSentence, Sentence, SentimentLabel, SentimentReport, Summary};

/// Summarize `text` into at most `num_sentences` sentences with default
/// settings (English stopwords).
///
/// Builds a fresh [`Summarizer`] per call; construct one explicitly for
/// repeated use.
pub fn summarize(text: &str, num_sentences: usize) -> Result<String> {
    Summarizer::new()
        .with_num_sentences(num_sentences)
        .summarize(text)
        .map(|summary| summary.text)
}

/// Classify `text` with the built-in lexicon.
///
/// Builds a fresh [`SentimentAnalyzer`] per call; construct one explicitly
/// for repeated use.
pub fn classify(text: &str) -> SentimentLabel {
    SentimentAnalyzer::new().classify(text)
}
