//! Natural language processing components
//!
//! This module provides sentence segmentation, word tokenization, and
//! stopword filtering.

pub mod sentence;
pub mod stopwords;
pub mod tokenizer;

pub use sentence::SentenceSegmenter;
pub use stopwords::StopwordFilter;
pub use tokenizer::WordTokenizer;
