//! Word tokenization
//!
//! Splits text on Unicode word boundaries and lowercases every token.
//! Alphanumeric filtering is a separate, explicit step so that the frequency
//! table can filter at build time while sentence scoring looks tokens up
//! unfiltered (see [`crate::frequency`]).

use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer producing lowercase word tokens from Unicode word boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `text` into lowercase word tokens, in document order.
    ///
    /// Punctuation-only segments are dropped by the word-boundary rules;
    /// tokens with interior punctuation (e.g. `don't`, `f-16`) survive here
    /// and are handled by [`is_alphanumeric`](Self::is_alphanumeric) at
    /// filtering time.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_lowercase()).collect()
    }

    /// Returns `true` if the token consists entirely of alphanumeric
    /// characters.
    pub fn is_alphanumeric(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(char::is_alphanumeric)
    }
}
