//! Stopword filtering
//!
//! Wraps the `stop-words` crate behind a language-tag front end, with
//! support for custom lists. The frequency table excludes stopwords at
//! build time; scoring never consults this filter again.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of words excluded from frequency scoring.
///
/// Matching is case-insensitive; the set stores lowercase words and the
/// tokenizer already lowercases its output.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language tag.
    ///
    /// Recognized tags: en, de, fr, es, it, pt, nl, ru, sv. Unknown tags
    /// fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => LANGUAGE::English,
        };
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Create an empty filter (no words excluded).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter.
    pub fn add(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check whether a word is excluded.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Returns `true` if the filter excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("are"));
        assert!(filter.is_stopword("i"));
        assert!(!filter.is_stopword("pizza"));
        assert!(!filter.is_stopword("summarization"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("xx");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_custom_list() {
        let mut filter = StopwordFilter::from_list(&["foo", "BAR"]);

        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("bar"));
        assert!(!filter.is_stopword("the"));

        filter.add(&["baz"]);
        assert!(filter.is_stopword("baz"));

        filter.remove(&["foo"]);
        assert!(!filter.is_stopword("foo"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");
        assert!(filter.is_stopword("und"));
        assert!(filter.is_stopword("der"));
        assert!(!filter.is_stopword("maschine"));
    }
}
