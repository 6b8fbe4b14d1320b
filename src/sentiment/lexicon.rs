//! Polarity lexicon and compound scoring
//!
//! Lexicon-based scorer in the VADER family: each word carries a valence in
//! roughly [-4, 4]; a negator within the three preceding tokens flips and
//! damps the valence; the summed valence is normalized into [-1, 1] with
//! `sum / sqrt(sum^2 + 15)`.

use rustc_hash::FxHashMap;

use crate::error::{PipelineError, Result};
use crate::nlp::WordTokenizer;

/// Normalization constant for the compound score (VADER's alpha).
const ALPHA: f64 = 15.0;

/// Valence multiplier applied when a word is negated.
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens are checked for a negator.
const NEGATION_WINDOW: usize = 3;

// Contractions keep their apostrophe: the tokenizer treats it as
// word-internal, so "don't" arrives as a single token.
const NEGATORS: [&str; 17] = [
    "not",
    "no",
    "never",
    "none",
    "neither",
    "nor",
    "cannot",
    "without",
    "don't",
    "won't",
    "isn't",
    "wasn't",
    "doesn't",
    "didn't",
    "can't",
    "couldn't",
    "shouldn't",
];

/// Word-valence lexicon with compound scoring.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    valences: FxHashMap<String, f64>,
    tokenizer: WordTokenizer,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon {
    /// Create a lexicon with the built-in English valence table.
    pub fn new() -> Self {
        Self {
            valences: Self::default_valences(),
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Create a lexicon from explicit `(word, valence)` entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            valences: entries
                .into_iter()
                .map(|(w, v)| (w.to_lowercase(), v))
                .collect(),
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Parse a lexicon in the tab-separated `word<TAB>valence` format.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Lexicon`] if a line is malformed or the result is
    /// empty. A misconfigured lexicon is fatal; there is no fallback.
    pub fn from_tsv(data: &str) -> Result<Self> {
        let mut valences = FxHashMap::default();
        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '\t');
            let word = parts
                .next()
                .filter(|w| !w.is_empty())
                .ok_or_else(|| PipelineError::Lexicon(format!("line {}: missing word", lineno + 1)))?;
            let valence: f64 = parts
                .next()
                .ok_or_else(|| {
                    PipelineError::Lexicon(format!("line {}: missing valence", lineno + 1))
                })?
                .trim()
                .parse()
                .map_err(|e| PipelineError::Lexicon(format!("line {}: {e}", lineno + 1)))?;
            valences.insert(word.to_lowercase(), valence);
        }
        if valences.is_empty() {
            return Err(PipelineError::Lexicon("lexicon has no entries".to_string()));
        }
        Ok(Self {
            valences,
            tokenizer: WordTokenizer::new(),
        })
    }

    /// Number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Returns `true` if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Compound polarity of `text` in [-1, 1].
    ///
    /// Total over all inputs; empty or fully out-of-lexicon text scores 0.
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = self.tokenizer.tokenize(text);
        let mut total = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            let negated = tokens[window_start..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));
            total += if negated {
                valence * NEGATION_SCALAR
            } else {
                valence
            };
        }

        if total == 0.0 {
            return 0.0;
        }
        total / (total * total + ALPHA).sqrt()
    }

    /// Built-in valence table covering common English polarity words.
    fn default_valences() -> FxHashMap<String, f64> {
        let entries: [(&str, f64); 64] = [
            // Strong positive
            ("love", 3.2),
            ("loved", 2.9),
            ("loves", 2.7),
            ("amazing", 2.8),
            ("wonderful", 2.7),
            ("excellent", 2.7),
            ("fantastic", 2.6),
            ("outstanding", 2.6),
            ("brilliant", 2.8),
            ("perfect", 2.7),
            ("superb", 2.9),
            ("best", 3.2),
            ("awesome", 3.1),
            ("delighted", 2.6),
            ("thrilled", 2.7),
            // Moderate positive
            ("good", 1.9),
            ("great", 3.1),
            ("nice", 1.8),
            ("happy", 2.7),
            ("glad", 2.0),
            ("pleased", 1.9),
            ("enjoy", 1.9),
            ("enjoyed", 2.3),
            ("like", 1.5),
            ("likes", 1.6),
            ("better", 1.9),
            ("beautiful", 2.9),
            ("positive", 2.3),
            ("fun", 2.3),
            ("helpful", 1.8),
            ("impressive", 2.3),
            ("recommend", 1.6),
            ("win", 2.8),
            ("works", 1.4),
            // Strong negative
            ("hate", -2.7),
            ("hated", -3.2),
            ("hates", -2.5),
            ("terrible", -2.1),
            ("horrible", -2.5),
            ("awful", -2.0),
            ("worst", -3.1),
            ("disgusting", -2.4),
            ("dreadful", -2.6),
            ("atrocious", -2.8),
            ("appalling", -2.3),
            ("furious", -2.6),
            // Moderate negative
            ("bad", -2.5),
            ("poor", -2.1),
            ("sad", -2.1),
            ("angry", -2.3),
            ("annoying", -1.8),
            ("broken", -1.6),
            ("disappointed", -2.1),
            ("disappointing", -2.2),
            ("fail", -2.3),
            ("failed", -2.2),
            ("failure", -2.4),
            ("negative", -2.0),
            ("problem", -1.5),
            ("ugly", -2.3),
            ("useless", -1.9),
            ("waste", -1.8),
            ("worse", -2.4),
            ("wrong", -1.9),
        ];
        entries
            .iter()
            .map(|&(w, v)| (w.to_string(), v))
            .collect()
    }
}
