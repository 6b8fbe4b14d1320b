//! Top-K sentence selection
//!
//! Ranks scored sentences descending by score with ties broken by original
//! position ascending, takes the top K, then restores document order for
//! output. The tie-break fixes a total order so repeated runs on identical
//! input produce identical summaries.

use crate::types::ScoredSentence;

/// Select the top `k` sentences and return them in document order.
///
/// Returns at most `min(k, sentences.len())` entries. Rank order is
/// (score descending, index ascending); output order is index ascending.
pub fn select_top_k(mut sentences: Vec<ScoredSentence>, k: usize) -> Vec<ScoredSentence> {
    sentences.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.sentence.index.cmp(&b.sentence.index))
    });
    sentences.truncate(k);
    sentences.sort_by_key(|s| s.sentence.index);
    sentences
}
