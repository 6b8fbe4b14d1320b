//! Sentence segmentation
//!
//! Splits text into sentences on terminal punctuation (`.`, `!`, `?`),
//! tracking byte offsets and document-order indices. Duplicate sentence
//! text yields distinct [`Sentence`] values at distinct positions.

use crate::types::Sentence;

/// Segments text into ordered sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

const TERMINATORS: [char; 3] = ['.', '!', '?'];

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences in document order.
    ///
    /// A sentence ends at a run of terminal punctuation; the punctuation
    /// stays with the sentence. Trailing text without a terminator forms a
    /// final sentence. Whitespace-only fragments are discarded.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut prev_was_terminator = false;

        for (pos, ch) in text.char_indices() {
            let is_terminator = TERMINATORS.contains(&ch);
            // Close the sentence once the terminator run ends.
            if prev_was_terminator && !is_terminator {
                Self::push(text, start, pos, &mut sentences);
                start = pos;
            }
            prev_was_terminator = is_terminator;
        }
        Self::push(text, start, text.len(), &mut sentences);

        sentences
    }

    /// Trim the `[start, end)` slice and append it as a sentence if any
    /// non-whitespace content remains.
    fn push(text: &str, start: usize, end: usize, sentences: &mut Vec<Sentence>) {
        let raw = &text[start..end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let lead = raw.len() - raw.trim_start().len();
        let sent_start = start + lead;
        sentences.push(Sentence {
            text: trimmed.to_string(),
            start: sent_start,
            end: sent_start + trimmed.len(),
            index: sentences.len(),
        });
    }
}
