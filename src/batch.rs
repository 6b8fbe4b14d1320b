//! Parallel batch helpers
//!
//! Each pipeline call is stateless, so independent inputs can be processed
//! in parallel without coordination. These helpers fan a batch out over
//! rayon's thread pool and return results in input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::pipeline::{TextPipeline, TextReport};
use crate::sentiment::SentimentAnalyzer;
use crate::summarizer::Summarizer;
use crate::types::{SentimentLabel, Summary};

/// Summarize every text in `texts` in parallel.
///
/// Results are positionally aligned with the input; a failing input yields
/// its own `Err` without affecting the others.
pub fn summarize_batch<S: AsRef<str> + Sync>(
    summarizer: &Summarizer,
    texts: &[S],
) -> Vec<Result<Summary>> {
    texts
        .par_iter()
        .map(|text| summarizer.summarize(text.as_ref()))
        .collect()
}

/// Classify every text in `texts` in parallel.
pub fn classify_batch<S: AsRef<str> + Sync>(
    analyzer: &SentimentAnalyzer,
    texts: &[S],
) -> Vec<SentimentLabel> {
    texts
        .par_iter()
        .map(|text| analyzer.classify(text.as_ref()))
        .collect()
}

/// Run the full pipeline over every text in `texts` in parallel.
pub fn process_batch<S: AsRef<str> + Sync>(
    pipeline: &TextPipeline,
    texts: &[S],
) -> Vec<Result<TextReport>> {
    texts
        .par_iter()
        .map(|text| pipeline.process(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn test_summarize_batch_preserves_input_order() {
        let summarizer = Summarizer::new().with_num_sentences(1);
        let texts = ["First one. Filler.", "Second one. Filler."];
        let results = summarize_batch(&summarizer, &texts);

        assert_eq!(results.len(), 2);
        assert!(results[0].as_ref().unwrap().text.contains("First"));
        assert!(results[1].as_ref().unwrap().text.contains("Second"));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let summarizer = Summarizer::new();
        let texts = ["Fine text here.", "   "];
        let results = summarize_batch(&summarizer, &texts);

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn test_classify_batch() {
        let analyzer = SentimentAnalyzer::new();
        let texts = ["I love this!", "I hate this.", "A table."];
        let labels = classify_batch(&analyzer, &texts);

        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
    }

    #[test]
    fn test_batch_matches_sequential() {
        let summarizer = Summarizer::new().with_num_sentences(2);
        let text = "Cats are great. Dogs are great too. I love pizza.";
        let batch = summarize_batch(&summarizer, &[text]);
        let single = summarizer.summarize(text).unwrap();

        assert_eq!(batch[0].as_ref().unwrap().text, single.text);
    }

    #[test]
    fn test_process_batch() {
        let pipeline = TextPipeline::new();
        let texts = ["Nice friendly words here. More of them."];
        let results = process_batch(&pipeline, &texts);
        assert!(results[0].is_ok());
    }
}
