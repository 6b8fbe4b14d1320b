//! Combined pipeline — summarization and sentiment over one input.
//!
//! [`TextPipeline`] holds both components, constructed once at process
//! start with their stopword set and lexicon resolved, then passed by
//! reference into every call. There is no ambient global state; parallel
//! calls over independent inputs need no coordination.

use serde::Serialize;

use crate::error::Result;
use crate::sentiment::SentimentAnalyzer;
use crate::summarizer::{Summarizer, SummarizerConfig};
use crate::types::{SentimentReport, Summary};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Output of a full pipeline run over one text.
#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub summary: Summary,
    pub sentiment: SentimentReport,
}

/// Summarizer and sentiment analyzer behind one initialization step.
#[derive(Debug, Clone, Default)]
pub struct TextPipeline {
    summarizer: Summarizer,
    analyzer: SentimentAnalyzer,
}

impl TextPipeline {
    /// Build a pipeline with default components (3 sentences, English
    /// stopwords, built-in lexicon).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from a summarizer config.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            summarizer: Summarizer::with_config(config),
            analyzer: SentimentAnalyzer::new(),
        }
    }

    /// Replace the summarizer.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Replace the sentiment analyzer.
    pub fn with_analyzer(mut self, analyzer: SentimentAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Borrow the summarizer.
    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Borrow the sentiment analyzer.
    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Summarize and classify `text` in one call.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::PipelineError`] from the summarizer; the
    /// sentiment stage is total and cannot fail.
    pub fn process(&self, text: &str) -> Result<TextReport> {
        let summary = {
            trace_stage!("summarize");
            self.summarizer.summarize(text)?
        };
        let sentiment = {
            trace_stage!("sentiment");
            self.analyzer.analyze(text)
        };
        Ok(TextReport { summary, sentiment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::types::SentimentLabel;

    #[test]
    fn test_process_runs_both_stages() {
        let pipeline = TextPipeline::new();
        let report = pipeline
            .process("I love this library. It is amazing. The docs are wonderful. Truly great.")
            .unwrap();

        assert_eq!(report.summary.len(), 3);
        assert_eq!(report.sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_process_rejects_empty_input() {
        let pipeline = TextPipeline::new();
        let err = pipeline.process(" ").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
    }

    #[test]
    fn test_with_config() {
        let config = SummarizerConfig {
            num_sentences: 1,
            language: "en".to_string(),
        };
        let pipeline = TextPipeline::with_config(config);
        let report = pipeline.process("One sentence. Two sentence.").unwrap();
        assert_eq!(report.summary.len(), 1);
    }

    #[test]
    fn test_report_serializes() {
        let pipeline = TextPipeline::new();
        let report = pipeline.process("Plain words. More plain words.").unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["summary"]["text"].is_string());
        assert_eq!(json["sentiment"]["label"], "neutral");
    }
}
