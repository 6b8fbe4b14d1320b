//! Error types for the summarization and sentiment pipeline.
//!
//! All failures surface synchronously to the immediate caller; nothing is
//! recovered inside the core. A caller that wants to distinguish "no
//! sentiment" from "classifier misconfigured" can match on the variant.

use thiserror::Error;

/// Errors produced by the pipeline boundary.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input text was empty or whitespace-only. Summarization requires
    /// at least one sentence; callers must check before invoking.
    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    /// A caller-supplied parameter was outside its valid range. The pipeline
    /// fails fast rather than clamping.
    #[error("invalid parameter `{param}`: {value} ({hint})")]
    InvalidParameter {
        /// Name of the offending parameter.
        param: &'static str,
        /// The value that was rejected, rendered for display.
        value: String,
        /// What the parameter accepts.
        hint: &'static str,
    },

    /// The sentiment lexicon could not be loaded or parsed. Fatal to the
    /// call; there is no fallback scorer.
    #[error("lexicon error: {0}")]
    Lexicon(String),
}

impl PipelineError {
    /// Convenience constructor for [`PipelineError::InvalidParameter`].
    pub fn invalid_parameter(
        param: &'static str,
        value: impl ToString,
        hint: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            param,
            value: value.to_string(),
            hint,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PipelineError>;
