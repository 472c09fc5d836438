//! Summarizer interfaces and the deterministic canned implementation.
//!
//! Ownership model:
//! - `Summarizer` is the runner-facing handle for one loaded model.
//! - `SummarizerProvider` resolves model identifiers into summarizers, so the
//!   orchestration core never touches the model ecosystem directly.
//! - `CannedSummarizer` is the in-memory implementation used by tests and
//!   model-free builds.

use std::collections::HashMap;

use crate::config::GenerationConfig;
use crate::errors::{BenchError, SummarizeError};
use crate::types::ModelId;

#[cfg(feature = "pretrained")]
pub mod pretrained;
#[cfg(feature = "pretrained")]
pub use pretrained::PretrainedProvider;

/// A loaded summarization model.
///
/// For a fixed input, `summarize` output should be deterministic; beam search
/// with fixed generation parameters satisfies this for pretrained backends.
pub trait Summarizer {
    /// Model identifier this summarizer was resolved from.
    fn id(&self) -> &str;
    /// Maximum input length, in model tokens, the model accepts.
    fn max_input_tokens(&self) -> usize;
    /// Number of model tokens `text` occupies.
    fn token_count(&self, text: &str) -> usize;
    /// Generate a summary of `text` under the configured constraints.
    fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Resolves model identifiers into summarizers.
pub trait SummarizerProvider {
    /// Load the model behind `model`, wiring `config` into its generation.
    fn load(
        &self,
        model: &str,
        config: &GenerationConfig,
    ) -> Result<Box<dyn Summarizer>, BenchError>;
}

/// In-memory summarizer with a fixed text-to-summary table.
///
/// Token counting is whitespace-based, standing in for a model tokenizer.
/// Inputs absent from the table fall back to `fallback` when set and fail
/// otherwise, so tests can exercise both generation paths.
#[derive(Clone, Debug)]
pub struct CannedSummarizer {
    id: ModelId,
    max_input_tokens: usize,
    summaries: HashMap<String, String>,
    fallback: Option<String>,
}

impl CannedSummarizer {
    /// Create a canned summarizer over a fixed text-to-summary table.
    pub fn new(
        id: impl Into<ModelId>,
        max_input_tokens: usize,
        summaries: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            id: id.into(),
            max_input_tokens,
            summaries: summaries.into_iter().collect(),
            fallback: None,
        }
    }

    /// Use `fallback` for inputs absent from the summary table.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

impl Summarizer for CannedSummarizer {
    fn id(&self) -> &str {
        &self.id
    }

    fn max_input_tokens(&self) -> usize {
        self.max_input_tokens
    }

    fn token_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        self.summaries
            .get(text)
            .cloned()
            .or_else(|| self.fallback.clone())
            .ok_or_else(|| SummarizeError("no canned summary for this input".to_string()))
    }
}

/// Provider over a fixed set of canned summarizers.
#[derive(Clone, Debug, Default)]
pub struct CannedProvider {
    models: HashMap<ModelId, CannedSummarizer>,
}

impl CannedProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `summarizer` under its own model identifier.
    pub fn with_model(mut self, summarizer: CannedSummarizer) -> Self {
        self.models.insert(summarizer.id.clone(), summarizer);
        self
    }
}

impl SummarizerProvider for CannedProvider {
    /// Generation parameters are accepted for interface parity; canned
    /// summaries are fixed and ignore them.
    fn load(
        &self,
        model: &str,
        _config: &GenerationConfig,
    ) -> Result<Box<dyn Summarizer>, BenchError> {
        self.models
            .get(model)
            .cloned()
            .map(|summarizer| Box::new(summarizer) as Box<dyn Summarizer>)
            .ok_or_else(|| BenchError::ModelLoad {
                model: model.to_string(),
                reason: "no canned summarizer registered for this identifier".to_string(),
            })
    }
}
