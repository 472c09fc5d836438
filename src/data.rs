use serde::{Deserialize, Serialize};

use crate::config::MetricSelection;
use crate::types::{ModelId, Score};

/// One benchmark input: a source document and its reference summary.
///
/// Samples are immutable once loaded; their position in the sample file is
/// their identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
    /// Source document handed to the summarizer.
    pub text: String,
    /// Target summary the generated text is scored against.
    pub reference: String,
}

/// A generated summary paired with the reference it is scored against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPair {
    /// Index of the originating sample in file order.
    pub sample_index: usize,
    /// Model-generated summary text.
    pub generated: String,
    /// Reference summary text.
    pub reference: String,
}

/// Per-model score sequences aligned with the admitted sample order.
///
/// When both metrics are enabled, `bleu`, `rouge`, and `combined` have equal
/// lengths; a disabled metric leaves its sequence empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreRecord {
    /// Sentence BLEU per admitted sample.
    pub bleu: Vec<Score>,
    /// ROUGE-L F per admitted sample.
    pub rouge: Vec<Score>,
    /// Weighted blend per admitted sample (only when both metrics ran).
    pub combined: Vec<Score>,
}

/// One model's results as handed to the reporter.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelReport {
    /// Model identifier this report belongs to.
    pub model: ModelId,
    /// Number of samples admitted by the length check.
    pub admitted: usize,
    /// Number of samples skipped as over-length for this model.
    pub skipped: usize,
    /// Aligned score sequences for the admitted samples.
    pub scores: ScoreRecord,
}

/// Full benchmark output: model reports in ranked order.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchReport {
    /// Metrics that were computed for this run.
    pub metrics: MetricSelection,
    /// Model reports, ordered descending by the ranking metric's mean.
    pub models: Vec<ModelReport>,
}
