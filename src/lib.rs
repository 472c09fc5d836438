#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Run configuration and the CLI-derived run mode.
pub mod config;
/// Centralized constants used across loading, scoring, and model resolution.
pub mod constants;
/// Benchmark payload types.
pub mod data;
/// Sample file loading.
pub mod dataset;
/// Per-model sample generation with admission control.
pub mod generate;
/// Score aggregation, ranking, and report rendering.
pub mod report;
/// Benchmark orchestration.
pub mod runner;
/// Candidate/reference metrics.
pub mod score;
/// Summarizer interfaces and backends.
pub mod summarizer;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{GenerationConfig, MetricSelection, OutputTarget, RunMode};
pub use data::{BenchReport, GeneratedPair, ModelReport, Sample, ScoreRecord};
pub use errors::{BenchError, SummarizeError};
pub use generate::{generate_pairs, GenerationOutcome};
pub use runner::BenchRunner;
pub use score::{rouge_l_f, sentence_bleu, DegenerateText};
pub use summarizer::{CannedProvider, CannedSummarizer, Summarizer, SummarizerProvider};
#[cfg(feature = "pretrained")]
pub use summarizer::PretrainedProvider;
pub use types::{ModelId, Score};
