use std::io;

use thiserror::Error;

use crate::types::ModelId;

/// Error type for sample loading, model resolution, generation, scoring, and
/// reporting failures. Messages name the stage that failed.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("could not read sample file '{path}': {source}")]
    SampleIo {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("sample file '{path}' is not a valid JSON array: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("sample {index} in '{path}' is missing string field '{field}'")]
    Schema {
        path: String,
        index: usize,
        field: &'static str,
    },
    #[error("model '{model}' could not be loaded: {reason}")]
    ModelLoad { model: ModelId, reason: String },
    #[error("generation failed for model '{model}' on sample {index}: {reason}")]
    Generation {
        model: ModelId,
        index: usize,
        reason: String,
    },
    #[error("scoring failed for model '{model}' on sample {index}: {reason}")]
    Scoring {
        model: ModelId,
        index: usize,
        reason: String,
    },
    #[error("writing results to a file is not implemented")]
    FileOutputUnimplemented,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure raised by a summarizer backend for a single input.
///
/// Carries only the backend's reason; callers attach model and sample
/// context when converting into [`BenchError`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SummarizeError(pub String);
