//! Sample file loading.
//!
//! The loader reads the fixed-path JSON array once per run and fails fast:
//! IO and parse failures name the file, schema failures name the element
//! index and the missing field.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::constants::dataset::{FIELD_REFERENCE, FIELD_TEXT, SAMPLE_FILE};
use crate::data::Sample;
use crate::errors::BenchError;

/// Load the benchmark samples from the fixed sample file path.
pub fn load_default_samples() -> Result<Vec<Sample>, BenchError> {
    load_samples(Path::new(SAMPLE_FILE))
}

/// Load samples from `path`, preserving file order.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>, BenchError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| BenchError::SampleIo {
        path: display.clone(),
        source,
    })?;
    let entries: Vec<Value> = serde_json::from_str(&raw).map_err(|source| BenchError::Parse {
        path: display.clone(),
        source,
    })?;

    let mut samples = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let text = string_field(entry, FIELD_TEXT).ok_or_else(|| BenchError::Schema {
            path: display.clone(),
            index,
            field: FIELD_TEXT,
        })?;
        let reference = string_field(entry, FIELD_REFERENCE).ok_or_else(|| BenchError::Schema {
            path: display.clone(),
            index,
            field: FIELD_REFERENCE,
        })?;
        samples.push(Sample { text, reference });
    }

    debug!(count = samples.len(), path = %display, "loaded benchmark samples");
    Ok(samples)
}

fn string_field(entry: &Value, field: &str) -> Option<String> {
    entry.get(field).and_then(Value::as_str).map(str::to_string)
}
