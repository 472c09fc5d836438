//! Per-model sample generation with token-length admission control.

use tracing::debug;

use crate::data::{GeneratedPair, Sample};
use crate::errors::BenchError;
use crate::summarizer::Summarizer;

/// Admitted pairs plus the number of over-length skips for one model.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// Generated/reference pairs in sample order.
    pub pairs: Vec<GeneratedPair>,
    /// Samples excluded by the length check.
    pub skipped: usize,
}

/// Run `summarizer` over `samples` in order, producing one pair per admitted
/// sample.
///
/// Samples whose token count exceeds the model's maximum input length are
/// skipped, not errored: admission depends on the model's tokenizer and
/// context window, so the same sample may be admitted for one model and
/// skipped for another. A generation failure aborts with the sample index
/// attached. Progress is printed per sample.
pub fn generate_pairs(
    summarizer: &dyn Summarizer,
    samples: &[Sample],
) -> Result<GenerationOutcome, BenchError> {
    let total = samples.len();
    let limit = summarizer.max_input_tokens();
    let mut pairs = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (index, sample) in samples.iter().enumerate() {
        let tokens = summarizer.token_count(&sample.text);
        if tokens > limit {
            skipped += 1;
            debug!(
                model = summarizer.id(),
                index, tokens, limit, "skipping over-length sample"
            );
            continue;
        }

        let generated = summarizer
            .summarize(&sample.text)
            .map_err(|err| BenchError::Generation {
                model: summarizer.id().to_string(),
                index,
                reason: err.to_string(),
            })?;

        println!("  text      : {}", sample.text);
        println!("  summary   : {generated}");
        println!("  sample    : {} / {}", index + 1, total);

        pairs.push(GeneratedPair {
            sample_index: index,
            generated,
            reference: sample.reference.clone(),
        });
    }

    Ok(GenerationOutcome { pairs, skipped })
}
