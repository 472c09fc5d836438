//! Benchmark orchestration.
//!
//! One model is fully processed (generation, then scoring) before the next
//! begins; the run is strictly sequential and any load, generation, or
//! scoring failure aborts it.

use tracing::info;

use crate::config::{GenerationConfig, MetricSelection, RunMode};
use crate::data::{BenchReport, ModelReport, Sample, ScoreRecord};
use crate::errors::BenchError;
use crate::generate::generate_pairs;
use crate::report;
use crate::score::{rouge_l_f, sentence_bleu};
use crate::summarizer::SummarizerProvider;
use crate::types::ModelId;

/// Drives the benchmark: loads each model, generates, scores, and ranks.
pub struct BenchRunner<'a, P: SummarizerProvider> {
    mode: RunMode,
    generation: GenerationConfig,
    provider: &'a P,
}

impl<'a, P: SummarizerProvider> BenchRunner<'a, P> {
    /// Create a runner for `mode` with `generation` parameters and a model
    /// provider.
    pub fn new(mode: RunMode, generation: GenerationConfig, provider: &'a P) -> Self {
        Self {
            mode,
            generation,
            provider,
        }
    }

    /// Benchmark `models` against `samples`, returning ranked model reports.
    pub fn run(&self, models: &[ModelId], samples: &[Sample]) -> Result<BenchReport, BenchError> {
        let mut reports = Vec::with_capacity(models.len());

        for model in models {
            println!("Generating samples for model: {model}");
            let summarizer = self.provider.load(model, &self.generation)?;
            let outcome = generate_pairs(summarizer.as_ref(), samples)?;

            let mut scores = ScoreRecord::default();
            if self.mode.metrics.bleu() {
                println!("Generating BLEU scores for model: {model}");
                for (position, pair) in outcome.pairs.iter().enumerate() {
                    let score = sentence_bleu(&pair.generated, &pair.reference).map_err(|err| {
                        BenchError::Scoring {
                            model: model.clone(),
                            index: pair.sample_index,
                            reason: err.to_string(),
                        }
                    })?;
                    println!("  sample    : {} / {}", position + 1, outcome.pairs.len());
                    scores.bleu.push(score);
                }
            }
            if self.mode.metrics.rouge() {
                println!("Generating ROUGE scores for model: {model}");
                for (position, pair) in outcome.pairs.iter().enumerate() {
                    let score = rouge_l_f(&pair.generated, &pair.reference).map_err(|err| {
                        BenchError::Scoring {
                            model: model.clone(),
                            index: pair.sample_index,
                            reason: err.to_string(),
                        }
                    })?;
                    println!("  sample    : {} / {}", position + 1, outcome.pairs.len());
                    scores.rouge.push(score);
                }
            }
            if self.mode.metrics == MetricSelection::Both {
                scores.combined = report::combine(&scores.bleu, &scores.rouge);
            }

            info!(
                model = %model,
                admitted = outcome.pairs.len(),
                skipped = outcome.skipped,
                "model scored"
            );
            reports.push(ModelReport {
                model: model.clone(),
                admitted: outcome.pairs.len(),
                skipped: outcome.skipped,
                scores,
            });
        }

        println!();
        println!("=== finished generating samples and evaluation scores ===");

        report::rank(&mut reports, self.mode.metrics);
        Ok(BenchReport {
            metrics: self.mode.metrics,
            models: reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputTarget;
    use crate::summarizer::{CannedProvider, CannedSummarizer};

    fn sample(text: &str, reference: &str) -> Sample {
        Sample {
            text: text.to_string(),
            reference: reference.to_string(),
        }
    }

    fn both_mode() -> RunMode {
        RunMode {
            metrics: MetricSelection::Both,
            output: OutputTarget::Console,
        }
    }

    #[test]
    fn score_sequences_stay_aligned() {
        let samples = vec![
            sample("first document body", "first summary"),
            sample("second document body", "second summary"),
        ];
        let provider = CannedProvider::new()
            .with_model(CannedSummarizer::new("stub/a", 32, []).with_fallback("a summary"));
        let runner = BenchRunner::new(both_mode(), GenerationConfig::default(), &provider);
        let report = runner
            .run(&["stub/a".to_string()], &samples)
            .expect("run succeeds");

        let scores = &report.models[0].scores;
        assert_eq!(scores.bleu.len(), 2);
        assert_eq!(scores.rouge.len(), 2);
        assert_eq!(scores.combined.len(), 2);
        for index in 0..2 {
            let expected = scores.rouge[index] * 0.6 + scores.bleu[index] * 0.4;
            assert_eq!(scores.combined[index], expected);
        }
    }

    #[test]
    fn unknown_model_aborts_the_run() {
        let provider = CannedProvider::new();
        let runner = BenchRunner::new(both_mode(), GenerationConfig::default(), &provider);
        let err = runner
            .run(&["stub/missing".to_string()], &[sample("text", "ref")])
            .unwrap_err();
        assert!(matches!(err, BenchError::ModelLoad { .. }), "got {err:?}");
    }

    #[test]
    fn empty_generated_summary_is_a_scoring_failure() {
        let samples = vec![sample("document body", "reference summary")];
        let provider = CannedProvider::new()
            .with_model(CannedSummarizer::new("stub/empty", 32, []).with_fallback(""));
        let runner = BenchRunner::new(both_mode(), GenerationConfig::default(), &provider);
        let err = runner.run(&["stub/empty".to_string()], &samples).unwrap_err();
        match err {
            BenchError::Scoring { model, index, .. } => {
                assert_eq!(model, "stub/empty");
                assert_eq!(index, 0);
            }
            other => panic!("expected scoring failure, got {other:?}"),
        }
    }
}
