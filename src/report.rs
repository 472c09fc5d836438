//! Score aggregation, ranking, and console report rendering.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::config::{MetricSelection, OutputTarget};
use crate::constants::scoring::{BLEU_WEIGHT, ROUGE_WEIGHT};
use crate::data::{BenchReport, ModelReport, ScoreRecord};
use crate::errors::BenchError;
use crate::types::Score;

/// Arithmetic mean, zero for an empty sequence.
///
/// An empty sequence means every sample was over-length for that model; the
/// report carries that as a zero mean with an explanatory line instead of
/// aborting the aggregate.
pub fn mean(values: &[Score]) -> Score {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<Score>() / values.len() as f64
    }
}

/// Blend aligned BLEU and ROUGE sequences into combined scores.
pub fn combine(bleu: &[Score], rouge: &[Score]) -> Vec<Score> {
    debug_assert_eq!(bleu.len(), rouge.len());
    rouge
        .iter()
        .zip(bleu)
        .map(|(rouge, bleu)| rouge * ROUGE_WEIGHT + bleu * BLEU_WEIGHT)
        .collect()
}

/// Order model reports descending by the ranking metric's mean.
///
/// Ranking uses the combined mean when both metrics ran, otherwise the mean
/// of the single enabled metric. The sort is stable, so ties keep the input
/// model order.
pub fn rank(models: &mut [ModelReport], metrics: MetricSelection) {
    models.sort_by(|a, b| {
        ranking_mean(&b.scores, metrics)
            .partial_cmp(&ranking_mean(&a.scores, metrics))
            .unwrap_or(Ordering::Equal)
    });
}

fn ranking_mean(scores: &ScoreRecord, metrics: MetricSelection) -> Score {
    match metrics {
        MetricSelection::Both => mean(&scores.combined),
        MetricSelection::BleuOnly => mean(&scores.bleu),
        MetricSelection::RougeOnly => mean(&scores.rouge),
    }
}

/// Emit the report to the selected output target.
pub fn emit(report: &BenchReport, output: OutputTarget) -> Result<(), BenchError> {
    match output {
        OutputTarget::Console => {
            print!("{}", render_report(report));
            Ok(())
        }
        OutputTarget::File => Err(BenchError::FileOutputUnimplemented),
    }
}

/// Render the full ranked report.
pub fn render_report(report: &BenchReport) -> String {
    let mut out = String::new();
    for model in &report.models {
        out.push_str(&render_model(model, report.metrics));
    }
    out
}

/// Render one model's per-sample table and column means.
pub fn render_model(model: &ModelReport, metrics: MetricSelection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{} scores:", model.model);
    if model.skipped > 0 {
        let _ = writeln!(out, "(skipped {} over-length samples)", model.skipped);
    }
    if model.admitted == 0 {
        let _ = writeln!(out, "no samples admitted within the model's input length");
        return out;
    }

    let scores = &model.scores;
    match metrics {
        MetricSelection::Both => {
            let _ = writeln!(out, "ID | BLEU | ROUGE | Combined Score");
            for (index, ((bleu, rouge), combined)) in scores
                .bleu
                .iter()
                .zip(&scores.rouge)
                .zip(&scores.combined)
                .enumerate()
            {
                let _ = writeln!(out, "{index} | {bleu:.6} | {rouge:.6} | {combined:.6}");
            }
            let _ = writeln!(out, "\nAverage bleu: {:.6}", mean(&scores.bleu));
            let _ = writeln!(out, "Average rouge: {:.6}", mean(&scores.rouge));
            let _ = writeln!(out, "Average combined score: {:.6}", mean(&scores.combined));
        }
        MetricSelection::BleuOnly => {
            let _ = writeln!(out, "ID | BLEU");
            for (index, bleu) in scores.bleu.iter().enumerate() {
                let _ = writeln!(out, "{index} | {bleu:.6}");
            }
            let _ = writeln!(out, "\nAverage bleu: {:.6}", mean(&scores.bleu));
        }
        MetricSelection::RougeOnly => {
            let _ = writeln!(out, "ID | ROUGE");
            for (index, rouge) in scores.rouge.iter().enumerate() {
                let _ = writeln!(out, "{index} | {rouge:.6}");
            }
            let _ = writeln!(out, "\nAverage rouge: {:.6}", mean(&scores.rouge));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModelId;

    fn model_report(model: &str, bleu: Vec<Score>, rouge: Vec<Score>) -> ModelReport {
        let combined = combine(&bleu, &rouge);
        let admitted = bleu.len();
        ModelReport {
            model: ModelId::from(model),
            admitted,
            skipped: 0,
            scores: ScoreRecord {
                bleu,
                rouge,
                combined,
            },
        }
    }

    #[test]
    fn mean_of_empty_sequence_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[0.25, 0.75]), 0.5);
    }

    #[test]
    fn combine_applies_exact_weights() {
        let combined = combine(&[0.5, 1.0], &[1.0, 0.0]);
        assert_eq!(combined, vec![1.0 * 0.6 + 0.5 * 0.4, 0.0 * 0.6 + 1.0 * 0.4]);
    }

    #[test]
    fn rank_orders_descending_by_combined_mean() {
        let mut models = vec![
            model_report("low", vec![0.1, 0.1], vec![0.1, 0.1]),
            model_report("high", vec![0.9, 0.9], vec![0.9, 0.9]),
            model_report("mid", vec![0.5, 0.5], vec![0.5, 0.5]),
        ];
        rank(&mut models, MetricSelection::Both);
        let order: Vec<&str> = models.iter().map(|m| m.model.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn rank_breaks_ties_by_input_order() {
        let mut models = vec![
            model_report("first", vec![0.5], vec![0.5]),
            model_report("second", vec![0.5], vec![0.5]),
            model_report("third", vec![0.5], vec![0.5]),
        ];
        rank(&mut models, MetricSelection::Both);
        let order: Vec<&str> = models.iter().map(|m| m.model.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn single_metric_runs_rank_by_that_metric() {
        let mut models = vec![
            ModelReport {
                model: "bleu-low".into(),
                admitted: 1,
                skipped: 0,
                scores: ScoreRecord {
                    bleu: vec![0.2],
                    rouge: Vec::new(),
                    combined: Vec::new(),
                },
            },
            ModelReport {
                model: "bleu-high".into(),
                admitted: 1,
                skipped: 0,
                scores: ScoreRecord {
                    bleu: vec![0.8],
                    rouge: Vec::new(),
                    combined: Vec::new(),
                },
            },
        ];
        rank(&mut models, MetricSelection::BleuOnly);
        assert_eq!(models[0].model, "bleu-high");
    }

    #[test]
    fn render_both_metrics_includes_combined_column() {
        let rendered = render_model(
            &model_report("stub/model", vec![0.5], vec![1.0]),
            MetricSelection::Both,
        );
        assert!(rendered.contains("stub/model scores:"));
        assert!(rendered.contains("ID | BLEU | ROUGE | Combined Score"));
        assert!(rendered.contains("0 | 0.500000 | 1.000000 | 0.800000"));
        assert!(rendered.contains("Average combined score: 0.800000"));
    }

    #[test]
    fn render_single_metric_omits_combined_column() {
        let report = ModelReport {
            model: "stub/model".into(),
            admitted: 1,
            skipped: 0,
            scores: ScoreRecord {
                bleu: Vec::new(),
                rouge: vec![0.75],
                combined: Vec::new(),
            },
        };
        let rendered = render_model(&report, MetricSelection::RougeOnly);
        assert!(rendered.contains("ID | ROUGE"));
        assert!(!rendered.contains("Combined"));
        assert!(rendered.contains("Average rouge: 0.750000"));
    }

    #[test]
    fn render_notes_empty_admission() {
        let report = ModelReport {
            model: "stub/narrow".into(),
            admitted: 0,
            skipped: 3,
            scores: ScoreRecord::default(),
        };
        let rendered = render_model(&report, MetricSelection::Both);
        assert!(rendered.contains("skipped 3 over-length samples"));
        assert!(rendered.contains("no samples admitted"));
    }

    #[test]
    fn file_output_is_unimplemented() {
        let report = BenchReport {
            metrics: MetricSelection::Both,
            models: Vec::new(),
        };
        let err = emit(&report, OutputTarget::File).unwrap_err();
        assert!(matches!(err, BenchError::FileOutputUnimplemented));
    }
}
