//! Sentence-level BLEU with epsilon smoothing of zero-count precisions.

use std::collections::HashMap;

use crate::constants::scoring::{BLEU_MAX_ORDER, BLEU_SMOOTHING_EPSILON};
use crate::types::Score;

use super::{tokenize, DegenerateText};

/// Sentence BLEU between a candidate and a single reference.
///
/// Uniform weights over n-gram orders `1..=4`, clipped counts, and the
/// standard brevity penalty. An order with zero clipped matches contributes
/// an epsilon count instead, so disjoint texts score near zero rather than
/// exactly zero.
pub fn sentence_bleu(candidate: &str, reference: &str) -> Result<Score, DegenerateText> {
    let cand = tokenize(candidate);
    let refr = tokenize(reference);
    if cand.is_empty() {
        return Err(DegenerateText::EmptyCandidate);
    }
    if refr.is_empty() {
        return Err(DegenerateText::EmptyReference);
    }

    let weight = 1.0 / BLEU_MAX_ORDER as f64;
    let mut log_sum = 0.0;
    for order in 1..=BLEU_MAX_ORDER {
        let (clipped, total) = clipped_matches(&cand, &refr, order);
        // A candidate shorter than `order` has no n-grams; the denominator
        // floor keeps the smoothed precision well-defined.
        let denominator = total.max(1) as f64;
        let numerator = if clipped == 0 {
            BLEU_SMOOTHING_EPSILON
        } else {
            clipped as f64
        };
        log_sum += weight * (numerator / denominator).ln();
    }

    Ok(brevity_penalty(cand.len(), refr.len()) * log_sum.exp())
}

/// Clipped n-gram matches and total candidate n-grams for one order.
fn clipped_matches(candidate: &[&str], reference: &[&str], order: usize) -> (usize, usize) {
    let cand_counts = ngram_counts(candidate, order);
    let ref_counts = ngram_counts(reference, order);
    let total = cand_counts.values().sum();
    let clipped = cand_counts
        .iter()
        .map(|(ngram, count)| (*count).min(ref_counts.get(ngram).copied().unwrap_or(0)))
        .sum();
    (clipped, total)
}

fn ngram_counts<'a>(tokens: &[&'a str], order: usize) -> HashMap<Vec<&'a str>, usize> {
    let mut counts = HashMap::new();
    if tokens.len() >= order {
        for window in tokens.windows(order) {
            *counts.entry(window.to_vec()).or_insert(0) += 1;
        }
    }
    counts
}

fn brevity_penalty(candidate_len: usize, reference_len: usize) -> f64 {
    if candidate_len > reference_len {
        1.0
    } else {
        (1.0 - reference_len as f64 / candidate_len as f64).exp()
    }
}
