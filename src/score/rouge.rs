//! ROUGE-L F-measure via longest common subsequence.

use crate::types::Score;

use super::{tokenize, DegenerateText};

/// ROUGE-L F1 between a candidate and a reference.
///
/// Precision is `LCS / |candidate|`, recall is `LCS / |reference|`, both over
/// whitespace tokens.
pub fn rouge_l_f(candidate: &str, reference: &str) -> Result<Score, DegenerateText> {
    let cand = tokenize(candidate);
    let refr = tokenize(reference);
    if cand.is_empty() {
        return Err(DegenerateText::EmptyCandidate);
    }
    if refr.is_empty() {
        return Err(DegenerateText::EmptyReference);
    }

    let lcs = lcs_length(&cand, &refr);
    if lcs == 0 {
        return Ok(0.0);
    }
    let precision = lcs as f64 / cand.len() as f64;
    let recall = lcs as f64 / refr.len() as f64;
    Ok(2.0 * precision * recall / (precision + recall))
}

/// Longest common subsequence length over a rolling single-row table.
fn lcs_length(a: &[&str], b: &[&str]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &token_a in a {
        let mut diagonal = 0;
        for (j, &token_b) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if token_a == token_b {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
