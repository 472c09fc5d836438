//! Candidate/reference scoring.
//!
//! Both metrics operate on whitespace-tokenized text and return scores in
//! `[0, 1]`. Text without any tokens cannot be scored meaningfully, so both
//! metrics reject it with [`DegenerateText`]; the runner turns that into a
//! run-aborting scoring failure.

use std::fmt;

mod bleu;
mod rouge;

pub use bleu::sentence_bleu;
pub use rouge::rouge_l_f;

/// Reason a candidate/reference pair could not be scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegenerateText {
    /// The candidate contained no whitespace tokens.
    EmptyCandidate,
    /// The reference contained no whitespace tokens.
    EmptyReference,
}

impl fmt::Display for DegenerateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateText::EmptyCandidate => write!(f, "candidate text has no tokens"),
            DegenerateText::EmptyReference => write!(f, "reference text has no tokens"),
        }
    }
}

/// Tokenize on Unicode whitespace, the shared unit for both metrics.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
