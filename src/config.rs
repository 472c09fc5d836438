//! Run configuration: generation parameters and the CLI-derived run mode.

/// Beam-search generation parameters wired into every summarizer adapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Maximum token length of generated summaries.
    pub max_length: usize,
    /// Minimum token length of generated summaries.
    pub min_length: usize,
    /// Exponential penalty applied to longer beam hypotheses.
    pub length_penalty: f64,
    /// Number of beams kept during beam search.
    pub num_beams: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: 50,
            min_length: 1,
            length_penalty: 2.0,
            num_beams: 4,
        }
    }
}

/// Which metrics a run computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricSelection {
    /// Sentence BLEU only.
    BleuOnly,
    /// ROUGE-L only.
    RougeOnly,
    /// Both metrics plus the weighted combined score.
    Both,
}

impl MetricSelection {
    /// Whether BLEU scoring runs in this selection.
    pub fn bleu(self) -> bool {
        matches!(self, MetricSelection::BleuOnly | MetricSelection::Both)
    }

    /// Whether ROUGE-L scoring runs in this selection.
    pub fn rouge(self) -> bool {
        matches!(self, MetricSelection::RougeOnly | MetricSelection::Both)
    }
}

/// Where the final report goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print the report to stdout.
    Console,
    /// Write the report to a file. Reaching the reporter in this mode fails
    /// until a file writer exists.
    File,
}

/// Fully-resolved run mode derived from the CLI flags.
///
/// Replaces flag-name iteration with an explicit decision table: every valid
/// flag combination maps to exactly one `RunMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunMode {
    /// Metrics computed for every generated pair.
    pub metrics: MetricSelection,
    /// Report destination.
    pub output: OutputTarget,
}

impl RunMode {
    /// Resolve raw CLI flags into a run mode.
    ///
    /// `simple` forces both metrics on and console output, overriding any
    /// conflicting explicit flags. Returns `None` when no metric ends up
    /// enabled; callers should exit cleanly rather than treat that as an
    /// error.
    pub fn resolve(
        test_bleu: bool,
        test_rouge: bool,
        output_to_file: bool,
        simple: bool,
    ) -> Option<RunMode> {
        let (bleu, rouge, to_file) = if simple {
            (true, true, false)
        } else {
            (test_bleu, test_rouge, output_to_file)
        };
        let metrics = match (bleu, rouge) {
            (true, true) => MetricSelection::Both,
            (true, false) => MetricSelection::BleuOnly,
            (false, true) => MetricSelection::RougeOnly,
            (false, false) => return None,
        };
        let output = if to_file {
            OutputTarget::File
        } else {
            OutputTarget::Console
        };
        Some(RunMode { metrics, output })
    }
}
