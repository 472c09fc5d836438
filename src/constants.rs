/// Constants used by the sample data loader.
pub mod dataset {
    /// Fixed path of the benchmark sample file, relative to the working directory.
    pub const SAMPLE_FILE: &str = "samples/data_prefixes.json";
    /// JSON field holding the source document text.
    pub const FIELD_TEXT: &str = "text";
    /// JSON field holding the reference summary.
    pub const FIELD_REFERENCE: &str = "reference";
}

/// Constants used by metric computation and score blending.
pub mod scoring {
    /// Weight of ROUGE-L in the combined score.
    pub const ROUGE_WEIGHT: f64 = 0.6;
    /// Weight of BLEU in the combined score.
    pub const BLEU_WEIGHT: f64 = 0.4;
    /// Highest n-gram order used by sentence BLEU.
    pub const BLEU_MAX_ORDER: usize = 4;
    /// Count substituted for zero clipped n-gram matches so precisions stay nonzero.
    pub const BLEU_SMOOTHING_EPSILON: f64 = 0.1;
}

/// Constants used by model resolution in the CLI driver.
pub mod models {
    /// Models benchmarked when `--models` is not given.
    pub const DEFAULT_MODELS: [&str; 5] = [
        "facebook/bart-large-cnn",
        "google/pegasus-xsum",
        "knkarthick/MEETING-SUMMARY-BART-LARGE-XSUM-SAMSUM-DIALOGSUM-AMI",
        "sshleifer/distilbart-cnn-12-6",
        "slauw87/bart_summarisation",
    ];
}
