/// Model identifier understood by the summarizer provider.
/// Examples: `facebook/bart-large-cnn`, `google/pegasus-xsum`
pub type ModelId = String;
/// Scalar metric value in `[0, 1]`.
/// Examples: `0.0`, `0.4271`, `1.0`
pub type Score = f64;
