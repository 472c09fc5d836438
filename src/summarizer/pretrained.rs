//! Pretrained backend: hf-hub tokenizer assets plus rust-bert generation.
//!
//! Only parameter wiring lives here. Tokenization assets come from the
//! Hugging Face hub so admission control uses the model's own tokenizer;
//! generation runs through rust-bert's summarization pipeline with the
//! configured beam-search constraints. Identifiers without a packaged
//! rust-bert checkpoint fail to load.

use hf_hub::api::sync::ApiBuilder;
use rust_bert::bart::{
    BartConfigResources, BartMergesResources, BartModelResources, BartVocabResources,
};
use rust_bert::pipelines::common::{ModelResource, ModelType};
use rust_bert::pipelines::summarization::{SummarizationConfig, SummarizationModel};
use rust_bert::resources::RemoteResource;
use tokenizers::Tokenizer;
use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::errors::{BenchError, SummarizeError};
use crate::summarizer::{Summarizer, SummarizerProvider};
use crate::types::ModelId;

/// Summarizer provider backed by packaged rust-bert checkpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct PretrainedProvider;

impl PretrainedProvider {
    /// Create the provider. Models are resolved lazily in [`SummarizerProvider::load`].
    pub fn new() -> Self {
        Self
    }
}

impl SummarizerProvider for PretrainedProvider {
    fn load(
        &self,
        model: &str,
        config: &GenerationConfig,
    ) -> Result<Box<dyn Summarizer>, BenchError> {
        let (mut pipeline_config, max_input_tokens) =
            packaged_checkpoint(model).ok_or_else(|| BenchError::ModelLoad {
                model: model.to_string(),
                reason: "no packaged checkpoint for this identifier".to_string(),
            })?;

        pipeline_config.min_length = config.min_length as i64;
        pipeline_config.max_length = Some(config.max_length as i64);
        pipeline_config.length_penalty = config.length_penalty;
        pipeline_config.num_beams = config.num_beams as i64;

        let tokenizer = fetch_tokenizer(model).map_err(|reason| BenchError::ModelLoad {
            model: model.to_string(),
            reason,
        })?;
        debug!(model, max_input_tokens, "loading summarization pipeline");
        let pipeline = SummarizationModel::new(pipeline_config).map_err(|err| {
            BenchError::ModelLoad {
                model: model.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Box::new(PretrainedSummarizer {
            id: model.to_string(),
            max_input_tokens,
            tokenizer,
            pipeline,
        }))
    }
}

/// One loaded pipeline plus the tokenizer used for admission control.
pub struct PretrainedSummarizer {
    id: ModelId,
    max_input_tokens: usize,
    tokenizer: Tokenizer,
    pipeline: SummarizationModel,
}

impl Summarizer for PretrainedSummarizer {
    fn id(&self) -> &str {
        &self.id
    }

    fn max_input_tokens(&self) -> usize {
        self.max_input_tokens
    }

    fn token_count(&self, text: &str) -> usize {
        match self.tokenizer.encode(text, true) {
            Ok(encoding) => encoding.get_ids().len(),
            // An unencodable input can never be admitted.
            Err(err) => {
                warn!(model = %self.id, error = %err, "tokenizer rejected input");
                usize::MAX
            }
        }
    }

    fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let mut outputs = self
            .pipeline
            .summarize(&[text])
            .map_err(|err| SummarizeError(err.to_string()))?;
        outputs
            .pop()
            .ok_or_else(|| SummarizeError("pipeline returned no output".to_string()))
    }
}

/// Resolve a model identifier into a rust-bert pipeline config and the
/// model's maximum input length in tokens.
fn packaged_checkpoint(model: &str) -> Option<(SummarizationConfig, usize)> {
    match model {
        "facebook/bart-large-cnn" => Some((
            bart_config(
                BartModelResources::BART_CNN,
                BartConfigResources::BART_CNN,
                BartVocabResources::BART_CNN,
                BartMergesResources::BART_CNN,
            ),
            1024,
        )),
        "sshleifer/distilbart-cnn-12-6" => Some((
            bart_config(
                BartModelResources::DISTILBART_CNN_12_6,
                BartConfigResources::DISTILBART_CNN_12_6,
                BartVocabResources::DISTILBART_CNN_12_6,
                BartMergesResources::DISTILBART_CNN_12_6,
            ),
            1024,
        )),
        "sshleifer/distilbart-cnn-6-6" => Some((
            bart_config(
                BartModelResources::DISTILBART_CNN_6_6,
                BartConfigResources::DISTILBART_CNN_6_6,
                BartVocabResources::DISTILBART_CNN_6_6,
                BartMergesResources::DISTILBART_CNN_6_6,
            ),
            1024,
        )),
        _ => None,
    }
}

fn bart_config(
    model: (&'static str, &'static str),
    config: (&'static str, &'static str),
    vocab: (&'static str, &'static str),
    merges: (&'static str, &'static str),
) -> SummarizationConfig {
    SummarizationConfig::new(
        ModelType::Bart,
        ModelResource::Torch(Box::new(RemoteResource::from_pretrained(model))),
        RemoteResource::from_pretrained(config),
        RemoteResource::from_pretrained(vocab),
        Some(RemoteResource::from_pretrained(merges)),
    )
}

fn fetch_tokenizer(model: &str) -> Result<Tokenizer, String> {
    let api = ApiBuilder::new()
        .build()
        .map_err(|err| format!("hub client: {err}"))?;
    let path = api
        .model(model.to_string())
        .get("tokenizer.json")
        .map_err(|err| format!("tokenizer download: {err}"))?;
    Tokenizer::from_file(path).map_err(|err| format!("tokenizer load: {err}"))
}
