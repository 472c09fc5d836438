//! CLI driver for the summarization benchmark.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use sumbench::constants::models::DEFAULT_MODELS;
use sumbench::{
    dataset, report, BenchError, BenchRunner, GenerationConfig, ModelId, RunMode,
};

#[derive(Debug, Parser)]
#[command(
    name = "sumbench",
    disable_help_subcommand = true,
    about = "Benchmark pretrained summarization models with BLEU and ROUGE-L",
    after_help = "Pass --models to benchmark specific identifiers; the default set covers five summarization checkpoints."
)]
struct Cli {
    #[arg(long = "test_bleu", help = "Generate sentence BLEU scores")]
    test_bleu: bool,
    #[arg(long = "test_rouge", help = "Generate ROUGE-L scores")]
    test_rouge: bool,
    #[arg(
        long = "output_to_file",
        help = "Write results to a file instead of the console (not implemented)"
    )]
    output_to_file: bool,
    #[arg(
        long,
        help = "Run all models with both BLEU and ROUGE-L scores on console output"
    )]
    simple: bool,
    #[arg(
        long = "models",
        num_args = 1..,
        value_name = "MODEL",
        help = "Model identifiers to benchmark, in evaluation order"
    )]
    models: Vec<String>,
}

impl Cli {
    fn is_empty(&self) -> bool {
        !self.test_bleu
            && !self.test_rouge
            && !self.output_to_file
            && !self.simple
            && self.models.is_empty()
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();

    if cli.is_empty() {
        let mut command = Cli::command();
        let _ = command.print_help();
        println!();
        return ExitCode::from(1);
    }

    let Some(mode) = RunMode::resolve(cli.test_bleu, cli.test_rouge, cli.output_to_file, cli.simple)
    else {
        println!("None of the scoring metrics are enabled; nothing to do.");
        return ExitCode::SUCCESS;
    };

    let models: Vec<ModelId> = if cli.models.is_empty() {
        DEFAULT_MODELS.iter().map(|id| id.to_string()).collect()
    } else {
        cli.models
    };

    match run(mode, &models) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(mode: RunMode, models: &[ModelId]) -> Result<(), BenchError> {
    let samples = dataset::load_default_samples()?;
    let provider = provider();
    let runner = BenchRunner::new(mode, GenerationConfig::default(), &provider);
    let bench_report = runner.run(models, &samples)?;
    report::emit(&bench_report, mode.output)
}

#[cfg(feature = "pretrained")]
fn provider() -> sumbench::PretrainedProvider {
    sumbench::PretrainedProvider::new()
}

#[cfg(not(feature = "pretrained"))]
fn provider() -> UnbuiltProvider {
    UnbuiltProvider
}

/// Placeholder provider for builds without a model backend.
#[cfg(not(feature = "pretrained"))]
struct UnbuiltProvider;

#[cfg(not(feature = "pretrained"))]
impl sumbench::SummarizerProvider for UnbuiltProvider {
    fn load(
        &self,
        model: &str,
        _config: &GenerationConfig,
    ) -> Result<Box<dyn sumbench::Summarizer>, BenchError> {
        Err(BenchError::ModelLoad {
            model: model.to_string(),
            reason: "this binary was built without the 'pretrained' feature".to_string(),
        })
    }
}
