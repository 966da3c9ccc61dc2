//! # charseq
//!
//! Generates text from prompts with an untrained, seeded encoder/decoder model.
//! Configuration comes from `CHARSEQ_*` environment variables; command-line flags override them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use charseq_core::config::{from_env, DecodingKind};
use charseq_core::data::load_prompts;
use charseq_core::nn::WeightInit;
use charseq_core::{Config, Generator};

/// Command-line arguments. Unset flags keep the value from the environment or the default.
#[derive(Parser, Debug)]
#[command(
    name = "charseq",
    version,
    about = "Generate text from prompts with a randomly initialized encoder/decoder."
)]
struct Cli {
    /// Prompts to generate from. Combined with `--prompts-file` when both are given.
    prompts: Vec<String>,

    /// File with one prompt per line (blank lines and `#` comments are skipped).
    #[arg(long)]
    prompts_file: Option<PathBuf>,

    /// Seed for weight init and sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of generated characters.
    #[arg(long)]
    sequence_length: Option<usize>,

    /// Hidden size of every layer.
    #[arg(long)]
    hidden_size: Option<usize>,

    /// Layers per encoder and decoder stack.
    #[arg(long)]
    num_layers: Option<usize>,

    /// Weight distribution: `uniform` or `normal`.
    #[arg(long)]
    init: Option<WeightInit>,

    /// Uniform half-width or normal standard deviation.
    #[arg(long)]
    init_scale: Option<f64>,

    /// Token selection: `greedy` or `sample`.
    #[arg(long)]
    decoding: Option<DecodingKind>,

    /// Sampling temperature.
    #[arg(long)]
    temperature: Option<f64>,
}

impl Cli {
    /// Applies flags on top of `config`.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(n) = self.sequence_length {
            config.model.sequence_length = n;
        }
        if let Some(n) = self.hidden_size {
            config.model.hidden_size = n;
        }
        if let Some(n) = self.num_layers {
            config.model.num_layers = n;
        }
        if let Some(init) = self.init {
            config.init = init;
        }
        if let Some(scale) = self.init_scale {
            config.init_scale = scale;
        }
        if let Some(decoding) = self.decoding {
            config.decoding = decoding;
        }
        if let Some(t) = self.temperature {
            config.temperature = t;
        }
        if let Some(path) = &self.prompts_file {
            config.prompts_path = Some(path.clone());
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("charseq=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(from_env().context("reading CHARSEQ_* environment")?);
    config.validate()?;

    let mut prompts = cli.prompts.clone();
    if let Some(path) = &config.prompts_path {
        let loaded = load_prompts(path)
            .with_context(|| format!("loading prompts from {}", path.display()))?;
        prompts.extend(loaded.lines().into_iter().map(str::to_string));
    }
    if prompts.is_empty() {
        prompts.push(String::new());
    }

    let generator = Generator::from_config(&config)?;
    info!(
        seed = config.seed,
        hidden_size = config.model.hidden_size,
        num_layers = config.model.num_layers,
        decoding = %config.decoding,
        prompts = prompts.len(),
        "generator built"
    );

    for (i, prompt) in prompts.iter().enumerate() {
        let out = generator.generate_detailed(prompt)?;
        println!("sample {:2}: {:?} -> {:?} ({})", i + 1, prompt, out.text, out.stop);
    }
    Ok(())
}
