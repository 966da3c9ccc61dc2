//! Configuration for model dimensions, weight init, decoding and paths.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use constants::{
    DEFAULT_HIDDEN_SIZE, DEFAULT_INIT_SCALE, DEFAULT_NUM_LAYERS, DEFAULT_SEED,
    DEFAULT_SEQUENCE_LENGTH, DEFAULT_TEMPERATURE, DEFAULT_VOCAB_SIZE, MAX_DIMENSION,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

use crate::generator::DecodePolicy;
use crate::nn::WeightInit;

/// Model dimensions shared by the encoder, decoder and generation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
    /// Number of symbols in the vocabulary (must match the [`Vocabulary`](crate::tokenizer::Vocabulary)).
    pub vocab_size: usize,
    /// Maximum number of decoding steps.
    pub sequence_length: usize,
    /// Hidden size of every layer; also the context vector length.
    pub hidden_size: usize,
    /// Layers per stack (encoder and decoder each).
    pub num_layers: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_VOCAB_SIZE,
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            hidden_size: DEFAULT_HIDDEN_SIZE,
            num_layers: DEFAULT_NUM_LAYERS,
        }
    }
}

impl ModelConfig {
    /// Validates that every dimension is at least 1 and at most 65536.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("vocab_size", self.vocab_size),
            ("sequence_length", self.sequence_length),
            ("hidden_size", self.hidden_size),
            ("num_layers", self.num_layers),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be greater than 0"
                )));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} ({value}) must be at most {MAX_DIMENSION}"
                )));
            }
        }
        Ok(())
    }
}

/// How the next token is chosen from the decoder's distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodingKind {
    /// Highest-probability token.
    #[default]
    Greedy,
    /// Weighted draw with temperature.
    Sample,
}

impl fmt::Display for DecodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecodingKind::Greedy => "greedy",
            DecodingKind::Sample => "sample",
        })
    }
}

impl FromStr for DecodingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "argmax" => Ok(DecodingKind::Greedy),
            "sample" | "sampling" => Ok(DecodingKind::Sample),
            other => Err(format!("unknown decoding {other:?} (expected greedy or sample)")),
        }
    }
}

/// Central configuration for building and running a generator.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Seed for weight init and sampling.
    pub seed: u64,
    /// Model dimensions.
    pub model: ModelConfig,
    /// Weight distribution.
    pub init: WeightInit,
    /// Uniform half-width or normal standard deviation.
    pub init_scale: f64,
    /// Token selection policy.
    pub decoding: DecodingKind,
    /// Sampling temperature (ignored by greedy decoding).
    pub temperature: f64,
    /// Optional file of prompts, one per line.
    pub prompts_path: Option<PathBuf>,
}

impl Default for Config {
    /// Returns default configuration (suitable for tests and fallbacks).
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            model: ModelConfig::default(),
            init: WeightInit::default(),
            init_scale: DEFAULT_INIT_SCALE,
            decoding: DecodingKind::default(),
            temperature: DEFAULT_TEMPERATURE,
            prompts_path: None,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        if !self.init_scale.is_finite() || self.init_scale <= 0.0 {
            return Err(ConfigError::Validation(
                "init_scale must be finite and greater than 0".to_string(),
            ));
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(ConfigError::Validation(
                "temperature must be finite and greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Decoding policy described by this config; sampling is seeded with [`Config::seed`].
    #[must_use]
    pub fn decode_policy(&self) -> DecodePolicy {
        match self.decoding {
            DecodingKind::Greedy => DecodePolicy::Greedy,
            DecodingKind::Sample => DecodePolicy::Sample {
                temperature: self.temperature,
                seed: self.seed,
            },
        }
    }
}
