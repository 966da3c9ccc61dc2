//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key names
//! (see the `constants` submodule) and typed errors ([`ConfigError`]).

use std::path::PathBuf;

use super::constants::{
    ENV_DECODING, ENV_HIDDEN_SIZE, ENV_INIT, ENV_INIT_SCALE, ENV_NUM_LAYERS, ENV_PREFIX,
    ENV_PROMPTS_PATH, ENV_SEED, ENV_SEQUENCE_LENGTH, ENV_TEMPERATURE,
};
use super::{Config, ConfigError, DecodingKind, ModelConfig};
use crate::nn::WeightInit;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `CHARSEQ_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but invalid (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `CHARSEQ_SEED=abc`).
/// The vocabulary size is not read from the environment; it follows the default vocabulary.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let sequence_length = env_parsed::<usize>(&env_key(ENV_SEQUENCE_LENGTH))?
        .unwrap_or(default.model.sequence_length);
    let hidden_size =
        env_parsed::<usize>(&env_key(ENV_HIDDEN_SIZE))?.unwrap_or(default.model.hidden_size);
    let num_layers =
        env_parsed::<usize>(&env_key(ENV_NUM_LAYERS))?.unwrap_or(default.model.num_layers);
    let init = env_parsed::<WeightInit>(&env_key(ENV_INIT))?.unwrap_or(default.init);
    let init_scale = env_parsed::<f64>(&env_key(ENV_INIT_SCALE))?.unwrap_or(default.init_scale);
    let decoding =
        env_parsed::<DecodingKind>(&env_key(ENV_DECODING))?.unwrap_or(default.decoding);
    let temperature =
        env_parsed::<f64>(&env_key(ENV_TEMPERATURE))?.unwrap_or(default.temperature);
    let prompts_path = env_string(&env_key(ENV_PROMPTS_PATH))?
        .map(PathBuf::from)
        .or(default.prompts_path);

    Ok(Config {
        seed,
        model: ModelConfig {
            sequence_length,
            hidden_size,
            num_layers,
            ..default.model
        },
        init,
        init_scale,
        decoding,
        temperature,
        prompts_path,
    })
}
