//! Configuration errors.
//!
//! All errors produced by the config module (validation and env loading) use [`ConfigError`].
//! Callers can match on variants to handle specific cases or use [`ConfigError::message`] for logging.

use thiserror::Error;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: Configuration values are inconsistent or out of range (e.g. `num_layers == 0`,
///   or `vocab_size` not matching the vocabulary).
///   *When*: [`Config::validate`](super::Config::validate), [`ModelConfig::validate`](super::ModelConfig::validate)
///   and generator construction.
///   *Recovery*: Fix the values (via env, CLI or code); the message names the rule that failed.
///
/// - **EnvVar**: An environment variable could not be read (e.g. invalid Unicode).
///   *When*: When using env helpers to read a key.
///
/// - **Parse**: An environment variable was set but could not be parsed into the expected type
///   (e.g. `CHARSEQ_SEED=abc`).
///   *Recovery*: Set the variable to a valid value or unset it to use the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration validation failed (e.g. invalid dimensions or ranges).
    #[error("config validation: {0}")]
    Validation(String),

    /// Failed to read an environment variable (e.g. invalid Unicode).
    #[error("env var {key}: {message}")]
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause.
        message: String,
    },

    /// Environment variable was set but could not be parsed into the expected type.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason.
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
        }
    }
}
