//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `CHARSEQ_HIDDEN_SIZE`).
pub(crate) const ENV_PREFIX: &str = "CHARSEQ_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_SEQUENCE_LENGTH: &str = "SEQUENCE_LENGTH";
pub(crate) const ENV_HIDDEN_SIZE: &str = "HIDDEN_SIZE";
pub(crate) const ENV_NUM_LAYERS: &str = "NUM_LAYERS";
pub(crate) const ENV_INIT: &str = "INIT";
pub(crate) const ENV_INIT_SCALE: &str = "INIT_SCALE";
pub(crate) const ENV_DECODING: &str = "DECODING";
pub(crate) const ENV_TEMPERATURE: &str = "TEMPERATURE";
pub(crate) const ENV_PROMPTS_PATH: &str = "PROMPTS_PATH";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 42;
/// Size of the default vocabulary: 27 base characters + 3 special tokens.
pub(crate) const DEFAULT_VOCAB_SIZE: usize = 30;
pub(crate) const DEFAULT_SEQUENCE_LENGTH: usize = 16;
pub(crate) const DEFAULT_HIDDEN_SIZE: usize = 32;
pub(crate) const DEFAULT_NUM_LAYERS: usize = 2;
pub(crate) const DEFAULT_INIT_SCALE: f64 = 1.0;
pub(crate) const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Upper bound for every model dimension.
pub(crate) const MAX_DIMENSION: usize = 1 << 16;
