//! Crate-level error wrapping the per-module errors.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;
use crate::nn::LayerError;
use crate::tokenizer::VocabError;

/// Any error surfaced by the generator or its building blocks.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vocab(#[from] VocabError),

    #[error(transparent)]
    Layer(#[from] LayerError),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
