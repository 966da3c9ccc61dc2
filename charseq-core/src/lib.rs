//! # charseq-core
//!
//! Untrained character-level encoder/decoder: a fixed vocabulary, dense layers with injected
//! weights, encoder and context-conditioned decoder stacks, and a generator with greedy or
//! sampled decoding.

pub mod config;
pub mod data;
mod error;
pub mod generator;
pub mod nn;
pub mod tokenizer;

pub use config::{Config, ModelConfig};
pub use error::{Error, Result};
pub use generator::{DecodePolicy, Generation, Generator, StopReason};
pub use tokenizer::Vocabulary;
