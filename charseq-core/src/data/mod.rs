//! Prompt loading (one prompt per line from a file).
//!
//! This module defines the **trait** ([`PromptSource`]), **models** ([`Prompt`], [`Prompts`]), and
//! **error** ([`DataError`]). Implementations (e.g. [`PromptFile`] for file paths) are in the
//! `impls` submodule.

mod error;
mod impls;
mod types;

pub use error::DataError;
pub use impls::{load_prompts, PromptFile};
pub use types::{Prompt, Prompts, COMMENT_PREFIX};

/// Trait for loading prompts.
pub trait PromptSource {
    /// Loads prompts. Returns [`Prompts`] or a [`DataError`].
    fn load(&self) -> Result<Prompts, DataError>;
}
