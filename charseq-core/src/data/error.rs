//! Errors produced when loading prompts.
//!
//! All errors from the data module use [`DataError`]; the crate-level
//! [`Error`](crate::Error) wraps it.

use thiserror::Error;

/// Errors produced by the data loading module.
///
/// # Variants
///
/// - **Io**: Failed to read the file (e.g. file not found, permission denied, invalid UTF-8).
///   *When*: Opening or reading the path in [`PromptFile`](super::PromptFile) or
///   [`load_prompts`](super::load_prompts).
///
/// - **EmptyFile**: The file was read successfully but holds no prompts (only blank or comment lines).
///   *Recovery*: Provide at least one non-blank, non-comment line.
#[derive(Debug, Error)]
pub enum DataError {
    /// I/O error while reading the prompts file.
    #[error("data io: {0}")]
    Io(#[from] std::io::Error),

    /// The prompts file yields no prompts.
    #[error("data: prompts file is empty")]
    EmptyFile,
}
