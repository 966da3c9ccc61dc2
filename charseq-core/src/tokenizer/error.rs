//! Errors produced by vocabulary lookups.
//!
//! All errors from the tokenizer module use [`VocabError`].

use thiserror::Error;

/// Errors produced by the tokenizer module.
///
/// # Variants
///
/// - **IndexOutOfRange**: A token index does not name any symbol in the vocabulary.
///   *When*: During [`char_of`](super::Vocabulary::char_of), [`decode`](super::Vocabulary::decode)
///   or [`one_hot`](super::Vocabulary::one_hot) when an index is not in `[0, len)`.
///   *Recovery*: Only pass indices produced by the same vocabulary (or a model built against it).
///
/// Unrecognized characters are not an error: they encode to the unknown token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// A token index is outside the vocabulary.
    #[error("vocabulary: index {index} out of range (size {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Vocabulary size at the time of the lookup.
        len: usize,
    },
}
