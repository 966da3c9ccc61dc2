//! Errors produced while building or running layers.
//!
//! All errors from the nn module use [`LayerError`]. They point at programming or configuration
//! mistakes, so callers surface them instead of retrying.

use thiserror::Error;

/// Errors produced by weight matrices, dense layers and stacks.
///
/// # Variants
///
/// - **ShapeMismatch**: A vector or matrix does not have the length the receiver declares.
///   *When*: Forward passes with a wrong-sized input or context, weight matrices whose data does not
///   fill `rows * cols`, providers returning the wrong shape, or stacks whose layers do not chain.
///   *Recovery*: Fix the caller; `what` names the operand that was checked.
///
/// - **EmptyStack**: A stack was built with zero layers.
///   *When*: [`Stack::new`](super::Stack::new), [`Stack::encoder`](super::Stack::encoder) or
///   [`Stack::decoder`](super::Stack::decoder) with no layers.
///   *Recovery*: Configure at least one layer.
///
/// - **NonFiniteWeight**: A weight is NaN or infinite.
///   *When*: Building a [`WeightMatrix`](super::WeightMatrix).
///
/// - **SizeOverflow**: A requested matrix has more entries than `usize` can count.
///   *When*: Building a [`WeightMatrix`](super::WeightMatrix) or asking a provider for one.
///
/// - **InvalidInit**: The random initializer parameters are unusable (e.g. non-positive scale).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// Operand length does not match the declared size.
    #[error("shape mismatch in {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Which operand was checked.
        what: &'static str,
        /// Declared size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// A stack with no layers has no defined output.
    #[error("stack must have at least one layer")]
    EmptyStack,

    /// A weight value is NaN or infinite.
    #[error("weight at ({row}, {col}) is not finite")]
    NonFiniteWeight {
        /// Row of the offending value.
        row: usize,
        /// Column of the offending value.
        col: usize,
    },

    /// `rows * cols` does not fit in `usize`.
    #[error("weight matrix {rows} x {cols} is too large")]
    SizeOverflow {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Random initializer could not be built.
    #[error("invalid weight init: {0}")]
    InvalidInit(String),
}
