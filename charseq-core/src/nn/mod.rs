//! Feed-forward building blocks: weight matrices, activations, dense layers and stacks.
//!
//! This module defines the **trait** ([`WeightProvider`]) through which layers obtain their
//! weights, and the **error** ([`LayerError`]). Providers live in the `impls` submodule
//! ([`RandomWeights`] for seeded random init, [`ConstantWeights`] and [`FnWeights`] for
//! deterministic matrices). Nothing here mutates weights after construction.

mod activation;
mod dense;
mod error;
mod impls;
mod stack;
#[cfg(test)]
mod tests;
mod weights;

pub use activation::{relu, softmax, Activation};
pub use dense::DenseLayer;
pub use error::LayerError;
pub use impls::{ConstantWeights, FnWeights, RandomWeights, WeightInit};
pub use stack::Stack;
pub use weights::WeightMatrix;

/// Source of weight matrices for layer construction.
///
/// Called once per matrix, in construction order. Inject a deterministic provider in tests
/// instead of relying on global randomness.
pub trait WeightProvider {
    /// Returns a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError`] if the matrix cannot be produced (e.g. non-finite values).
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<WeightMatrix, LayerError>;
}

impl<P: WeightProvider + ?Sized> WeightProvider for &mut P {
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<WeightMatrix, LayerError> {
        (**self).matrix(rows, cols)
    }
}

impl<P: WeightProvider + ?Sized> WeightProvider for Box<P> {
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<WeightMatrix, LayerError> {
        (**self).matrix(rows, cols)
    }
}
