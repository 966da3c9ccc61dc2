//! Implementations of [`WeightProvider`](super::WeightProvider).
//!
//! One file per implementation: [`random`] for seeded random init, [`fixed`] for deterministic
//! matrices used in tests and probes.

mod fixed;
mod random;

pub use fixed::{ConstantWeights, FnWeights};
pub use random::{RandomWeights, WeightInit};
