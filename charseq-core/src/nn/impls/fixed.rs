//! Deterministic providers: a constant fill and a closure over matrix coordinates.

use super::super::{LayerError, WeightMatrix, WeightProvider};

/// Fills every matrix with the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantWeights(pub f64);

impl WeightProvider for ConstantWeights {
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<WeightMatrix, LayerError> {
        let len = WeightMatrix::len_for(rows, cols)?;
        WeightMatrix::from_vec(rows, cols, vec![self.0; len])
    }
}

/// Calls `f(matrix_index, row, col)` for each weight; `matrix_index` counts the matrices this
/// provider has produced so far, starting at 0.
pub struct FnWeights<F> {
    f: F,
    produced: usize,
}

impl<F> FnWeights<F>
where
    F: FnMut(usize, usize, usize) -> f64,
{
    #[must_use]
    pub fn new(f: F) -> Self {
        FnWeights { f, produced: 0 }
    }

    /// Number of matrices produced so far.
    #[must_use]
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl<F> WeightProvider for FnWeights<F>
where
    F: FnMut(usize, usize, usize) -> f64,
{
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<WeightMatrix, LayerError> {
        let index = self.produced;
        self.produced += 1;
        let f = &mut self.f;
        WeightMatrix::from_fn(rows, cols, |r, c| f(index, r, c))
    }
}
