//! Dense weight matrices stored as flat row-major arrays.

use super::LayerError;

/// A `rows × cols` matrix of finite weights, stored row-major (`data[r * cols + c]`).
///
/// Used as a fully-connected map from a `rows`-long input to a `cols`-long output.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl WeightMatrix {
    /// Wraps `data` as a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// - [`LayerError::SizeOverflow`] if `rows * cols` overflows.
    /// - [`LayerError::ShapeMismatch`] if `data.len() != rows * cols`.
    /// - [`LayerError::NonFiniteWeight`] if any value is NaN or infinite.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, LayerError> {
        let expected = Self::len_for(rows, cols)?;
        if data.len() != expected {
            return Err(LayerError::ShapeMismatch {
                what: "weight matrix data",
                expected,
                got: data.len(),
            });
        }
        if let Some(pos) = data.iter().position(|w| !w.is_finite()) {
            return Err(LayerError::NonFiniteWeight {
                row: pos / cols,
                col: pos % cols,
            });
        }
        Ok(WeightMatrix { rows, cols, data })
    }

    /// Builds a matrix by calling `f(row, col)` for each entry in row-major order.
    ///
    /// # Errors
    ///
    /// [`LayerError::NonFiniteWeight`] if `f` yields NaN or infinity,
    /// [`LayerError::SizeOverflow`] if `rows * cols` overflows.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, LayerError> {
        let mut data = Vec::with_capacity(Self::len_for(rows, cols)?);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self::from_vec(rows, cols, data)
    }

    /// Number of entries in a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// [`LayerError::SizeOverflow`] if the product does not fit in `usize`.
    pub fn len_for(rows: usize, cols: usize) -> Result<usize, LayerError> {
        rows.checked_mul(cols)
            .ok_or(LayerError::SizeOverflow { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Raw row-major data.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Pre-activation sums: `out[i] = Σ_j input[j] * w[j * cols + i]`.
    ///
    /// # Errors
    ///
    /// [`LayerError::ShapeMismatch`] if `input.len() != rows`.
    pub fn transform(&self, input: &[f64]) -> Result<Vec<f64>, LayerError> {
        if input.len() != self.rows {
            return Err(LayerError::ShapeMismatch {
                what: "matrix input",
                expected: self.rows,
                got: input.len(),
            });
        }
        let mut out = vec![0.0; self.cols];
        if self.cols == 0 {
            return Ok(out);
        }
        for (&x, row) in input.iter().zip(self.data.chunks_exact(self.cols)) {
            for (o, &w) in out.iter_mut().zip(row) {
                *o += x * w;
            }
        }
        Ok(out)
    }

    /// Fails with [`LayerError::ShapeMismatch`] unless the matrix is `rows × cols`.
    pub(crate) fn expect_shape(
        &self,
        what: &'static str,
        rows: usize,
        cols: usize,
    ) -> Result<(), LayerError> {
        if self.rows != rows {
            return Err(LayerError::ShapeMismatch {
                what,
                expected: rows,
                got: self.rows,
            });
        }
        if self.cols != cols {
            return Err(LayerError::ShapeMismatch {
                what,
                expected: cols,
                got: self.cols,
            });
        }
        Ok(())
    }
}
