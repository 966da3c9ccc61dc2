//! Dense layer: input → hidden → output, each step an affine map followed by an activation.

use tracing::trace;

use super::{Activation, LayerError, WeightMatrix, WeightProvider};

/// Two stacked fully-connected maps with configurable activations.
///
/// `hidden = act_h(input · W1 [+ context])`, `output = act_o(hidden · W2)`.
/// Weights are read-only after construction.
#[derive(Clone, Debug)]
pub struct DenseLayer {
    w1: WeightMatrix,
    w2: WeightMatrix,
    hidden_activation: Activation,
    output_activation: Activation,
}

impl DenseLayer {
    /// Builds a layer from explicit weights. Sizes are taken from the matrices:
    /// `w1` is `input × hidden`, `w2` is `hidden × output`.
    ///
    /// # Errors
    ///
    /// [`LayerError::ShapeMismatch`] if `w2.rows() != w1.cols()`.
    pub fn new(
        w1: WeightMatrix,
        w2: WeightMatrix,
        hidden_activation: Activation,
        output_activation: Activation,
    ) -> Result<Self, LayerError> {
        if w2.rows() != w1.cols() {
            return Err(LayerError::ShapeMismatch {
                what: "hidden→output weight rows",
                expected: w1.cols(),
                got: w2.rows(),
            });
        }
        Ok(DenseLayer {
            w1,
            w2,
            hidden_activation,
            output_activation,
        })
    }

    /// Builds a layer with weights drawn from `provider`.
    ///
    /// # Errors
    ///
    /// Propagates provider errors, and [`LayerError::ShapeMismatch`] if the provider returns a
    /// matrix of the wrong shape.
    pub fn init<P: WeightProvider + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        hidden_activation: Activation,
        output_activation: Activation,
        provider: &mut P,
    ) -> Result<Self, LayerError> {
        let w1 = provider.matrix(input_size, hidden_size)?;
        w1.expect_shape("input→hidden weights", input_size, hidden_size)?;
        let w2 = provider.matrix(hidden_size, output_size)?;
        w2.expect_shape("hidden→output weights", hidden_size, output_size)?;
        Self::new(w1, w2, hidden_activation, output_activation)
    }

    #[must_use]
    pub fn input_size(&self) -> usize {
        self.w1.rows()
    }

    #[must_use]
    pub fn hidden_size(&self) -> usize {
        self.w1.cols()
    }

    #[must_use]
    pub fn output_size(&self) -> usize {
        self.w2.cols()
    }

    #[must_use]
    pub fn hidden_activation(&self) -> Activation {
        self.hidden_activation
    }

    #[must_use]
    pub fn output_activation(&self) -> Activation {
        self.output_activation
    }

    /// Forward pass without context.
    ///
    /// # Errors
    ///
    /// [`LayerError::ShapeMismatch`] if `input.len() != input_size()`.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, LayerError> {
        self.run(input, None)
    }

    /// Forward pass adding `context[i]` to each hidden pre-activation before the activation.
    ///
    /// # Errors
    ///
    /// [`LayerError::ShapeMismatch`] if `input.len() != input_size()` or
    /// `context.len() != hidden_size()`.
    pub fn forward_with_context(
        &self,
        input: &[f64],
        context: &[f64],
    ) -> Result<Vec<f64>, LayerError> {
        self.run(input, Some(context))
    }

    fn run(&self, input: &[f64], context: Option<&[f64]>) -> Result<Vec<f64>, LayerError> {
        if input.len() != self.input_size() {
            return Err(LayerError::ShapeMismatch {
                what: "dense layer input",
                expected: self.input_size(),
                got: input.len(),
            });
        }
        let mut hidden = self.w1.transform(input)?;
        if let Some(ctx) = context {
            if ctx.len() != hidden.len() {
                return Err(LayerError::ShapeMismatch {
                    what: "dense layer context",
                    expected: hidden.len(),
                    got: ctx.len(),
                });
            }
            for (h, &c) in hidden.iter_mut().zip(ctx) {
                *h += c;
            }
        }
        self.hidden_activation.apply(&mut hidden);

        let mut output = self.w2.transform(&hidden)?;
        self.output_activation.apply(&mut output);
        trace!(
            input = input.len(),
            hidden = hidden.len(),
            output = output.len(),
            "dense forward"
        );
        Ok(output)
    }
}
