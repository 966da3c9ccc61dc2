//! Stacked transform: dense layers applied in order, optionally with a context vector injected
//! into every layer.

use tracing::debug;

use super::{Activation, DenseLayer, LayerError, WeightProvider};

/// Ordered, non-empty sequence of [`DenseLayer`]s whose sizes chain.
///
/// Used in two roles: as an encoder ([`Stack::forward`]) and as a decoder conditioned on an
/// encoder context ([`Stack::forward_with_context`]).
#[derive(Clone, Debug)]
pub struct Stack {
    layers: Vec<DenseLayer>,
}

impl Stack {
    /// Wraps explicit layers.
    ///
    /// # Errors
    ///
    /// - [`LayerError::EmptyStack`] if `layers` is empty.
    /// - [`LayerError::ShapeMismatch`] if a layer's output size differs from the next layer's input size.
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self, LayerError> {
        if layers.is_empty() {
            return Err(LayerError::EmptyStack);
        }
        for pair in layers.windows(2) {
            if pair[0].output_size() != pair[1].input_size() {
                return Err(LayerError::ShapeMismatch {
                    what: "stacked layer input",
                    expected: pair[0].output_size(),
                    got: pair[1].input_size(),
                });
            }
        }
        Ok(Stack { layers })
    }

    /// Encoder stack: `input_size → hidden_size`, then `hidden_size → hidden_size` for every
    /// later layer. ReLU throughout.
    ///
    /// # Errors
    ///
    /// [`LayerError::EmptyStack`] if `num_layers == 0`; provider errors otherwise.
    pub fn encoder<P: WeightProvider + ?Sized>(
        num_layers: usize,
        input_size: usize,
        hidden_size: usize,
        provider: &mut P,
    ) -> Result<Self, LayerError> {
        if num_layers == 0 {
            return Err(LayerError::EmptyStack);
        }
        let layers = (0..num_layers)
            .map(|k| {
                let input = if k == 0 { input_size } else { hidden_size };
                DenseLayer::init(
                    input,
                    hidden_size,
                    hidden_size,
                    Activation::Relu,
                    Activation::Relu,
                    &mut *provider,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(num_layers, input_size, hidden_size, "built encoder stack");
        Self::new(layers)
    }

    /// Decoder stack: every layer maps to `output_size` through a `hidden_size` hidden
    /// activation; the first takes `input_size`. Intermediate outputs use ReLU, the final
    /// output uses softmax so the stack yields a probability distribution.
    ///
    /// # Errors
    ///
    /// [`LayerError::EmptyStack`] if `num_layers == 0`; provider errors otherwise.
    pub fn decoder<P: WeightProvider + ?Sized>(
        num_layers: usize,
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        provider: &mut P,
    ) -> Result<Self, LayerError> {
        if num_layers == 0 {
            return Err(LayerError::EmptyStack);
        }
        let layers = (0..num_layers)
            .map(|k| {
                let input = if k == 0 { input_size } else { output_size };
                let output_activation = if k + 1 == num_layers {
                    Activation::Softmax
                } else {
                    Activation::Relu
                };
                DenseLayer::init(
                    input,
                    hidden_size,
                    output_size,
                    Activation::Relu,
                    output_activation,
                    &mut *provider,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            num_layers,
            input_size, hidden_size, output_size, "built decoder stack"
        );
        Self::new(layers)
    }

    /// Number of layers (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; empty stacks cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[must_use]
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Input size of the first layer.
    #[must_use]
    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::input_size)
    }

    /// Output size of the last layer.
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, DenseLayer::output_size)
    }

    /// Runs each layer in order, feeding outputs forward. Returns the last layer's output.
    ///
    /// # Errors
    ///
    /// [`LayerError::ShapeMismatch`] if `input.len() != input_size()`.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, LayerError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    /// Like [`forward`](Self::forward) but adds `context` into every layer's hidden
    /// pre-activation.
    ///
    /// # Errors
    ///
    /// [`LayerError::ShapeMismatch`] if the input or context length does not match.
    pub fn forward_with_context(
        &self,
        input: &[f64],
        context: &[f64],
    ) -> Result<Vec<f64>, LayerError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward_with_context(&x, context)?;
        }
        Ok(x)
    }
}
