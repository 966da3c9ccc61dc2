//! Nonlinearities applied to a whole activation vector after its pre-activations are summed.

/// Vector-wide nonlinearity.
///
/// Softmax needs every element of the vector, so activations run after the full
/// pre-activation vector exists rather than per element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Activation {
    /// `max(0, x)` per element.
    #[default]
    Relu,
    /// Normalized exponential over the whole vector.
    Softmax,
    /// Leaves values unchanged.
    Identity,
}

impl Activation {
    /// Applies the nonlinearity in place.
    pub fn apply(self, v: &mut [f64]) {
        match self {
            Activation::Relu => relu(v),
            Activation::Softmax => softmax(v),
            Activation::Identity => {}
        }
    }
}

/// Rectified linear unit, in place.
pub fn relu(v: &mut [f64]) {
    for x in v.iter_mut() {
        *x = x.max(0.0);
    }
}

/// Logits → probabilities in \[0,1] summing to 1, in place. Subtracts the max for stability.
///
/// Overflowed logits still give a distribution: `+inf` entries share the mass evenly, and a
/// vector with NaN or only `-inf` becomes uniform.
pub fn softmax(v: &mut [f64]) {
    if v.is_empty() {
        return;
    }
    let n = v.len() as f64;
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if v.iter().any(|x| x.is_nan()) || max == f64::NEG_INFINITY {
        v.fill(1.0 / n);
        return;
    }
    if max == f64::INFINITY {
        let top = v.iter().filter(|&&x| x == f64::INFINITY).count() as f64;
        for x in v.iter_mut() {
            *x = if *x == f64::INFINITY { 1.0 / top } else { 0.0 };
        }
        return;
    }
    let mut total = 0.0;
    for x in v.iter_mut() {
        *x = (*x - max).exp();
        total += *x;
    }
    for x in v.iter_mut() {
        *x /= total;
    }
}
