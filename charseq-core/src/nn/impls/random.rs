//! Seeded random weight initialization.

use std::fmt;
use std::str::FromStr;

use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

use super::super::{LayerError, WeightMatrix, WeightProvider};

/// Distribution used by [`RandomWeights`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeightInit {
    /// Uniform on `[-scale, scale)`.
    #[default]
    Uniform,
    /// Gaussian with mean 0 and standard deviation `scale`.
    Normal,
}

impl fmt::Display for WeightInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeightInit::Uniform => "uniform",
            WeightInit::Normal => "normal",
        })
    }
}

impl FromStr for WeightInit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(WeightInit::Uniform),
            "normal" | "gaussian" => Ok(WeightInit::Normal),
            other => Err(format!("unknown weight init {other:?} (expected uniform or normal)")),
        }
    }
}

#[derive(Clone, Debug)]
enum Sampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

/// Draws every weight from a seeded `StdRng`. The same seed, init and call sequence always
/// produce the same matrices.
#[derive(Clone, Debug)]
pub struct RandomWeights {
    rng: StdRng,
    sampler: Sampler,
}

impl RandomWeights {
    /// Creates a provider seeded with `seed`.
    ///
    /// # Errors
    ///
    /// [`LayerError::InvalidInit`] if `scale` is not finite and positive.
    pub fn new(seed: u64, init: WeightInit, scale: f64) -> Result<Self, LayerError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(LayerError::InvalidInit(format!(
                "scale must be finite and positive, got {scale}"
            )));
        }
        let sampler = match init {
            WeightInit::Uniform => Sampler::Uniform(
                Uniform::new(-scale, scale).map_err(|e| LayerError::InvalidInit(e.to_string()))?,
            ),
            WeightInit::Normal => Sampler::Normal(
                Normal::new(0.0, scale).map_err(|e| LayerError::InvalidInit(e.to_string()))?,
            ),
        };
        Ok(RandomWeights {
            rng: StdRng::seed_from_u64(seed),
            sampler,
        })
    }

    /// Uniform on `[-1, 1)`, the classic untrained init.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`RandomWeights::new`].
    pub fn uniform(seed: u64) -> Result<Self, LayerError> {
        Self::new(seed, WeightInit::Uniform, 1.0)
    }
}

impl WeightProvider for RandomWeights {
    fn matrix(&mut self, rows: usize, cols: usize) -> Result<WeightMatrix, LayerError> {
        let RandomWeights { rng, sampler } = self;
        WeightMatrix::from_fn(rows, cols, |_, _| match sampler {
            Sampler::Uniform(d) => d.sample(&mut *rng),
            Sampler::Normal(d) => d.sample(&mut *rng),
        })
    }
}
