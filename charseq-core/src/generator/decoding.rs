//! Decoding loop: token selection policies and the step-by-step [`Decoding`] iterator.

use std::fmt;

use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{weighted::WeightedIndex, Distribution};
use tracing::trace;

use super::Generator;
use crate::error::Result;

/// How the next token is picked from a probability distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DecodePolicy {
    /// Arg-max; ties go to the lowest index.
    #[default]
    Greedy,
    /// Weighted draw from `p^(1/temperature)`, with a fresh RNG seeded from `seed` for every
    /// decoding run so repeated calls give the same output.
    Sample {
        /// Values below 1 sharpen the distribution, above 1 flatten it.
        temperature: f64,
        /// Seed for the per-run RNG.
        seed: u64,
    },
}

/// Why decoding stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The end-of-sequence token was selected.
    EndOfSequence,
    /// `sequence_length` steps elapsed.
    MaxLength,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::EndOfSequence => "end of sequence",
            StopReason::MaxLength => "max length",
        })
    }
}

/// Generator lifecycle for one prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Encoding,
    /// About to run decoding step `step` (0-based).
    Decoding { step: usize },
    Done(StopReason),
}

/// Index of the largest value; the first one wins on ties. `None` for an empty slice.
#[must_use]
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

enum Selector {
    Greedy,
    Sample { inv_temperature: f64, rng: StdRng },
}

impl Selector {
    fn new(policy: DecodePolicy) -> Self {
        match policy {
            DecodePolicy::Greedy => Selector::Greedy,
            DecodePolicy::Sample { temperature, seed } => Selector::Sample {
                inv_temperature: 1.0 / temperature,
                rng: StdRng::seed_from_u64(seed),
            },
        }
    }

    /// Picks an index from `probs`; `fallback` is used for an empty distribution.
    fn select(&mut self, probs: &[f64], fallback: usize) -> usize {
        match self {
            Selector::Greedy => argmax(probs).unwrap_or(fallback),
            Selector::Sample {
                inv_temperature,
                rng,
            } => {
                let weights = probs.iter().map(|p| p.powf(*inv_temperature));
                // All-zero or non-finite weights cannot be sampled; fall back to arg-max.
                WeightedIndex::new(weights)
                    .ok()
                    .map(|dist| dist.sample(rng))
                    .or_else(|| argmax(probs))
                    .unwrap_or(fallback)
            }
        }
    }
}

/// Step-by-step decoding for one prompt, yielding each emitted token index.
///
/// The end-of-sequence token is never yielded; it ends iteration with
/// [`StopReason::EndOfSequence`]. Dropping the iterator early cancels decoding.
pub struct Decoding<'g> {
    generator: &'g Generator,
    context: Vec<f64>,
    token: usize,
    phase: Phase,
    selector: Selector,
    failed: bool,
}

impl<'g> Decoding<'g> {
    pub(super) fn new(generator: &'g Generator, context: Vec<f64>) -> Self {
        let token = generator.vocabulary().sos_index();
        Decoding {
            generator,
            context,
            token,
            phase: Phase::Decoding { step: 0 },
            selector: Selector::new(generator.policy()),
            failed: false,
        }
    }

    /// Current phase: `Decoding { step }` while running, `Done(reason)` once finished.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Why decoding stopped, once it has.
    #[must_use]
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.phase {
            Phase::Done(reason) => Some(reason),
            _ => None,
        }
    }

    /// Encoder context every decoder layer is conditioned on.
    #[must_use]
    pub fn context(&self) -> &[f64] {
        &self.context
    }

    fn finish(&mut self, reason: StopReason) {
        trace!(%reason, "decoding done");
        self.phase = Phase::Done(reason);
    }

    fn advance(&mut self) -> Result<usize> {
        let vocabulary = self.generator.vocabulary();
        let input = vocabulary.one_hot(self.token)?;
        let probs = self
            .generator
            .decoder()
            .forward_with_context(&input, &self.context)?;
        Ok(self.selector.select(&probs, vocabulary.eos_index()))
    }
}

impl Iterator for Decoding<'_> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let Phase::Decoding { step } = self.phase else {
            return None;
        };
        if step >= self.generator.config().sequence_length {
            self.finish(StopReason::MaxLength);
            return None;
        }
        let next = match self.advance() {
            Ok(next) => next,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };
        trace!(step, token = next, "decoding step");
        if next == self.generator.vocabulary().eos_index() {
            self.finish(StopReason::EndOfSequence);
            return None;
        }
        self.token = next;
        self.phase = Phase::Decoding { step: step + 1 };
        Some(Ok(next))
    }
}
