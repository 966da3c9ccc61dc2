//! Generator: turns a prompt into text with an encoder stack, a context-conditioned decoder
//! stack and a decoding policy.
//!
//! Lifecycle per prompt: `Idle → Encoding → Decoding(step) → Done` (see [`Phase`]). Encoding runs
//! every prompt character through the encoder and keeps the last output as the context; an empty
//! prompt gives a zero context. Decoding starts from `<SOS>` and stops on `<EOS>` or after
//! `sequence_length` steps.

mod decoding;

use tracing::{debug, trace};

pub use decoding::{argmax, DecodePolicy, Decoding, Phase, StopReason};

use crate::config::{Config, ConfigError, ModelConfig};
use crate::error::Result;
use crate::nn::{RandomWeights, Stack, WeightProvider};
use crate::tokenizer::Vocabulary;

/// Result of one [`Generator::generate_detailed`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// Emitted base characters; special tokens are not rendered.
    pub text: String,
    /// Every selected token index except the final `<EOS>`.
    pub tokens: Vec<usize>,
    /// Why decoding stopped.
    pub stop: StopReason,
}

/// Encoder/decoder text generator over a fixed vocabulary.
///
/// Immutable after construction: every call owns its own activations (and RNG when sampling),
/// so the same prompt always yields the same output.
#[derive(Clone, Debug)]
pub struct Generator {
    vocabulary: Vocabulary,
    config: ModelConfig,
    encoder: Stack,
    decoder: Stack,
    policy: DecodePolicy,
}

impl Generator {
    /// Builds a generator with greedy decoding. The encoder's weights are drawn from `provider`
    /// first, then the decoder's.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Validation`] if a dimension is zero or `config.vocab_size` differs from
    ///   `vocabulary.len()`.
    /// - [`LayerError`](crate::nn::LayerError) from the provider.
    pub fn new<P: WeightProvider + ?Sized>(
        config: ModelConfig,
        vocabulary: Vocabulary,
        provider: &mut P,
    ) -> Result<Self> {
        config.validate()?;
        if config.vocab_size != vocabulary.len() {
            return Err(ConfigError::Validation(format!(
                "vocab_size ({}) must equal the vocabulary size ({})",
                config.vocab_size,
                vocabulary.len()
            ))
            .into());
        }
        let encoder = Stack::encoder(
            config.num_layers,
            config.vocab_size,
            config.hidden_size,
            &mut *provider,
        )?;
        let decoder = Stack::decoder(
            config.num_layers,
            config.vocab_size,
            config.hidden_size,
            config.vocab_size,
            &mut *provider,
        )?;
        debug!(
            vocab_size = config.vocab_size,
            hidden_size = config.hidden_size,
            num_layers = config.num_layers,
            sequence_length = config.sequence_length,
            "generator ready"
        );
        Ok(Generator {
            vocabulary,
            config,
            encoder,
            decoder,
            policy: DecodePolicy::Greedy,
        })
    }

    /// Builds a generator over the default vocabulary with seeded random weights and the
    /// config's decoding policy.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the config is invalid; layer errors from weight init.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut weights = RandomWeights::new(config.seed, config.init, config.init_scale)?;
        Self::new(config.model, Vocabulary::default(), &mut weights)?
            .with_policy(config.decode_policy())
    }

    /// Replaces the decoding policy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] if a sampling temperature is not finite and positive.
    pub fn with_policy(mut self, policy: DecodePolicy) -> Result<Self> {
        if let DecodePolicy::Sample { temperature, .. } = policy {
            if !temperature.is_finite() || temperature <= 0.0 {
                return Err(ConfigError::Validation(
                    "temperature must be finite and greater than 0".to_string(),
                )
                .into());
            }
        }
        self.policy = policy;
        Ok(self)
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    #[must_use]
    pub fn encoder(&self) -> &Stack {
        &self.encoder
    }

    #[must_use]
    pub fn decoder(&self) -> &Stack {
        &self.decoder
    }

    #[must_use]
    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Context vector for `prompt`: the encoder output for the last character, or zeros for an
    /// empty prompt. Unknown characters go through the encoder as `<UNK>`.
    ///
    /// # Errors
    ///
    /// Layer or vocabulary errors (not expected for a consistently built generator).
    pub fn encode(&self, prompt: &str) -> Result<Vec<f64>> {
        let mut context = vec![0.0; self.config.hidden_size];
        for index in self.vocabulary.encode(prompt) {
            let input = self.vocabulary.one_hot(index)?;
            context = self.encoder.forward(&input)?;
        }
        Ok(context)
    }

    /// Encodes `prompt` and returns the decoding loop as an iterator over emitted tokens.
    ///
    /// # Errors
    ///
    /// Errors from [`Generator::encode`].
    pub fn decode(&self, prompt: &str) -> Result<Decoding<'_>> {
        trace!(phase = ?Phase::Idle, chars = prompt.chars().count(), "prompt received");
        trace!(phase = ?Phase::Encoding, "encoding prompt");
        let context = self.encode(prompt)?;
        let decoding = Decoding::new(self, context);
        trace!(phase = ?decoding.phase(), "decoding");
        Ok(decoding)
    }

    /// Generates text and reports the emitted tokens and stop reason.
    ///
    /// # Errors
    ///
    /// Layer or vocabulary errors (not expected for a consistently built generator).
    pub fn generate_detailed(&self, prompt: &str) -> Result<Generation> {
        let mut decoding = self.decode(prompt)?;
        let tokens = decoding.by_ref().collect::<Result<Vec<_>>>()?;
        let stop = decoding.stop_reason().unwrap_or(StopReason::MaxLength);
        let text = self.vocabulary.decode(&tokens)?;
        debug!(tokens = tokens.len(), %stop, "generated");
        Ok(Generation { text, tokens, stop })
    }

    /// Generates text for `prompt`. The result has at most `sequence_length` characters.
    ///
    /// # Errors
    ///
    /// Layer or vocabulary errors (not expected for a consistently built generator).
    pub fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_detailed(prompt)?.text)
    }
}
