//! Vocabulary: fixed mapping between characters and token indices.
//!
//! Base characters take indices `0..base_len`; the three special tokens follow in the order
//! `<SOS>`, `<EOS>`, `<UNK>`.

use std::collections::HashMap;
use std::fmt;

use super::VocabError;

/// Base characters of the default vocabulary: lowercase ASCII letters followed by space.
pub const DEFAULT_BASE_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz ";

/// Reserved symbols appended after the base characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// Start of sequence; the first decoder input.
    Start,
    /// End of sequence; stops decoding.
    End,
    /// Stand-in for any character outside the base set.
    Unknown,
}

impl SpecialToken {
    /// All special tokens in index order.
    pub const ALL: [SpecialToken; 3] = [SpecialToken::Start, SpecialToken::End, SpecialToken::Unknown];

    /// Symbolic name used for display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SpecialToken::Start => "<SOS>",
            SpecialToken::End => "<EOS>",
            SpecialToken::Unknown => "<UNK>",
        }
    }

    fn offset(self) -> usize {
        match self {
            SpecialToken::Start => 0,
            SpecialToken::End => 1,
            SpecialToken::Unknown => 2,
        }
    }
}

impl fmt::Display for SpecialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a token index stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// A base character.
    Char(char),
    /// One of the reserved tokens.
    Special(SpecialToken),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Special(t) => t.fmt(f),
        }
    }
}

/// Immutable character vocabulary with reserved special tokens.
///
/// Indices are contiguous from `0` to `len - 1`. Build once and share by reference.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    id_to_char: Vec<char>,
    char_to_id: HashMap<char, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from base characters in order. Duplicates are skipped (first occurrence wins).
    #[must_use]
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut id_to_char = Vec::new();
        let mut char_to_id = HashMap::new();
        for c in chars {
            if char_to_id.contains_key(&c) {
                continue;
            }
            char_to_id.insert(c, id_to_char.len());
            id_to_char.push(c);
        }
        Vocabulary {
            id_to_char,
            char_to_id,
        }
    }

    /// Total number of symbols (base characters plus special tokens).
    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_char.len() + SpecialToken::ALL.len()
    }

    /// Always `false`: the special tokens are present even with no base characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of base characters.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.id_to_char.len()
    }

    /// Index of `token`.
    #[must_use]
    pub fn special_index(&self, token: SpecialToken) -> usize {
        self.id_to_char.len() + token.offset()
    }

    #[must_use]
    pub fn sos_index(&self) -> usize {
        self.special_index(SpecialToken::Start)
    }

    #[must_use]
    pub fn eos_index(&self) -> usize {
        self.special_index(SpecialToken::End)
    }

    #[must_use]
    pub fn unknown_index(&self) -> usize {
        self.special_index(SpecialToken::Unknown)
    }

    /// Returns `true` if `index` names a special token.
    #[must_use]
    pub fn is_special(&self, index: usize) -> bool {
        (self.id_to_char.len()..self.len()).contains(&index)
    }

    /// Index for `c`, or the unknown-token index if `c` is not a base character.
    #[must_use]
    pub fn index_of(&self, c: char) -> usize {
        self.char_to_id
            .get(&c)
            .copied()
            .unwrap_or_else(|| self.unknown_index())
    }

    /// Symbol for `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] if `index >= len()`.
    pub fn char_of(&self, index: usize) -> Result<Symbol, VocabError> {
        if let Some(&c) = self.id_to_char.get(index) {
            return Ok(Symbol::Char(c));
        }
        let offset = index - self.id_to_char.len();
        SpecialToken::ALL
            .get(offset)
            .map(|&t| Symbol::Special(t))
            .ok_or(VocabError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Maps every character of `s` to its index (unknown characters map to `<UNK>`).
    #[must_use]
    pub fn encode(&self, s: &str) -> Vec<usize> {
        s.chars().map(|c| self.index_of(c)).collect()
    }

    /// Renders base characters and drops special tokens.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] on the first index outside the vocabulary.
    pub fn decode(&self, ids: &[usize]) -> Result<String, VocabError> {
        let mut s = String::with_capacity(ids.len());
        for &id in ids {
            if let Symbol::Char(c) = self.char_of(id)? {
                s.push(c);
            }
        }
        Ok(s)
    }

    /// One-hot vector of length `len()` with a `1.0` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] if `index >= len()`.
    pub fn one_hot(&self, index: usize) -> Result<Vec<f64>, VocabError> {
        let len = self.len();
        if index >= len {
            return Err(VocabError::IndexOutOfRange { index, len });
        }
        let mut v = vec![0.0; len];
        v[index] = 1.0;
        Ok(v)
    }
}

impl Default for Vocabulary {
    /// Lowercase letters and space plus the special tokens (30 symbols).
    fn default() -> Self {
        Vocabulary::new(DEFAULT_BASE_SYMBOLS.chars())
    }
}
