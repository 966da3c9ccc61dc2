//! Tokenization: the fixed character vocabulary and its lookups.
//!
//! [`Vocabulary`] maps characters to indices and back. Characters outside the base set encode to
//! the unknown token instead of failing; only inverse lookups of bad indices error
//! ([`VocabError`]).

mod error;
mod vocab;

pub use error::VocabError;
pub use vocab::{SpecialToken, Symbol, Vocabulary, DEFAULT_BASE_SYMBOLS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_size_and_special_indices() {
        let v = Vocabulary::default();
        assert_eq!(v.base_len(), 27, "a..z + space");
        assert_eq!(v.len(), 30);
        assert_eq!(v.sos_index(), 27);
        assert_eq!(v.eos_index(), 28);
        assert_eq!(v.unknown_index(), 29);
        assert!(!v.is_empty());
    }

    #[test]
    fn base_characters_round_trip() {
        let v = Vocabulary::default();
        for c in DEFAULT_BASE_SYMBOLS.chars() {
            assert_eq!(v.char_of(v.index_of(c)).unwrap(), Symbol::Char(c));
        }
    }

    #[test]
    fn unknown_characters_map_to_unknown_index() {
        let v = Vocabulary::default();
        for c in ['A', '!', '7', 'é', '\n'] {
            assert_eq!(v.index_of(c), v.unknown_index());
        }
    }

    #[test]
    fn special_indices_render_symbolic_names() {
        let v = Vocabulary::default();
        assert_eq!(v.char_of(v.sos_index()).unwrap().to_string(), "<SOS>");
        assert_eq!(v.char_of(v.eos_index()).unwrap().to_string(), "<EOS>");
        assert_eq!(v.char_of(v.unknown_index()).unwrap().to_string(), "<UNK>");
        assert!(v.is_special(v.sos_index()));
        assert!(!v.is_special(0));
        assert!(!v.is_special(v.len()));
    }

    #[test]
    fn char_of_out_of_range_fails() {
        let v = Vocabulary::default();
        assert_eq!(
            v.char_of(30),
            Err(VocabError::IndexOutOfRange { index: 30, len: 30 })
        );
        assert!(v.char_of(usize::MAX).is_err());
    }

    #[test]
    fn duplicate_base_characters_are_skipped() {
        let v = Vocabulary::new("abca".chars());
        assert_eq!(v.base_len(), 3);
        assert_eq!(v.index_of('a'), 0);
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn encode_maps_unknowns_and_decode_drops_specials() {
        let v = Vocabulary::new("ab".chars());
        let ids = v.encode("aXb");
        assert_eq!(ids, vec![0, v.unknown_index(), 1]);
        assert_eq!(v.decode(&[v.sos_index(), 0, 1, v.eos_index()]).unwrap(), "ab");
        assert!(matches!(
            v.decode(&[0, 99]),
            Err(VocabError::IndexOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn one_hot_has_single_unit_entry() {
        let v = Vocabulary::default();
        let x = v.one_hot(3).unwrap();
        assert_eq!(x.len(), v.len());
        assert_eq!(x.iter().filter(|&&e| e == 1.0).count(), 1);
        assert_eq!(x[3], 1.0);
        assert!(v.one_hot(v.len()).is_err());
    }

    #[test]
    fn empty_base_still_has_specials() {
        let v = Vocabulary::new(std::iter::empty());
        assert_eq!(v.len(), 3);
        assert_eq!(v.sos_index(), 0);
        assert_eq!(v.index_of('a'), v.unknown_index());
    }
}
