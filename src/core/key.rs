//! Constraint key: what the player knows before the first guess

use super::Word;
use std::fmt;

/// (first letter, last letter, length) of a word
///
/// Words sharing a key are indistinguishable at the start of a round, since the
/// first and last letters and the length are revealed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintKey {
    pub first: u8,
    pub last: u8,
    pub length: usize,
}

impl ConstraintKey {
    #[must_use]
    pub const fn new(first: u8, last: u8, length: usize) -> Self {
        Self {
            first,
            last,
            length,
        }
    }

    /// Derive the key of a word
    #[must_use]
    pub fn of(word: &Word) -> Self {
        Self::new(word.first(), word.last(), word.length())
    }

    /// Check whether a word falls under this key
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.first() == self.first && word.last() == self.last && word.length() == self.length
    }
}

impl fmt::Display for ConstraintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gap = "_".repeat(self.length.saturating_sub(2));
        write!(f, "{}{gap}{}", self.first as char, self.last as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_matches_own_word() {
        let word = Word::new("garden").unwrap();
        let key = ConstraintKey::of(&word);
        assert!(key.matches(&word));
        assert_eq!(key, ConstraintKey::new(b'g', b'n', 6));
    }

    #[test]
    fn key_rejects_other_shapes() {
        let key = ConstraintKey::new(b'c', b't', 3);
        assert!(key.matches(&Word::new("cut").unwrap()));
        assert!(!key.matches(&Word::new("car").unwrap()));
        assert!(!key.matches(&Word::new("bat").unwrap()));
        assert!(!key.matches(&Word::new("coat").unwrap()));
    }

    #[test]
    fn key_display_shows_hidden_span() {
        assert_eq!(ConstraintKey::new(b'c', b't', 3).to_string(), "c_t");
        assert_eq!(ConstraintKey::new(b'g', b'n', 6).to_string(), "g____n");
    }

    #[test]
    fn keys_order_by_first_then_last_then_length() {
        let mut keys = vec![
            ConstraintKey::new(b'b', b't', 4),
            ConstraintKey::new(b'a', b'z', 9),
            ConstraintKey::new(b'b', b't', 3),
        ];
        keys.sort();
        assert_eq!(keys[0].first, b'a');
        assert_eq!(keys[1].length, 3);
        assert_eq!(keys[2].length, 4);
    }
}
