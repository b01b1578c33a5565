//! Hangman word representation
//!
//! A Word stores its text along with precomputed letter sets for the whole word
//! and for its interior (every position except the first and the last).

use super::{ConstraintKey, LetterSet};
use std::fmt;
use thiserror::Error;

/// Shortest word accepted into a corpus
pub const MIN_WORD_LEN: usize = 3;

/// A dictionary word of at least three lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
    interior: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least 3 letters, got {0}")]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below 3
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_sim::core::Word;
    ///
    /// let word = Word::new("Lemon").unwrap();
    /// assert_eq!(word.text(), "lemon");
    /// assert_eq!(word.interior_letters().to_string(), "emo");
    ///
    /// assert!(Word::new("ox").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let bytes = text.as_bytes();
        let letters = bytes.iter().copied().collect();
        let interior = bytes[1..bytes.len() - 1].iter().copied().collect();

        Ok(Self {
            text,
            letters,
            interior,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// First letter, revealed before guessing starts
    #[inline]
    #[must_use]
    pub fn first(&self) -> u8 {
        self.bytes()[0]
    }

    /// Last letter, revealed before guessing starts
    #[inline]
    #[must_use]
    pub fn last(&self) -> u8 {
        self.bytes()[self.length() - 1]
    }

    /// Distinct letters anywhere in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Distinct letters excluding the first and last position
    #[inline]
    #[must_use]
    pub const fn interior_letters(&self) -> LetterSet {
        self.interior
    }

    /// Check if the word contains a letter at any position
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Check if the letter appears strictly between the first and last position
    #[inline]
    #[must_use]
    pub const fn has_interior_letter(&self, letter: u8) -> bool {
        self.interior.contains(letter)
    }

    /// The (first, last, length) key this word is grouped under
    #[inline]
    #[must_use]
    pub fn key(&self) -> ConstraintKey {
        ConstraintKey::of(self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
