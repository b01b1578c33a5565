//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types: words, letter sets and the
//! constraint key revealed at the start of a round. All types here are pure and testable.

mod key;
mod letters;
mod word;

pub use key::ConstraintKey;
pub use letters::{ALPHABET_SIZE, LetterSet, letter_slot};
pub use word::{MIN_WORD_LEN, Word, WordError};
