//! Word corpus for Hangman simulation
//!
//! A corpus is the ordered dictionary trials are drawn from. Its order is the
//! enumeration order used for grouping and for breaking ties between letters.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::CorpusError;

use crate::core::Word;

/// Ordered collection of dictionary words
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Corpus built from the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Look up a word by its text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }
}

impl From<Vec<Word>> for Corpus {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
