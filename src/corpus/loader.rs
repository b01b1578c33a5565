//! Corpus loading utilities
//!
//! Reads newline-delimited word lists from files or from embedded constants.

use super::Corpus;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised when a corpus cannot be loaded
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("corpus {} contains no words of three or more letters", .path.display())]
    Empty { path: PathBuf },
}

/// Load a corpus from a file
///
/// Each line is trimmed; blank lines, words shorter than three letters and
/// entries with non-letter characters are skipped. File order is preserved.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or `CorpusError::Empty`
/// if no usable word remains after filtering.
///
/// # Examples
/// ```no_run
/// use hangman_sim::corpus::loader::load_from_file;
///
/// let corpus = load_from_file("words_alpha.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(Corpus::new(words))
}

/// Parse newline-delimited text into words, skipping unusable lines
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_sim::corpus::loader::words_from_slice;
/// use hangman_sim::corpus::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["lemon", "cat", "garden"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "lemon");
        assert_eq!(words[1].text(), "cat");
        assert_eq!(words[2].text(), "garden");
    }

    #[test]
    fn words_from_slice_skips_short_words() {
        let input = &["lemon", "an", "a", "cat"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "lemon");
        assert_eq!(words[1].text(), "cat");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_trims_and_filters() {
        let content = "  apple \n\nox\nbe\r\nzebra\t\nit's\nkiwi\n";
        let words = parse_words(content);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, vec!["apple", "zebra", "kiwi"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("hangman_sim_missing_corpus.txt");
        let _ = fs::remove_file(&path);

        let result = load_from_file(&path);
        assert!(matches!(result, Err(CorpusError::Io { .. })));
    }

    #[test]
    fn load_from_file_preserves_order() {
        let path = std::env::temp_dir().join("hangman_sim_loader_order.txt");
        fs::write(&path, "zebra\nant\napple\nox\n").unwrap();

        let corpus = load_from_file(&path).unwrap();
        let texts: Vec<&str> = corpus.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["zebra", "ant", "apple"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_file_with_only_short_words_is_empty() {
        let path = std::env::temp_dir().join("hangman_sim_loader_short.txt");
        fs::write(&path, "a\nan\nox\n").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(CorpusError::Empty { .. })));

        fs::remove_file(&path).unwrap();
    }
}
