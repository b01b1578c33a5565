//! Formatting utilities for terminal output

use crate::solver::GuessStep;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Uppercase display form of a letter byte
#[must_use]
pub fn letter_char(letter: u8) -> char {
    (letter as char).to_ascii_uppercase()
}

/// Letters of a ranking as an uppercase, space-separated string
#[must_use]
pub fn format_letters<I: IntoIterator<Item = u8>>(letters: I) -> String {
    letters
        .into_iter()
        .map(|letter| letter_char(letter).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the hangman view of a word: known letters shown, others as `_`
#[must_use]
pub fn masked_word(word: &str, revealed: &[u8]) -> String {
    let bytes = word.as_bytes();
    let last = bytes.len().saturating_sub(1);
    bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if i == 0 || i == last || revealed.contains(&b) {
                letter_char(b)
            } else {
                '_'
            }
        })
        .collect()
}

/// Letters hit so far in a list of guess steps
#[must_use]
pub fn revealed_letters(steps: &[GuessStep]) -> Vec<u8> {
    steps
        .iter()
        .filter(|step| step.hit)
        .map(|step| step.letter)
        .collect()
}
