//! Letter statistics command
//!
//! Per-letter frequency counts over a corpus, alongside the interior usefulness
//! score, with a choice of sort order.

use crate::core::{ALPHABET_SIZE, LetterSet, Word, letter_slot};
use crate::solver::score_letters;

/// Sort key for letter statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterSort {
    /// Every occurrence counted
    #[default]
    Total,
    /// Words containing the letter
    Unique,
    /// Mean of total and unique counts
    Average,
    /// Words containing the letter away from the first and last position
    Interior,
    /// Interior usefulness score
    Usefulness,
}

impl LetterSort {
    pub const ALL: [Self; 5] = [
        Self::Total,
        Self::Unique,
        Self::Average,
        Self::Interior,
        Self::Usefulness,
    ];

    /// The sort order after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Total => Self::Unique,
            Self::Unique => Self::Average,
            Self::Average => Self::Interior,
            Self::Interior => Self::Usefulness,
            Self::Usefulness => Self::Total,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Unique => "unique",
            Self::Average => "average",
            Self::Interior => "interior",
            Self::Usefulness => "usefulness",
        }
    }
}

/// Counts for one letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStats {
    pub letter: u8,
    pub total: usize,
    pub unique: usize,
    pub average: f64,
    pub interior: usize,
    /// `None` if the letter never appears in an interior position
    pub usefulness: Option<f64>,
}

impl LetterStats {
    fn key(&self, sort: LetterSort) -> f64 {
        match sort {
            LetterSort::Total => self.total as f64,
            LetterSort::Unique => self.unique as f64,
            LetterSort::Average => self.average,
            LetterSort::Interior => self.interior as f64,
            LetterSort::Usefulness => self.usefulness.unwrap_or(0.0),
        }
    }
}

/// Compute statistics for every letter that appears in `words`
///
/// Letters are listed in first-seen order; use `sort_letters` to reorder.
#[must_use]
pub fn letter_statistics(words: &[Word]) -> Vec<LetterStats> {
    let mut order: Vec<u8> = Vec::new();
    let mut seen = LetterSet::EMPTY;
    let mut total = [0usize; ALPHABET_SIZE];
    let mut unique = [0usize; ALPHABET_SIZE];
    let mut interior = [0usize; ALPHABET_SIZE];

    for word in words {
        for &letter in word.bytes() {
            if seen.insert(letter) {
                order.push(letter);
            }
            total[letter_slot(letter)] += 1;
        }
        for letter in word.letters().iter() {
            unique[letter_slot(letter)] += 1;
        }
        for letter in word.interior_letters().iter() {
            interior[letter_slot(letter)] += 1;
        }
    }

    let ranking = score_letters(words);

    order
        .into_iter()
        .map(|letter| {
            let i = letter_slot(letter);
            LetterStats {
                letter,
                total: total[i],
                unique: unique[i],
                average: (total[i] + unique[i]) as f64 / 2.0,
                interior: interior[i],
                usefulness: ranking.score(letter),
            }
        })
        .collect()
}

/// Sort statistics descending by `sort`; ties keep their current order
pub fn sort_letters(stats: &mut [LetterStats], sort: LetterSort) {
    stats.sort_by(|a, b| b.key(sort).total_cmp(&a.key(sort)));
}
