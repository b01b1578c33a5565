//! Interior-letter usefulness scoring
//!
//! Ranks the letters that can still be hidden in a word (every position except
//! the first and the last) by how well they discriminate among a set of words.

use crate::core::{ALPHABET_SIZE, LetterSet, Word, letter_slot};
use rustc_hash::FxHashSet;

/// Score of a single letter within a ranked word set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScore {
    pub letter: u8,
    /// Number of words whose interior contains the letter
    pub occurrences: usize,
    /// Number of distinct interior-letter sets containing the letter
    pub patterns: usize,
    /// `occurrences / patterns`
    pub score: f64,
}

/// Interior letters ordered from most to least useful
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterRanking {
    entries: Vec<LetterScore>,
}

impl LetterRanking {
    #[must_use]
    pub fn entries(&self) -> &[LetterScore] {
        &self.entries
    }

    /// Letters in ranked order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|entry| entry.letter)
    }

    /// Usefulness of a letter, if it was scored
    #[must_use]
    pub fn score(&self, letter: u8) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.letter == letter)
            .map(|entry| entry.score)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank interior letters of a word set by usefulness
///
/// For each letter L found in some word's interior:
/// - `occurrences(L)` is the number of words whose interior contains L
/// - `patterns(L)` is the number of *distinct* interior-letter sets containing L
/// - `usefulness(L) = occurrences(L) / patterns(L)`
///
/// Letters are sorted by descending usefulness. The sort is stable and ties
/// keep first-seen order: words in iteration order, and interior positions left
/// to right within a word.
///
/// A set of zero or one word needs no guessing and yields an empty ranking.
///
/// # Examples
/// ```
/// use hangman_sim::core::Word;
/// use hangman_sim::solver::score_letters;
///
/// let words: Vec<Word> = ["bat", "bit", "but"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let ranking = score_letters(&words);
/// let letters: Vec<u8> = ranking.letters().collect();
/// assert_eq!(letters, b"aiu");
/// ```
#[must_use]
pub fn score_letters<'a, I>(words: I) -> LetterRanking
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut first_seen: Vec<u8> = Vec::new();
    let mut seen = LetterSet::EMPTY;
    let mut occurrences = [0usize; ALPHABET_SIZE];
    let mut distinct_sets: FxHashSet<LetterSet> = FxHashSet::default();
    let mut word_count = 0usize;

    for word in words {
        word_count += 1;

        let bytes = word.bytes();
        for &letter in &bytes[1..bytes.len() - 1] {
            if seen.insert(letter) {
                first_seen.push(letter);
            }
        }

        let interior = word.interior_letters();
        for letter in interior.iter() {
            occurrences[letter_slot(letter)] += 1;
        }
        distinct_sets.insert(interior);
    }

    if word_count < 2 {
        return LetterRanking::default();
    }

    let mut patterns = [0usize; ALPHABET_SIZE];
    for set in &distinct_sets {
        for letter in set.iter() {
            patterns[letter_slot(letter)] += 1;
        }
    }

    let mut entries: Vec<LetterScore> = first_seen
        .into_iter()
        .map(|letter| {
            let occurrences = occurrences[letter_slot(letter)];
            let patterns = patterns[letter_slot(letter)];
            LetterScore {
                letter,
                occurrences,
                patterns,
                score: occurrences as f64 / patterns as f64,
            }
        })
        .collect();

    // Stable: equal scores keep first-seen order
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));

    LetterRanking { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::words_from_slice;

    fn ranked(words: &[&str]) -> LetterRanking {
        score_letters(&words_from_slice(words))
    }

    #[test]
    fn empty_set_has_no_ranking() {
        let words: Vec<Word> = Vec::new();
        assert!(score_letters(&words).is_empty());
    }

    #[test]
    fn single_word_has_no_ranking() {
        assert!(ranked(&["garden"]).is_empty());
    }

    #[test]
    fn short_words_never_reach_the_scorer() {
        // Words of length <= 2 have no interior; they are rejected before scoring
        let words = words_from_slice(&["an", "be", "ox"]);
        assert!(words.is_empty());
        assert!(score_letters(&words).is_empty());
    }

    #[test]
    fn only_interior_letters_are_scored() {
        let ranking = ranked(&["cat", "cut", "cot"]);
        assert_eq!(ranking.len(), 3);
        assert!(ranking.score(b'c').is_none());
        assert!(ranking.score(b't').is_none());
        assert!(ranking.score(b'a').is_some());
    }

    #[test]
    fn edge_letter_repeated_inside_is_scored() {
        let ranking = ranked(&["tart", "test"]);
        assert!(ranking.score(b't').is_none());

        let ranking = ranked(&["state", "stats"]);
        // 't' sits at position 1 in both words
        assert!(ranking.score(b't').is_some());
    }

    #[test]
    fn duplicate_patterns_raise_usefulness() {
        // slats and salts share the interior set {a, l, t}; slots has {l, o, t}
        let ranking = ranked(&["slats", "salts", "slots"]);

        let a = ranking.entries().iter().find(|e| e.letter == b'a').unwrap();
        assert_eq!(a.occurrences, 2);
        assert_eq!(a.patterns, 1);
        assert!((a.score - 2.0).abs() < f64::EPSILON);

        let l = ranking.entries().iter().find(|e| e.letter == b'l').unwrap();
        assert_eq!(l.occurrences, 3);
        assert_eq!(l.patterns, 2);
        assert!((l.score - 1.5).abs() < f64::EPSILON);

        let o = ranking.entries().iter().find(|e| e.letter == b'o').unwrap();
        assert!((o.score - 1.0).abs() < f64::EPSILON);

        // a (2.0) > l, t (1.5) > o (1.0)
        let letters: Vec<u8> = ranking.letters().collect();
        assert_eq!(letters, b"alto");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranking = ranked(&["bun", "bin", "ban"]);
        let letters: Vec<u8> = ranking.letters().collect();
        assert_eq!(letters, b"uia");
    }

    #[test]
    fn first_seen_follows_positions_left_to_right() {
        // all letters tie at 1.0; order is r, o, w from "growl" then i from "grail"
        let ranking = ranked(&["growl", "grail"]);
        let letters: Vec<u8> = ranking.letters().collect();
        assert_eq!(letters, b"rowai");
    }

    #[test]
    fn scores_are_at_least_one() {
        let words = words_from_slice(&crate::corpus::WORDS[..200]);
        let ranking = score_letters(&words);
        assert!(!ranking.is_empty());
        for entry in ranking.entries() {
            assert!(entry.score >= 1.0, "{} scored {}", entry.letter as char, entry.score);
            assert!(entry.patterns <= entry.occurrences);
        }
    }

    #[test]
    fn ranking_is_sorted_descending() {
        let words = words_from_slice(&crate::corpus::WORDS[..300]);
        let ranking = score_letters(&words);
        for pair in ranking.entries().windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn scores_do_not_depend_on_word_order() {
        let forward = words_from_slice(&crate::corpus::WORDS[..150]);
        let mut backward = forward.clone();
        backward.reverse();

        let a = score_letters(&forward);
        let b = score_letters(&backward);

        assert_eq!(a.len(), b.len());
        for entry in a.entries() {
            let other = b.score(entry.letter).unwrap();
            assert!((entry.score - other).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn rescoring_is_idempotent() {
        let words = words_from_slice(&crate::corpus::WORDS[..150]);
        assert_eq!(score_letters(&words), score_letters(&words));
    }
}
