//! Guess selection and failure policies
//!
//! Defines the `LetterSelector` trait, the two concrete elimination strategies,
//! and the rule deciding whether a finished trial counts as a failure.

use super::usefulness::LetterRanking;
use crate::core::{LetterSet, Word};

/// A strategy for picking the next letter to guess
pub trait LetterSelector {
    /// Select the next letter from `ranking`, skipping letters in `excluded`
    ///
    /// Returns `None` when every ranked letter is excluded.
    fn select_letter(
        &self,
        ranking: &LetterRanking,
        excluded: LetterSet,
        remaining: &[&Word],
    ) -> Option<u8>;
}

/// Always guess the most useful letter not yet known or guessed
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedFirst;

impl LetterSelector for RankedFirst {
    fn select_letter(
        &self,
        ranking: &LetterRanking,
        excluded: LetterSet,
        _remaining: &[&Word],
    ) -> Option<u8> {
        ranking.letters().find(|&letter| !excluded.contains(letter))
    }
}

/// Guess the letter that leaves the fewest candidates standing
///
/// Candidates are filtered down to words containing the guessed letter in their
/// interior, so the letter matched by the fewest remaining words shrinks the set
/// the most. Ties go to the earlier-ranked letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimizeRemaining;

impl MinimizeRemaining {
    /// Number of remaining words containing `letter` in an interior position
    #[must_use]
    pub fn elimination_power(letter: u8, remaining: &[&Word]) -> usize {
        remaining
            .iter()
            .filter(|word| word.has_interior_letter(letter))
            .count()
    }
}

impl LetterSelector for MinimizeRemaining {
    fn select_letter(
        &self,
        ranking: &LetterRanking,
        excluded: LetterSet,
        remaining: &[&Word],
    ) -> Option<u8> {
        let mut best: Option<(u8, usize)> = None;

        for letter in ranking.letters().filter(|&l| !excluded.contains(l)) {
            let matches = Self::elimination_power(letter, remaining);
            // Strict comparison keeps the earlier-ranked letter on ties
            if best.is_none_or(|(_, fewest)| matches < fewest) {
                best = Some((letter, matches));
            }
        }

        best.map(|(letter, _)| letter)
    }
}

/// Runtime choice of elimination strategy
///
/// Allows runtime selection while keeping static dispatch in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EliminationPolicy {
    /// First eligible letter in usefulness order
    RankedFirst,
    /// Eligible letter matched by the fewest remaining candidates
    #[default]
    MinimizeRemaining,
}

impl LetterSelector for EliminationPolicy {
    fn select_letter(
        &self,
        ranking: &LetterRanking,
        excluded: LetterSet,
        remaining: &[&Word],
    ) -> Option<u8> {
        match self {
            Self::RankedFirst => RankedFirst.select_letter(ranking, excluded, remaining),
            Self::MinimizeRemaining => {
                MinimizeRemaining.select_letter(ranking, excluded, remaining)
            }
        }
    }
}

impl EliminationPolicy {
    /// Parse a policy name
    ///
    /// Supported names: "ranked-first", "ranked", "minimize-remaining", "greedy"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ranked-first" | "ranked" => Some(Self::RankedFirst),
            "minimize-remaining" | "greedy" => Some(Self::MinimizeRemaining),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RankedFirst => "ranked-first",
            Self::MinimizeRemaining => "minimize-remaining",
        }
    }
}

/// Rule for judging a finished trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Failed if more than one candidate is left when guessing stops
    #[default]
    Unresolved,
    /// Failed if wrong attempts exceed the limit, however the candidates ended up
    ExceedsWrongAttempts(u32),
}

impl FailurePolicy {
    /// Judge a trial from its final candidate count and wrong attempts
    #[must_use]
    pub const fn is_failure(self, remaining: usize, wrong_attempts: u32) -> bool {
        match self {
            Self::Unresolved => remaining > 1,
            Self::ExceedsWrongAttempts(limit) => wrong_attempts > limit,
        }
    }

    /// Parse a policy name; `limit` is used by the wrong-attempts rule
    ///
    /// Supported names: "unresolved", "wrong-attempts"
    #[must_use]
    pub fn from_name(name: &str, limit: u32) -> Option<Self> {
        match name {
            "unresolved" => Some(Self::Unresolved),
            "wrong-attempts" => Some(Self::ExceedsWrongAttempts(limit)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::ExceedsWrongAttempts(_) => "wrong-attempts",
        }
    }
}
