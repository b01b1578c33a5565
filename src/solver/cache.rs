//! Ranking cache
//!
//! Usefulness rankings are recomputed per candidate group, and many trials share
//! a group. The cache is owned by whoever drives the trials and passed in
//! explicitly; it is read-through on the sequential path and can be warmed up
//! front so parallel trials only read it.

use super::usefulness::{LetterRanking, score_letters};
use crate::core::{ConstraintKey, Word};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Word set a ranking was computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RankingScope {
    /// The whole corpus
    Global,
    /// One candidate group
    Group(ConstraintKey),
}

/// Memoized letter rankings keyed by scope
#[derive(Debug, Default)]
pub struct RankingCache {
    rankings: FxHashMap<RankingScope, LetterRanking>,
    hits: usize,
    misses: usize,
}

impl RankingCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached ranking for `scope`, scoring `words()` on a miss
    ///
    /// `words` is only called on a miss.
    pub fn get_or_compute<'w, F, I>(&mut self, scope: RankingScope, words: F) -> &LetterRanking
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = &'w Word>,
    {
        match self.rankings.entry(scope) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                entry.insert(score_letters(words()))
            }
        }
    }

    /// Read-only lookup
    #[must_use]
    pub fn get(&self, scope: RankingScope) -> Option<&LetterRanking> {
        self.rankings.get(&scope)
    }

    #[must_use]
    pub fn contains(&self, scope: RankingScope) -> bool {
        self.rankings.contains_key(&scope)
    }

    /// Store a ranking computed elsewhere
    pub fn insert(&mut self, scope: RankingScope, ranking: LetterRanking) {
        self.rankings.insert(scope, ranking);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// (hits, misses) of `get_or_compute`
    #[must_use]
    pub const fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
