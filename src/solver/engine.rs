//! Hangman guess engine
//!
//! Plays one round against a known target: guesses interior letters one at a time
//! and narrows the candidate group until a single word is left or no useful
//! letter remains.

use super::policy::{FailurePolicy, LetterSelector};
use super::usefulness::LetterRanking;
use crate::core::{LetterSet, Word};

/// Outcome of one trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub wrong_attempts: u32,
    /// Set iff the trial failed under the engine's failure policy
    pub failed_word: Option<String>,
}

impl TrialResult {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.failed_word.is_some()
    }
}

/// A single guess made during a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: u8,
    /// Whether the letter occurs in the target
    pub hit: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Mutable state of a trial in progress
#[derive(Debug, Clone)]
pub struct TrialState<'a> {
    target: &'a Word,
    remaining: Vec<&'a Word>,
    guessed: LetterSet,
    known: LetterSet,
    wrong_attempts: u32,
    steps: Vec<GuessStep>,
    exhausted: bool,
}

impl<'a> TrialState<'a> {
    /// Start a trial: first and last letters are known, every group member is a candidate
    #[must_use]
    pub fn new(target: &'a Word, group: &[&'a Word]) -> Self {
        let known = [target.first(), target.last()].into_iter().collect();
        Self {
            target,
            remaining: group.to_vec(),
            guessed: LetterSet::EMPTY,
            known,
            wrong_attempts: 0,
            steps: Vec::new(),
            exhausted: false,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &'a Word {
        self.target
    }

    #[must_use]
    pub fn remaining(&self) -> &[&'a Word] {
        &self.remaining
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn known(&self) -> LetterSet {
        self.known
    }

    #[must_use]
    pub const fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    #[must_use]
    pub fn steps(&self) -> &[GuessStep] {
        &self.steps
    }

    /// True if guessing stopped because no eligible letter was left
    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// At most one candidate left
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.remaining.len() <= 1
    }

    /// Letters that may not be guessed again
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.known.union(self.guessed)
    }

    /// Apply a guess and record it
    ///
    /// Remaining candidates are always filtered down to words containing the
    /// letter in their interior, hit or miss.
    pub fn apply_guess(&mut self, letter: u8) -> GuessStep {
        debug_assert!(!self.excluded().contains(letter), "letter guessed twice");

        let candidates_before = self.remaining.len();
        self.guessed.insert(letter);

        let hit = self.target.has_letter(letter);
        if !hit {
            self.wrong_attempts += 1;
        }

        self.remaining.retain(|word| word.has_interior_letter(letter));

        if hit {
            self.known.insert(letter);
        }

        let step = GuessStep {
            letter,
            hit,
            candidates_before,
            candidates_after: self.remaining.len(),
        };
        self.steps.push(step);
        step
    }

    /// Close the trial under `policy`
    #[must_use]
    pub fn result(&self, policy: FailurePolicy) -> TrialResult {
        let failed = policy.is_failure(self.remaining.len(), self.wrong_attempts);
        TrialResult {
            wrong_attempts: self.wrong_attempts,
            failed_word: failed.then(|| self.target.text().to_string()),
        }
    }
}

/// Guess engine parameterized by a letter selector and a failure policy
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessEngine<S: LetterSelector> {
    selector: S,
    failure_policy: FailurePolicy,
}

impl<S: LetterSelector> GuessEngine<S> {
    /// Create a new engine
    ///
    /// # Parameters
    /// - `selector`: How the next letter is chosen
    /// - `failure_policy`: How a finished trial is judged
    pub const fn new(selector: S, failure_policy: FailurePolicy) -> Self {
        Self {
            selector,
            failure_policy,
        }
    }

    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Play one trial and return its outcome
    ///
    /// # Parameters
    /// - `target`: The hidden word
    /// - `group`: Words sharing the target's constraint key
    /// - `ranking`: Letter ranking to draw guesses from
    pub fn play(&self, target: &Word, group: &[&Word], ranking: &LetterRanking) -> TrialResult {
        self.trace(target, group, ranking)
            .result(self.failure_policy)
    }

    /// Play one trial and return the full final state, including every guess
    ///
    /// Each iteration guesses a letter not guessed before, so the loop runs at
    /// most 26 times.
    pub fn trace<'a>(
        &self,
        target: &'a Word,
        group: &[&'a Word],
        ranking: &LetterRanking,
    ) -> TrialState<'a> {
        let mut state = TrialState::new(target, group);

        while !state.is_resolved() {
            let Some(letter) =
                self.selector
                    .select_letter(ranking, state.excluded(), state.remaining())
            else {
                state.exhausted = true;
                break;
            };
            state.apply_guess(letter);
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET_SIZE;
    use crate::corpus::loader::words_from_slice;
    use crate::solver::{
        CandidateGroups, EliminationPolicy, MinimizeRemaining, RankedFirst, score_letters,
    };

    fn engine(policy: EliminationPolicy) -> GuessEngine<EliminationPolicy> {
        GuessEngine::new(policy, FailurePolicy::Unresolved)
    }

    #[test]
    fn singleton_group_needs_no_guess() {
        let words = words_from_slice(&["cat", "car", "can", "cup"]);
        let groups = CandidateGroups::build(&words);
        let target = &words[0];
        let group = groups.group_for(target).unwrap();
        assert_eq!(group.len(), 1);

        let ranking = score_letters(group.iter().copied());
        let state = engine(EliminationPolicy::RankedFirst).trace(target, group, &ranking);

        assert!(state.steps().is_empty());
        assert_eq!(state.result(FailurePolicy::Unresolved), TrialResult {
            wrong_attempts: 0,
            failed_word: None,
        });
    }

    #[test]
    fn three_way_group_resolves_in_one_miss_at_most() {
        let words = words_from_slice(&["bat", "bit", "but"]);
        let groups = CandidateGroups::build(&words);

        for policy in [EliminationPolicy::RankedFirst, EliminationPolicy::MinimizeRemaining] {
            for target in &words {
                let group = groups.group_for(target).unwrap();
                assert_eq!(group.len(), 3);
                let ranking = score_letters(group.iter().copied());

                let result = engine(policy).play(target, group, &ranking);
                assert!(result.wrong_attempts <= 1, "{target}: {result:?}");
                assert_eq!(result.failed_word, None);
            }
        }
    }

    #[test]
    fn hit_on_first_guess_costs_nothing() {
        let words = words_from_slice(&["bat", "bit", "but"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = score_letters(&words);

        let result = engine(EliminationPolicy::RankedFirst).play(&words[0], &refs, &ranking);
        assert_eq!(result.wrong_attempts, 0);
        assert!(!result.is_failure());
    }

    #[test]
    fn miss_still_filters_candidates() {
        let words = words_from_slice(&["bat", "bit", "but"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = score_letters(&words);

        // Target "but": first guess 'a' misses and leaves only "bat"
        let state = engine(EliminationPolicy::RankedFirst).trace(&words[2], &refs, &ranking);
        assert_eq!(state.steps().len(), 1);
        assert_eq!(state.steps()[0].letter, b'a');
        assert!(!state.steps()[0].hit);
        assert_eq!(state.remaining().len(), 1);
        assert_eq!(state.remaining()[0].text(), "bat");
        assert_eq!(state.wrong_attempts(), 1);
    }

    #[test]
    fn letter_absent_from_every_candidate_empties_the_group() {
        let words = words_from_slice(&["bat", "bit", "but", "cat", "slats", "salts"]);
        let groups = CandidateGroups::build(&words);
        let global = score_letters(&words);
        let target = &words[1];
        let group = groups.group_for(target).unwrap();

        // Global ranking is a, l, t, i, u; 'l' is in no b_t word, so it eliminates all three
        let state = engine(EliminationPolicy::MinimizeRemaining).trace(target, group, &global);
        assert_eq!(state.steps(), &[GuessStep {
            letter: b'l',
            hit: false,
            candidates_before: 3,
            candidates_after: 0,
        }]);
        assert!(state.remaining().is_empty());
        assert!(state.is_resolved());
        assert!(!state.exhausted());
        assert_eq!(state.result(FailurePolicy::Unresolved), TrialResult {
            wrong_attempts: 1,
            failed_word: None,
        });
    }

    #[test]
    fn exhausted_ranking_with_twins_fails() {
        // Identical interior letter sets: every guess hits both words
        let words = words_from_slice(&["slats", "salts"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = score_letters(&words);

        for policy in [EliminationPolicy::RankedFirst, EliminationPolicy::MinimizeRemaining] {
            let state = engine(policy).trace(&words[0], &refs, &ranking);
            assert!(state.exhausted());
            assert_eq!(state.remaining().len(), 2);
            assert_eq!(state.wrong_attempts(), 0);

            let result = state.result(FailurePolicy::Unresolved);
            assert_eq!(result.failed_word.as_deref(), Some("slats"));
        }
    }

    #[test]
    fn wrong_attempts_policy_ignores_unresolved_twins() {
        let words = words_from_slice(&["slats", "salts"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = score_letters(&words);

        let engine = GuessEngine::new(RankedFirst, FailurePolicy::ExceedsWrongAttempts(5));
        let result = engine.play(&words[1], &refs, &ranking);
        assert_eq!(result, TrialResult {
            wrong_attempts: 0,
            failed_word: None,
        });
    }

    #[test]
    fn wrong_attempts_policy_flags_costly_trials() {
        let words = words_from_slice(&["bat", "bit", "but"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = score_letters(&words);

        // "but" costs one miss under ranked-first
        let engine = GuessEngine::new(RankedFirst, FailurePolicy::ExceedsWrongAttempts(0));
        let result = engine.play(&words[2], &refs, &ranking);
        assert_eq!(result.failed_word.as_deref(), Some("but"));
    }

    #[test]
    fn known_edge_letters_are_never_guessed() {
        // 'e' is interior in "eerie" but already revealed in "elope"
        let words = words_from_slice(&["elope", "eerie", "evade"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = score_letters(&words);

        let state = GuessEngine::new(MinimizeRemaining, FailurePolicy::Unresolved)
            .trace(&words[0], &refs, &ranking);
        assert!(ranking.score(b'e').is_some());
        assert!(state.steps().iter().all(|step| step.letter != b'e'));
    }

    #[test]
    fn empty_ranking_stops_immediately() {
        let words = words_from_slice(&["bat", "bit"]);
        let refs: Vec<&Word> = words.iter().collect();
        let ranking = LetterRanking::default();

        let state = engine(EliminationPolicy::MinimizeRemaining).trace(&words[0], &refs, &ranking);
        assert!(state.exhausted());
        assert!(state.steps().is_empty());
        assert!(state.result(FailurePolicy::Unresolved).is_failure());
    }

    #[test]
    fn trial_invariants_hold_across_corpus() {
        let words = words_from_slice(crate::corpus::WORDS);
        let groups = CandidateGroups::build(&words);
        let global = score_letters(&words);

        for policy in [EliminationPolicy::RankedFirst, EliminationPolicy::MinimizeRemaining] {
            for target in &words {
                let group = groups.group_for(target).unwrap();
                let local = score_letters(group.iter().copied());

                for ranking in [&local, &global] {
                    let state = engine(policy).trace(target, group, ranking);
                    let steps = state.steps();

                    assert!(steps.len() <= ALPHABET_SIZE);

                    let mut previous = group.len();
                    for step in steps {
                        assert_eq!(step.candidates_before, previous);
                        assert!(step.candidates_after <= step.candidates_before);
                        assert_eq!(step.hit, target.has_letter(step.letter));
                        previous = step.candidates_after;
                    }

                    let misses = steps.iter().filter(|step| !step.hit).count();
                    assert_eq!(state.wrong_attempts() as usize, misses);

                    for word in state.remaining() {
                        assert!(group.contains(word));
                    }
                    for step in steps {
                        assert!(state.guessed().contains(step.letter));
                    }
                }
            }
        }
    }

    #[test]
    fn play_matches_trace() {
        let words = words_from_slice(&["sport", "short", "shirt", "skirt", "smart", "start"]);
        let groups = CandidateGroups::build(&words);
        let engine = engine(EliminationPolicy::MinimizeRemaining);

        for target in &words {
            let group = groups.group_for(target).unwrap();
            let ranking = score_letters(group.iter().copied());
            let traced = engine.trace(target, group, &ranking).result(FailurePolicy::Unresolved);
            assert_eq!(engine.play(target, group, &ranking), traced);
        }
    }
}
