//! Single-word trace command
//!
//! Plays one chosen target and returns every guess for display.

use crate::core::{ConstraintKey, Word, WordError};
use crate::corpus::Corpus;
use crate::solver::{
    CandidateGroups, EliminationPolicy, FailurePolicy, GuessEngine, GuessStep, LetterScore,
    RankingCache, RankingScope, TrialResult,
};
use thiserror::Error;

/// Configuration for tracing a word
pub struct TraceConfig {
    pub target: String,
    pub elimination_policy: EliminationPolicy,
    pub failure_policy: FailurePolicy,
    pub use_constraint_grouping: bool,
}

impl TraceConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            elimination_policy: EliminationPolicy::default(),
            failure_policy: FailurePolicy::default(),
            use_constraint_grouping: true,
        }
    }
}

/// Errors raised when a trace cannot start
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Invalid target word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Word '{0}' not in corpus")]
    NotInCorpus(String),
}

/// Result of tracing a word
pub struct TraceResult {
    pub target: String,
    pub key: ConstraintKey,
    pub group_size: usize,
    /// Ranking the guesses were drawn from
    pub ranking: Vec<LetterScore>,
    pub steps: Vec<GuessStep>,
    /// Candidates left when guessing stopped
    pub remaining: Vec<String>,
    /// Guessing stopped because no eligible letter was left
    pub exhausted: bool,
    pub result: TrialResult,
}

/// Play a single target word and record every guess
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (shorter than 3 letters or not ASCII letters)
/// - The target word is not in the corpus
pub fn trace_word(config: &TraceConfig, corpus: &Corpus) -> Result<TraceResult, TraceError> {
    let parsed = Word::new(config.target.trim())?;
    let target = corpus
        .find(parsed.text())
        .ok_or_else(|| TraceError::NotInCorpus(parsed.text().to_string()))?;

    let groups = CandidateGroups::build(corpus);
    let key = target.key();
    // The target is in the corpus, so its group exists
    let group = groups
        .get(key)
        .ok_or_else(|| TraceError::NotInCorpus(parsed.text().to_string()))?;

    let mut cache = RankingCache::new();
    let ranking = if config.use_constraint_grouping {
        cache.get_or_compute(RankingScope::Group(key), || group.iter().copied())
    } else {
        cache.get_or_compute(RankingScope::Global, || corpus)
    };

    let engine = GuessEngine::new(config.elimination_policy, config.failure_policy);
    let state = engine.trace(target, group, ranking);

    Ok(TraceResult {
        target: target.text().to_string(),
        key,
        group_size: group.len(),
        ranking: ranking.entries().to_vec(),
        steps: state.steps().to_vec(),
        remaining: state
            .remaining()
            .iter()
            .map(|word| word.text().to_string())
            .collect(),
        exhausted: state.exhausted(),
        result: state.result(config.failure_policy),
    })
}
