//! Hangman guessing algorithms
//!
//! Letter usefulness scoring, candidate grouping, the ranking cache and the
//! guess engine with its pluggable policies.

pub mod cache;
mod engine;
pub mod grouping;
pub mod policy;
pub mod usefulness;

pub use cache::{RankingCache, RankingScope};
pub use engine::{GuessEngine, GuessStep, TrialResult, TrialState};
pub use grouping::CandidateGroups;
pub use policy::{
    EliminationPolicy, FailurePolicy, LetterSelector, MinimizeRemaining, RankedFirst,
};
pub use usefulness::{LetterRanking, LetterScore, score_letters};
