//! Command implementations

pub mod letters;
pub mod simulate;
pub mod trace;

pub use letters::{LetterSort, LetterStats, letter_statistics, sort_letters};
pub use simulate::{
    GroupSummary, SimulationConfig, SimulationError, SimulationReport, TrialRecord,
    run_simulation, run_targets, select_targets, simulate, write_failure_log,
};
pub use trace::{TraceConfig, TraceError, TraceResult, trace_word};
