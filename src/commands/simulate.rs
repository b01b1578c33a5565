//! Simulation driver
//!
//! Plays the guess engine against many target words drawn from a corpus and
//! aggregates wrong-attempt statistics.

use crate::core::{ConstraintKey, Word};
use crate::corpus::{Corpus, CorpusError, loader};
use crate::solver::{
    CandidateGroups, EliminationPolicy, FailurePolicy, GuessEngine, LetterRanking,
    LetterSelector, RankingCache, RankingScope, score_letters,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Word list to load; `None` uses the embedded dictionary
    pub corpus_path: Option<PathBuf>,
    /// Number of target words to play (clamped to the corpus size)
    pub trial_count: usize,
    /// Trials with more wrong attempts than this are counted as costly
    pub wrong_attempt_threshold: u32,
    /// Rank letters per constraint group instead of over the whole corpus
    pub use_constraint_grouping: bool,
    pub elimination_policy: EliminationPolicy,
    pub failure_policy: FailurePolicy,
    /// Sample targets from a shuffled corpus instead of corpus order
    pub shuffle: bool,
    /// Seed for the shuffle; `None` draws a fresh seed
    pub seed: Option<u64>,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
    /// File to write failed words to, one per line (overwritten)
    pub failure_log: Option<PathBuf>,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            trial_count: 1000,
            wrong_attempt_threshold: 5,
            use_constraint_grouping: true,
            elimination_policy: EliminationPolicy::default(),
            failure_policy: FailurePolicy::default(),
            shuffle: true,
            seed: None,
            parallel: false,
            failure_log: None,
            show_progress: false,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(trial_count: usize) -> Self {
        Self {
            trial_count,
            ..Self::default()
        }
    }

    /// Load the configured corpus
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if the corpus file cannot be read or holds no usable word.
    pub fn load_corpus(&self) -> Result<Corpus, CorpusError> {
        match &self.corpus_path {
            Some(path) => loader::load_from_file(path),
            None => Ok(Corpus::embedded()),
        }
    }

    fn scope_for(&self, target: &Word) -> RankingScope {
        if self.use_constraint_grouping {
            RankingScope::Group(target.key())
        } else {
            RankingScope::Global
        }
    }
}

/// Errors raised while running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    /// The target's key has no group; the trial is skipped
    #[error("no candidate group for {0}")]
    EmptyGroup(ConstraintKey),
    #[error("failed to write failure log {}: {source}", .path.display())]
    FailureLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of one played trial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRecord {
    /// Position among played trials
    pub index: usize,
    pub target: String,
    pub key: ConstraintKey,
    pub group_size: usize,
    pub wrong_attempts: u32,
    pub failed: bool,
}

/// Aggregate over all trials sharing a constraint key
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub key: ConstraintKey,
    pub group_size: usize,
    pub trials: usize,
    pub total_wrong: u32,
    /// Σ wrong attempts / group size, the per-key heat value
    pub weighted_wrong: f64,
}

impl GroupSummary {
    #[must_use]
    pub fn mean_wrong(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.total_wrong) / self.trials as f64
        }
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub trials: Vec<TrialRecord>,
    /// Targets of failed trials, in play order
    pub failed_words: Vec<String>,
    /// Targets skipped because no group matched them
    pub skipped: usize,
    pub threshold: u32,
    /// Trials with wrong attempts above `threshold`
    pub above_threshold: usize,
    pub mean_wrong_attempts: f64,
    pub above_threshold_percentage: f64,
    /// Wrong attempts → number of trials
    pub distribution: BTreeMap<u32, usize>,
    /// Per-key aggregates, sorted by key
    pub groups: Vec<GroupSummary>,
    pub rankings_computed: usize,
    pub duration: Duration,
}

impl SimulationReport {
    /// (trial index, wrong attempts) series
    #[must_use]
    pub fn wrong_attempt_series(&self) -> Vec<(usize, u32)> {
        self.trials
            .iter()
            .map(|trial| (trial.index, trial.wrong_attempts))
            .collect()
    }

    #[must_use]
    pub fn played(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub fn max_wrong_attempts(&self) -> u32 {
        self.trials
            .iter()
            .map(|trial| trial.wrong_attempts)
            .max()
            .unwrap_or(0)
    }
}

/// Pick the target words for a run
///
/// Sampling is without replacement: the corpus is shuffled (if configured) and
/// the first `trial_count` words are taken.
#[must_use]
pub fn select_targets<'a>(corpus: &'a Corpus, config: &SimulationConfig) -> Vec<&'a Word> {
    let mut targets: Vec<&Word> = corpus.iter().collect();

    if config.shuffle {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        targets.shuffle(&mut rng);
    }

    targets.truncate(config.trial_count);
    targets
}

/// Load the corpus, run the simulation and write the failure log
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or the failure log cannot be written.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    let corpus = config.load_corpus()?;
    let report = run_simulation(&corpus, config);

    if let Some(path) = &config.failure_log {
        write_failure_log(path, &report.failed_words)?;
    }

    Ok(report)
}

/// Run a simulation over targets sampled from `corpus`
#[must_use]
pub fn run_simulation(corpus: &Corpus, config: &SimulationConfig) -> SimulationReport {
    let targets = select_targets(corpus, config);
    run_targets(corpus, &targets, config)
}

/// Run one trial per target against `corpus`
///
/// Targets whose constraint key has no group in the corpus are skipped.
#[must_use]
pub fn run_targets(
    corpus: &Corpus,
    targets: &[&Word],
    config: &SimulationConfig,
) -> SimulationReport {
    let start = Instant::now();
    let groups = CandidateGroups::build(corpus);
    let engine = GuessEngine::new(config.elimination_policy, config.failure_policy);
    let mut cache = RankingCache::new();

    let pb = progress_bar(targets.len(), config.show_progress);

    let outcomes: Vec<Result<TrialRecord, SimulationError>> = if config.parallel {
        warm_cache(&mut cache, corpus, &groups, targets, config);

        targets
            .par_iter()
            .map(|&target| {
                let outcome = play_cached(&engine, target, &groups, &cache, config);
                pb.inc(1);
                outcome
            })
            .collect()
    } else {
        let mut outcomes = Vec::with_capacity(targets.len());
        let mut total_wrong = 0u64;

        for (idx, &target) in targets.iter().enumerate() {
            let outcome = play_through_cache(&engine, target, &groups, &mut cache, corpus, config);
            if let Ok(record) = &outcome {
                total_wrong += u64::from(record.wrong_attempts);
            }
            outcomes.push(outcome);

            if idx % 50 == 0 {
                let avg = total_wrong as f64 / (idx + 1) as f64;
                pb.set_message(format!("Avg wrong: {avg:.2}"));
            }
            pb.inc(1);
        }
        outcomes
    };

    pb.finish_with_message("Complete!");

    summarize(outcomes, config.wrong_attempt_threshold, cache.len(), start.elapsed())
}

/// Write failed words to `path`, one per line, replacing any previous file
///
/// # Errors
///
/// Returns `SimulationError::FailureLog` on any I/O failure.
pub fn write_failure_log(path: &Path, failed_words: &[String]) -> Result<(), SimulationError> {
    let to_error = |source| SimulationError::FailureLog {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(to_error)?);
    for word in failed_words {
        writeln!(out, "{word}").map_err(to_error)?;
    }
    out.flush().map_err(to_error)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Sequential path: rankings are computed on first use
fn play_through_cache<S: LetterSelector>(
    engine: &GuessEngine<S>,
    target: &Word,
    groups: &CandidateGroups<'_>,
    cache: &mut RankingCache,
    corpus: &Corpus,
    config: &SimulationConfig,
) -> Result<TrialRecord, SimulationError> {
    let key = target.key();
    let group = groups.get(key).ok_or(SimulationError::EmptyGroup(key))?;

    let ranking = match config.scope_for(target) {
        RankingScope::Global => cache.get_or_compute(RankingScope::Global, || corpus),
        scope @ RankingScope::Group(_) => cache.get_or_compute(scope, || group.iter().copied()),
    };

    Ok(record_trial(engine, target, group, ranking))
}

/// Parallel path: the cache was warmed beforehand and is only read
fn play_cached<S: LetterSelector>(
    engine: &GuessEngine<S>,
    target: &Word,
    groups: &CandidateGroups<'_>,
    cache: &RankingCache,
    config: &SimulationConfig,
) -> Result<TrialRecord, SimulationError> {
    let key = target.key();
    let group = groups.get(key).ok_or(SimulationError::EmptyGroup(key))?;
    // `warm_cache` scored every scope whose group exists, so with the group found
    // above the lookup cannot miss; a miss still means this key had nothing to rank
    let ranking = cache
        .get(config.scope_for(target))
        .ok_or(SimulationError::EmptyGroup(key))?;

    Ok(record_trial(engine, target, group, ranking))
}

/// Score every scope the targets need, in parallel, before any trial runs
fn warm_cache(
    cache: &mut RankingCache,
    corpus: &Corpus,
    groups: &CandidateGroups<'_>,
    targets: &[&Word],
    config: &SimulationConfig,
) {
    let mut scopes: Vec<RankingScope> = targets
        .iter()
        .map(|target| config.scope_for(target))
        .filter(|&scope| !cache.contains(scope))
        .collect();
    scopes.sort_unstable();
    scopes.dedup();

    let computed: Vec<(RankingScope, LetterRanking)> = scopes
        .par_iter()
        .filter_map(|&scope| {
            let ranking = match scope {
                RankingScope::Global => score_letters(corpus),
                RankingScope::Group(key) => score_letters(groups.get(key)?.iter().copied()),
            };
            Some((scope, ranking))
        })
        .collect();

    for (scope, ranking) in computed {
        cache.insert(scope, ranking);
    }
}

fn record_trial<S: LetterSelector>(
    engine: &GuessEngine<S>,
    target: &Word,
    group: &[&Word],
    ranking: &LetterRanking,
) -> TrialRecord {
    let result = engine.play(target, group, ranking);
    TrialRecord {
        index: 0,
        target: target.text().to_string(),
        key: target.key(),
        group_size: group.len(),
        wrong_attempts: result.wrong_attempts,
        failed: result.is_failure(),
    }
}

fn summarize(
    outcomes: Vec<Result<TrialRecord, SimulationError>>,
    threshold: u32,
    rankings_computed: usize,
    duration: Duration,
) -> SimulationReport {
    let mut trials: Vec<TrialRecord> = Vec::with_capacity(outcomes.len());
    let mut skipped = 0;

    for outcome in outcomes {
        match outcome {
            Ok(mut record) => {
                record.index = trials.len();
                trials.push(record);
            }
            Err(_) => skipped += 1,
        }
    }

    let failed_words: Vec<String> = trials
        .iter()
        .filter(|trial| trial.failed)
        .map(|trial| trial.target.clone())
        .collect();

    let above_threshold = trials
        .iter()
        .filter(|trial| trial.wrong_attempts > threshold)
        .count();

    let played = trials.len();
    let (mean_wrong_attempts, above_threshold_percentage) = if played > 0 {
        let total: u64 = trials.iter().map(|t| u64::from(t.wrong_attempts)).sum();
        (
            total as f64 / played as f64,
            above_threshold as f64 / played as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut by_key: FxHashMap<ConstraintKey, GroupSummary> = FxHashMap::default();

    for trial in &trials {
        *distribution.entry(trial.wrong_attempts).or_insert(0) += 1;

        let summary = by_key.entry(trial.key).or_insert_with(|| GroupSummary {
            key: trial.key,
            group_size: trial.group_size,
            trials: 0,
            total_wrong: 0,
            weighted_wrong: 0.0,
        });
        summary.trials += 1;
        summary.total_wrong += trial.wrong_attempts;
        summary.weighted_wrong += f64::from(trial.wrong_attempts) / trial.group_size as f64;
    }

    let mut groups: Vec<GroupSummary> = by_key.into_values().collect();
    groups.sort_by_key(|summary| summary.key);

    SimulationReport {
        trials,
        failed_words,
        skipped,
        threshold,
        above_threshold,
        mean_wrong_attempts,
        above_threshold_percentage,
        distribution,
        groups,
        rankings_computed,
        duration,
    }
}
