//! Hangman Simulator - CLI
//!
//! Runs guessing simulations over a dictionary, traces single words, and
//! prints letter statistics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_sim::{
    commands::{
        LetterSort, SimulationConfig, TraceConfig, letter_statistics, simulate, sort_letters,
        trace_word,
    },
    corpus::{Corpus, loader::load_from_file},
    output::{print_letter_statistics, print_simulation_report, print_trace_result},
    solver::{EliminationPolicy, FailurePolicy},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_sim",
    about = "Hangman guessing simulator using constraint-grouped letter rankings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Guess policy: minimize-remaining (default, alias greedy) or ranked-first (alias ranked)
    #[arg(short, long, global = true, default_value = "minimize-remaining")]
    policy: String,

    /// Failure rule: unresolved (default) or wrong-attempts
    #[arg(long, global = true, default_value = "unresolved")]
    failure: String,

    /// Wrong attempts tolerated before a trial counts as costly
    #[arg(short, long, global = true, default_value = "5")]
    threshold: u32,

    /// Rank letters over the whole corpus instead of per constraint group
    #[arg(long, global = true)]
    global_ranking: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play many trials and report wrong-attempt statistics (default)
    Simulate {
        /// Number of target words to play
        #[arg(short = 'n', long, default_value = "1000")]
        trials: usize,

        /// Seed for target sampling
        #[arg(short, long)]
        seed: Option<u64>,

        /// Play targets in dictionary order instead of sampling
        #[arg(long)]
        in_order: bool,

        /// Run trials in parallel
        #[arg(long)]
        parallel: bool,

        /// Write failed words to this file
        #[arg(short = 'o', long)]
        failed_log: Option<PathBuf>,
    },

    /// Show every guess made for one word
    Trace {
        /// The target word
        word: String,

        /// Show the letter ranking and candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print per-letter frequency statistics
    Letters {
        /// Sort by: total (default), unique, average, interior, usefulness
        #[arg(long, default_value = "total")]
        sort: String,
    },
}

/// Policies and ranking scope shared by every subcommand
struct PlayOptions {
    elimination_policy: EliminationPolicy,
    failure_policy: FailurePolicy,
    use_constraint_grouping: bool,
}

impl PlayOptions {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let Some(elimination_policy) = EliminationPolicy::from_name(&cli.policy) else {
            bail!("Unknown guess policy '{}'", cli.policy);
        };
        let Some(failure_policy) = FailurePolicy::from_name(&cli.failure, cli.threshold) else {
            bail!("Unknown failure rule '{}'", cli.failure);
        };

        Ok(Self {
            elimination_policy,
            failure_policy,
            use_constraint_grouping: !cli.global_ranking,
        })
    }
}

/// Resolve the -w flag to a corpus file, `None` meaning the embedded dictionary
fn wordlist_path(wordlist: &str) -> Option<PathBuf> {
    match wordlist {
        "embedded" => None,
        path => Some(PathBuf::from(path)),
    }
}

fn load_corpus(wordlist: &str) -> Result<Corpus> {
    match wordlist_path(wordlist) {
        Some(path) => load_from_file(&path)
            .with_context(|| format!("Failed to load wordlist {}", path.display())),
        None => Ok(Corpus::embedded()),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let options = PlayOptions::from_cli(&cli)?;

    // Default to a full simulation if no command given
    let command = cli.command.take().unwrap_or(Commands::Simulate {
        trials: 1000,
        seed: None,
        in_order: false,
        parallel: false,
        failed_log: None,
    });

    match command {
        Commands::Simulate {
            trials,
            seed,
            in_order,
            parallel,
            failed_log,
        } => {
            let config = SimulationConfig {
                corpus_path: wordlist_path(&cli.wordlist),
                trial_count: trials,
                wrong_attempt_threshold: cli.threshold,
                use_constraint_grouping: options.use_constraint_grouping,
                elimination_policy: options.elimination_policy,
                failure_policy: options.failure_policy,
                shuffle: !in_order,
                seed,
                parallel,
                failure_log: failed_log,
                show_progress: true,
            };
            run_simulate_command(&config)
        }
        Commands::Trace { word, verbose } => {
            run_trace_command(&cli.wordlist, word, verbose, &options)
        }
        Commands::Letters { sort } => run_letters_command(&cli.wordlist, &sort),
    }
}

fn run_simulate_command(config: &SimulationConfig) -> Result<()> {
    println!(
        "Running {} trials with the {} policy...",
        config.trial_count,
        config.elimination_policy.name()
    );

    let report = simulate(config).context("Simulation failed")?;
    print_simulation_report(&report, config);

    if let Some(path) = &config.failure_log {
        println!("\nFailed words written to {}", path.display());
    }
    Ok(())
}

fn run_trace_command(
    wordlist: &str,
    word: String,
    verbose: bool,
    options: &PlayOptions,
) -> Result<()> {
    let corpus = load_corpus(wordlist)?;
    let config = TraceConfig {
        target: word,
        elimination_policy: options.elimination_policy,
        failure_policy: options.failure_policy,
        use_constraint_grouping: options.use_constraint_grouping,
    };

    let result = trace_word(&config, &corpus)?;
    print_trace_result(&result, verbose);
    Ok(())
}

fn run_letters_command(wordlist: &str, sort_name: &str) -> Result<()> {
    let Some(sort) = LetterSort::from_name(sort_name) else {
        bail!("Unknown sort order '{sort_name}'");
    };

    let corpus = load_corpus(wordlist)?;
    let mut stats = letter_statistics(corpus.words());
    sort_letters(&mut stats, sort);

    print_letter_statistics(&stats, sort, corpus.len());
    Ok(())
}
