//! Hangman Simulator
//!
//! Measures how many wrong guesses a letter-ranking Hangman strategy needs,
//! playing against every word of a dictionary or a random sample of it. The
//! player always sees the first and last letter of the hidden word and its
//! length; candidates sharing those three facts form a constraint group.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_sim::commands::{SimulationConfig, run_simulation};
//! use hangman_sim::corpus::{Corpus, loader::words_from_slice};
//!
//! let corpus = Corpus::new(words_from_slice(&["bat", "bit", "but", "cat"]));
//! let config = SimulationConfig {
//!     shuffle: false,
//!     ..SimulationConfig::new(10)
//! };
//!
//! let report = run_simulation(&corpus, &config);
//! assert_eq!(report.played(), 4);
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod corpus;

// Letter ranking and guessing
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
