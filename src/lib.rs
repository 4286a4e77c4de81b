//! Hangman
//!
//! A terminal word-guessing game with categories, scoring, per-round logs,
//! and persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Outcome, Round, TurnResult, WordEntry, score};
//!
//! let secret = WordEntry::new("cat", "animals").unwrap();
//! let mut round = Round::new(secret);
//!
//! assert_eq!(round.guess_letter('a').unwrap(), TurnResult::Correct);
//! assert_eq!(round.render(), "_ a _");
//!
//! round.guess_letter('c').unwrap();
//! round.guess_letter('t').unwrap();
//! assert_eq!(round.outcome(), Outcome::Win);
//! assert_eq!(score(3, 0, round.outcome()), 30);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Round logs and statistics
pub mod persist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
