//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod round;
mod score;
mod word;

pub use round::{
    GuessError, GuessKind, MAX_WRONG_GUESSES, Outcome, Round, TurnRecord, TurnResult,
};
pub use score::score;
pub use word::{WordEntry, WordError};
