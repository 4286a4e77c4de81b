//! The guess-state engine
//!
//! A `Round` holds the secret word, the set of guessed letters, and the
//! wrong-guess count, and applies single-letter or full-word guesses as
//! invariant-preserving state transitions. The outcome is always derived
//! from the current state, never stored.

use super::word::WordEntry;
use rustc_hash::FxHashSet;
use std::fmt;

/// Maximum number of wrong guesses before the round is lost
pub const MAX_WRONG_GUESSES: u32 = 6;

/// Placeholder shown for letters not yet guessed
const MASK: char = '_';

/// Derived state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win,
    Loss,
}

impl Outcome {
    /// True once the round has reached `Win` or `Loss`
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The letter is in the word, or the word guess matched
    Correct,
    /// The letter is not in the word, or the word guess missed
    Wrong,
    /// The letter was guessed before; recorded but never penalized
    AlreadyGuessed,
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "CORRECT"),
            Self::Wrong => write!(f, "WRONG"),
            Self::AlreadyGuessed => write!(f, "REPEATED"),
        }
    }
}

/// Whether a turn guessed a single letter or the full word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Letter,
    Word,
}

/// One accepted guess and its immediate result
///
/// Appended to the round's turn list, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: String,
    pub kind: GuessKind,
    pub result: TurnResult,
    /// Masked word as it stood after this turn
    pub revealed: String,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not a single ASCII letter (or an empty/non-alphabetic word guess)
    InvalidInput,
    /// A guess arrived after the round reached a terminal outcome
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Guess must be a single letter or an alphabetic word"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// State of one in-progress (or finished) round
///
/// Mutated exclusively through [`Round::guess_letter`] and
/// [`Round::guess_word`]; once [`Round::outcome`] is terminal, both reject
/// further guesses with [`GuessError::RoundOver`].
#[derive(Debug, Clone)]
pub struct Round {
    secret: WordEntry,
    guessed: FxHashSet<char>,
    wrong_count: u32,
    max_wrong: u32,
    turns: Vec<TurnRecord>,
}

impl Round {
    /// Start a new round over the given secret word
    #[must_use]
    pub fn new(secret: WordEntry) -> Self {
        Self {
            secret,
            guessed: FxHashSet::default(),
            wrong_count: 0,
            max_wrong: MAX_WRONG_GUESSES,
            turns: Vec::new(),
        }
    }

    /// Apply a single-letter guess
    ///
    /// Repeated letters are accepted and recorded but never penalized.
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` if the round already ended, or
    /// `GuessError::InvalidInput` if `c` is not an ASCII letter. Neither
    /// changes any state.
    pub fn guess_letter(&mut self, c: char) -> Result<TurnResult, GuessError> {
        if self.outcome().is_terminal() {
            return Err(GuessError::RoundOver);
        }

        if !c.is_ascii_alphabetic() {
            return Err(GuessError::InvalidInput);
        }
        let c = c.to_ascii_lowercase();

        let result = if self.guessed.contains(&c) {
            TurnResult::AlreadyGuessed
        } else {
            self.guessed.insert(c);
            if self.secret.has_letter(c) {
                TurnResult::Correct
            } else {
                self.wrong_count += 1;
                TurnResult::Wrong
            }
        };

        self.push_turn(c.to_string(), GuessKind::Letter, result);
        Ok(result)
    }

    /// Apply a full-word guess
    ///
    /// A case-insensitive exact match wins the round immediately, revealing
    /// every letter; a miss costs one wrong guess.
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` if the round already ended, or
    /// `GuessError::InvalidInput` if `w` is empty or contains non-letters.
    /// Neither changes any state.
    pub fn guess_word(&mut self, w: &str) -> Result<TurnResult, GuessError> {
        if self.outcome().is_terminal() {
            return Err(GuessError::RoundOver);
        }

        let w = w.trim().to_lowercase();
        if w.is_empty() || !w.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GuessError::InvalidInput);
        }

        let result = if w == self.secret.word() {
            // Reveal everything so render() and the win check agree
            self.guessed.extend(self.secret.letters().iter().copied());
            TurnResult::Correct
        } else {
            self.wrong_count += 1;
            TurnResult::Wrong
        };

        self.push_turn(w, GuessKind::Word, result);
        Ok(result)
    }

    /// Derive the current outcome
    ///
    /// The win check runs first: completing the word on the same turn that
    /// reaches the wrong-guess limit still counts as a win.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self
            .secret
            .letters()
            .iter()
            .all(|c| self.guessed.contains(c))
        {
            Outcome::Win
        } else if self.wrong_count >= self.max_wrong {
            Outcome::Loss
        } else {
            Outcome::InProgress
        }
    }

    /// The masked word: guessed letters shown, the rest as `_`
    ///
    /// Letters are space-joined, e.g. `_ y _ h _ n`.
    #[must_use]
    pub fn render(&self) -> String {
        let shown: Vec<String> = self
            .secret
            .word()
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    MASK.to_string()
                }
            })
            .collect();
        shown.join(" ")
    }

    /// All guessed letters, sorted for display
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Guessed letters that are not in the secret word, sorted
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .guessed
            .iter()
            .copied()
            .filter(|&c| !self.secret.has_letter(c))
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Number of wrong guesses so far
    #[inline]
    #[must_use]
    pub const fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Wrong guesses allowed before the round is lost
    #[inline]
    #[must_use]
    pub const fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    /// Wrong guesses remaining
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max_wrong - self.wrong_count
    }

    /// The turn history, in guess order
    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// The secret word for this round
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &WordEntry {
        &self.secret
    }

    fn push_turn(&mut self, guess: String, kind: GuessKind, result: TurnResult) {
        let revealed = self.render();
        self.turns.push(TurnRecord {
            guess,
            kind,
            result,
            revealed,
        });
    }
}
