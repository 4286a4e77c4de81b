//! Round scoring
//!
//! A pure function from (word length, wrong-guess count, outcome) to points.

use super::round::Outcome;

/// Points per letter of the secret word
const POINTS_PER_LETTER: u32 = 10;

/// Penalty per wrong guess
const WRONG_GUESS_PENALTY: u32 = 5;

/// Floor for any won round
const MINIMUM_WIN_SCORE: u32 = 10;

/// Compute the points earned for a finished round
///
/// A loss scores zero. A win scores `word_length * 10` minus 5 per wrong
/// guess, floored at 10.
///
/// # Examples
/// ```
/// use hangman::core::{Outcome, score};
///
/// assert_eq!(score(6, 2, Outcome::Win), 50);
/// assert_eq!(score(3, 0, Outcome::Win), 30);
/// assert_eq!(score(6, 2, Outcome::Loss), 0);
/// ```
#[must_use]
pub fn score(word_length: usize, wrong_count: u32, outcome: Outcome) -> u32 {
    if !matches!(outcome, Outcome::Win) {
        return 0;
    }

    let base = word_length as u32 * POINTS_PER_LETTER;
    let penalty = wrong_count * WRONG_GUESS_PENALTY;

    base.saturating_sub(penalty).max(MINIMUM_WIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_scores_zero() {
        assert_eq!(score(6, 6, Outcome::Loss), 0);
        assert_eq!(score(20, 0, Outcome::Loss), 0);
    }

    #[test]
    fn in_progress_scores_zero() {
        assert_eq!(score(6, 2, Outcome::InProgress), 0);
    }

    #[test]
    fn win_base_score() {
        // "python": 6 letters, 2 wrong => 60 - 10 = 50
        assert_eq!(score(6, 2, Outcome::Win), 50);
        // "cat": 3 letters, clean => 30
        assert_eq!(score(3, 0, Outcome::Win), 30);
    }

    #[test]
    fn win_score_floored_at_ten() {
        // 1 letter, 5 wrong => 10 - 25 would go negative
        assert_eq!(score(1, 5, Outcome::Win), 10);
        // 2 letters, 5 wrong => 20 - 25
        assert_eq!(score(2, 5, Outcome::Win), 10);
    }

    #[test]
    fn every_win_scores_at_least_ten() {
        for length in 1..=20 {
            for wrong in 0..=5 {
                assert!(score(length, wrong, Outcome::Win) >= 10);
            }
        }
    }
}
