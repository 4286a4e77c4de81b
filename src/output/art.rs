//! ASCII art assets
//!
//! Gallows drawings for each wrong-guess count (0-6) plus the banner art.

/// Gallows stages from 0 (no wrong guesses) to 6 (game over)
pub const STAGES: [&str; 7] = [
    r"
    +---+
    |   |
        |
        |
        |
        |
    =========",
    r"
    +---+
    |   |
    O   |
        |
        |
        |
    =========",
    r"
    +---+
    |   |
    O   |
    |   |
        |
        |
    =========",
    r"
    +---+
    |   |
    O   |
   /|   |
        |
        |
    =========",
    r"
    +---+
    |   |
    O   |
   /|\  |
        |
        |
    =========",
    r"
    +---+
    |   |
    O   |
   /|\  |
   /    |
        |
    =========",
    r"
    +---+
    |   |
    O   |
   /|\  |
   / \  |
        |
    =========",
];

/// Welcome banner
pub const WELCOME: &str = r"
╔══════════════════════════════╗
║        HANGMAN GAME          ║
║                              ║
║     Can you guess the        ║
║        word in time?         ║
╚══════════════════════════════╝";

/// Win celebration art
pub const WIN: &str = r"
  🎉 CONGRATULATIONS! 🎉
       You Won!";

/// Game-over art
pub const LOSE: &str = r"
   💀 GAME OVER 💀
      You Lost!";

/// Gallows drawing for the given wrong-guess count
///
/// Counts past the final stage show the final stage.
#[must_use]
pub fn stage(wrong_guesses: u32) -> &'static str {
    let index = (wrong_guesses as usize).min(STAGES.len() - 1);
    STAGES[index].trim_start_matches('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_WRONG_GUESSES;

    #[test]
    fn one_stage_per_wrong_guess_plus_start() {
        assert_eq!(STAGES.len() as u32, MAX_WRONG_GUESSES + 1);
    }

    #[test]
    fn stages_grow_monotonically() {
        // Each stage adds a body part, so drawings get strictly "fuller"
        for pair in STAGES.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn stage_clamps_out_of_range() {
        assert_eq!(stage(6), stage(99));
    }

    #[test]
    fn final_stage_is_complete_hangman() {
        let last = stage(MAX_WRONG_GUESSES);
        assert!(last.contains('O'));
        assert!(last.contains(r"/|\"));
        assert!(last.contains(r"/ \"));
    }
}
