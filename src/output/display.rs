//! Terminal output for the game
//!
//! All printing lives here; the core stays silent.

use super::art;
use crate::core::Round;
use crate::persist::Statistics;
use colored::Colorize;

/// Print the welcome banner
pub fn print_welcome() {
    println!("{}", art::WELCOME.bright_cyan());
    println!();
}

/// Print the category menu
///
/// Categories are numbered 1..n with an extra "all categories" entry.
pub fn print_categories(categories: &[(&str, usize)]) {
    println!("{}", "Available Categories:".bold());
    for (i, (name, count)) in categories.iter().enumerate() {
        println!("  {}. {} ({count} words)", i + 1, title_case(name));
    }
    println!("  {}. All Categories (Mixed)", categories.len() + 1);
    println!();
}

/// Announce the newly selected word
pub fn print_round_start(category: &str, word_length: usize, round_number: u32) {
    println!(
        "\nGame #{round_number}: new word from '{}' (length {word_length})",
        title_case(category).bright_yellow()
    );
    println!();
}

/// Print the full game state: masked word, guesses, attempts, gallows
pub fn print_game_state(round: &Round) {
    let guessed = round.guessed_letters();
    let guessed_display = if guessed.is_empty() {
        "None".to_string()
    } else {
        guessed
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("Word: {}", round.render().bold());
    println!("Guessed letters: {guessed_display}");
    println!("Remaining attempts: {}", round.remaining());
    println!();
    println!("{}", art::stage(round.wrong_count()));
    println!();
}

/// Feedback for a correct letter
pub fn print_correct_guess(letter: char, progress: &str) {
    println!(
        "{} '{}' is in the word.",
        "Correct!".green().bold(),
        letter.to_ascii_uppercase()
    );
    println!("Progress: {progress}");
    println!();
}

/// Feedback for a wrong letter
pub fn print_wrong_guess(letter: char, wrong_count: u32, max_wrong: u32) {
    println!(
        "{} '{}' is not in the word.",
        "Wrong!".red().bold(),
        letter.to_ascii_uppercase()
    );
    println!("Wrong guesses: {wrong_count}/{max_wrong}");
    println!();
}

/// Feedback for a repeated letter (never penalized)
pub fn print_repeated_guess(letter: char) {
    println!(
        "You already guessed '{}'. No penalty!",
        letter.to_ascii_uppercase()
    );
    println!();
}

/// Feedback for a correct full-word guess
pub fn print_correct_word_guess(word: &str) {
    println!(
        "{} You guessed the word '{}' correctly!",
        "Excellent!".green().bold(),
        word.to_uppercase()
    );
    println!();
}

/// Feedback for a wrong full-word guess
pub fn print_wrong_word_guess(guess: &str, wrong_count: u32, max_wrong: u32) {
    println!(
        "{} '{}' is not the correct word.",
        "Wrong!".red().bold(),
        guess.to_uppercase()
    );
    println!("Wrong guesses: {wrong_count}/{max_wrong}");
    println!();
}

/// Win screen with the round's points and the running total
pub fn print_win(word: &str, score: u32, total_score: u64) {
    println!("{}", art::WIN.bright_green().bold());
    println!("\nYou win! Word: {}", word.to_uppercase().bright_yellow());
    println!("Points earned this round: {}", score.to_string().bright_cyan());
    println!("Total score: {total_score}");
    println!();
}

/// Lose screen revealing the word
pub fn print_lose(word: &str, total_score: u64) {
    println!("{}", art::LOSE.bright_red().bold());
    println!("\nYou lose! The word was: {}", word.to_uppercase().bright_yellow());
    println!("Points earned this round: 0");
    println!("Total score: {total_score}");
    println!();
}

/// Statistics table
pub fn print_statistics(stats: &Statistics) {
    println!("{}", "=== GAME STATISTICS ===".bright_cyan().bold());
    println!("Games played: {}", stats.games_played);
    println!("Wins: {}", stats.wins.to_string().green());
    println!("Losses: {}", stats.losses.to_string().red());
    println!("Win rate: {:.2}%", stats.win_rate());
    println!("Average score per game: {:.1}", stats.average_score());
    println!("Total score: {}", stats.total_score);
    if let Some(last) = stats.last_played {
        println!("Last played: {}", last.format("%Y-%m-%d %H:%M:%S"));
    }
    println!();
}

/// Goodbye message
pub fn print_goodbye() {
    println!("\nThanks for playing Hangman! Goodbye! 👋\n");
}

/// Non-fatal warning (logging or statistics I/O trouble)
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "Warning:".yellow().bold());
}

/// Uppercase the first letter of a category name for display
fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
