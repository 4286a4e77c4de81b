//! Interactive game loop
//!
//! Text-based prompt loop: pick a category, guess letters or the full
//! word, then see the score fold into the persisted statistics.

use crate::core::{GuessError, Outcome, Round, TurnResult, score};
use crate::output::display;
use crate::persist::{RoundLog, StatsStore};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Where a round's artifacts go
pub struct PlayConfig {
    /// Category to draw from every round; `None` prompts per round
    pub category: Option<String>,
    /// Directory for per-round log files
    pub log_dir: PathBuf,
    /// Path of the statistics JSON file
    pub stats_path: PathBuf,
}

/// How one round ended
enum RoundEnd {
    /// Played to a win or loss
    Finished,
    /// Player quit mid-round; nothing scored or recorded
    Aborted,
}

/// Player's category pick
enum CategoryChoice {
    Named(String),
    All,
    Quit,
}

/// Run the interactive game until the player quits
///
/// # Errors
/// Returns an error when no word list can be resolved for a round (fatal)
/// or when reading user input fails. Logging and statistics failures are
/// reported as warnings and never abort play.
pub fn run_play(source: &WordSource, config: &PlayConfig) -> Result<()> {
    display::print_welcome();

    let store = StatsStore::new(&config.stats_path);
    let mut rng = rand::rng();

    loop {
        let category = match &config.category {
            Some(name) => CategoryChoice::Named(name.clone()),
            None => prompt_category(source)?,
        };

        let category = match category {
            CategoryChoice::Quit => break,
            CategoryChoice::All => None,
            CategoryChoice::Named(name) => Some(name),
        };

        let secret = source
            .select(category.as_deref(), &mut rng)
            .context("Could not start a round")?;

        match play_round(Round::new(secret), config, &store)? {
            RoundEnd::Aborted => break,
            RoundEnd::Finished => {}
        }

        if !prompt_play_again()? {
            break;
        }
    }

    display::print_goodbye();
    Ok(())
}

/// Play a single round to completion (or abort on quit)
fn play_round(mut round: Round, config: &PlayConfig, store: &StatsStore) -> Result<RoundEnd> {
    // Log trouble is non-fatal: warn once and play without a log
    let mut log = match RoundLog::create(&config.log_dir, round.secret()) {
        Ok(log) => Some(log),
        Err(e) => {
            display::print_warning(&format!("Could not create round log ({e})"));
            None
        }
    };
    let round_number = log.as_ref().map_or(0, RoundLog::round_number);

    display::print_round_start(round.secret().category(), round.secret().len(), round_number);
    let started = Instant::now();

    while !round.outcome().is_terminal() {
        display::print_game_state(&round);

        let input = prompt("Enter a letter (or 'guess' for the full word, 'quit' to exit)")?;
        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(RoundEnd::Aborted),
            "guess" => {
                let word = prompt("Enter your guess for the full word")?;
                if matches!(word.as_str(), "quit" | "q" | "exit") {
                    return Ok(RoundEnd::Aborted);
                }
                apply_word_guess(&mut round, &word, &mut log);
            }
            _ => apply_letter_guess(&mut round, &input, &mut log),
        }
    }

    finish_round(&round, started.elapsed(), &mut log, store);
    Ok(RoundEnd::Finished)
}

fn apply_letter_guess(round: &mut Round, input: &str, log: &mut Option<RoundLog>) {
    let mut chars = input.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        println!("Please enter a single letter, or 'guess' for the full word.\n");
        return;
    };

    match round.guess_letter(letter) {
        Ok(TurnResult::Correct) => display::print_correct_guess(letter, &round.render()),
        Ok(TurnResult::Wrong) => {
            display::print_wrong_guess(letter, round.wrong_count(), round.max_wrong());
        }
        Ok(TurnResult::AlreadyGuessed) => display::print_repeated_guess(letter),
        Err(GuessError::InvalidInput) => {
            println!("Please enter a letter (a-z).\n");
            return;
        }
        Err(GuessError::RoundOver) => return,
    }

    log_last_turn(round, log);
}

fn apply_word_guess(round: &mut Round, word: &str, log: &mut Option<RoundLog>) {
    match round.guess_word(word) {
        Ok(TurnResult::Correct | TurnResult::AlreadyGuessed) => {
            display::print_correct_word_guess(word);
        }
        Ok(TurnResult::Wrong) => {
            display::print_wrong_word_guess(word, round.wrong_count(), round.max_wrong());
        }
        Err(GuessError::InvalidInput) => {
            println!("Please enter a word (letters only).\n");
            return;
        }
        Err(GuessError::RoundOver) => return,
    }

    log_last_turn(round, log);
}

fn log_last_turn(round: &Round, log: &mut Option<RoundLog>) {
    let Some(turn) = round.turns().last() else {
        return;
    };
    // Drop the log on the first write failure; warn once, keep playing
    if let Some(mut open) = log.take() {
        match open.record_turn(turn, round.wrong_count(), round.max_wrong()) {
            Ok(()) => *log = Some(open),
            Err(e) => display::print_warning(&format!("Could not write round log ({e})")),
        }
    }
}

/// Score the finished round, persist, and show the results
fn finish_round(
    round: &Round,
    duration: std::time::Duration,
    log: &mut Option<RoundLog>,
    store: &StatsStore,
) {
    let outcome = round.outcome();
    let points = score(round.secret().len(), round.wrong_count(), outcome);

    // Statistics trouble is non-fatal: show this round against the
    // in-memory aggregate instead
    let stats = store.record(outcome, points).unwrap_or_else(|e| {
        display::print_warning(&format!("Could not save statistics ({e})"));
        let mut stats = store.load();
        stats.games_played += 1;
        match outcome {
            Outcome::Win => stats.wins += 1,
            _ => stats.losses += 1,
        }
        stats.total_score += u64::from(points);
        stats.last_played = Some(Local::now());
        stats
    });

    match outcome {
        Outcome::Win => display::print_win(round.secret().word(), points, stats.total_score),
        _ => display::print_lose(round.secret().word(), stats.total_score),
    }
    display::print_statistics(&stats);

    if let Some(open) = log
        && let Err(e) = open.finalize(
            outcome,
            points,
            round.wrong_count(),
            round.max_wrong(),
            &round.wrong_letters(),
            duration,
        )
    {
        display::print_warning(&format!("Could not finalize round log ({e})"));
    }
}

/// Category menu prompt: number, name, "all", or "quit"
fn prompt_category(source: &WordSource) -> Result<CategoryChoice> {
    let categories = source.categories();
    display::print_categories(&categories);

    loop {
        let input = prompt("Choose a category (number or name, 'quit' to exit)")?;

        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(CategoryChoice::Quit),
            "all" | "mixed" | "any" => return Ok(CategoryChoice::All),
            _ => {}
        }

        if let Ok(number) = input.parse::<usize>() {
            if (1..=categories.len()).contains(&number) {
                return Ok(CategoryChoice::Named(categories[number - 1].0.to_string()));
            }
            if number == categories.len() + 1 {
                return Ok(CategoryChoice::All);
            }
            println!(
                "Please enter a number between 1 and {}.\n",
                categories.len() + 1
            );
            continue;
        }

        if let Some((name, _)) = categories.iter().find(|(name, _)| *name == input) {
            return Ok(CategoryChoice::Named((*name).to_string()));
        }

        println!("Invalid choice. Please try again.\n");
    }
}

fn prompt_play_again() -> Result<bool> {
    loop {
        match prompt("Would you like to play again? (y/n)")?.as_str() {
            "y" | "yes" | "yeah" | "yep" => return Ok(true),
            "n" | "no" | "nope" | "quit" | "q" => return Ok(false),
            _ => println!("Please enter 'y' for yes or 'n' for no.\n"),
        }
    }
}

/// Read one trimmed, lowercased line of input
fn prompt(message: &str) -> Result<String> {
    print!("{message}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    // EOF counts as quitting
    if bytes == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_lowercase())
}
