//! Per-round session logs
//!
//! Each round gets its own log file, `game<N>.log`, under the log
//! directory. `N` is one more than the highest existing round number, so
//! old logs are never overwritten. Turns are appended as they happen and a
//! summary block closes the file.
//!
//! Every method returns `io::Result`: logging failures are reported by the
//! caller and never block gameplay.

use crate::core::{Outcome, TurnRecord, WordEntry};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timestamp format used in log headers and summaries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log for one round
#[derive(Debug)]
pub struct RoundLog {
    file: File,
    path: PathBuf,
    round_number: u32,
    turn_index: usize,
}

impl RoundLog {
    /// Create the log file for a new round and write its header
    ///
    /// # Errors
    /// Returns an I/O error if the log directory cannot be created or the
    /// log file cannot be written.
    pub fn create<P: AsRef<Path>>(log_dir: P, secret: &WordEntry) -> io::Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let round_number = next_round_number(log_dir)?;
        let path = log_dir.join(format!("game{round_number}.log"));
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;

        writeln!(file, "Game {round_number} Log")?;
        writeln!(file, "Started: {}", Local::now().format(TIMESTAMP_FORMAT))?;
        writeln!(file, "Category: {}", secret.category())?;
        writeln!(file, "Word: {}", secret.word())?;
        writeln!(file, "Word Length: {}", secret.len())?;
        writeln!(file)?;
        writeln!(file, "Guesses (in order):")?;

        Ok(Self {
            file,
            path,
            round_number,
            turn_index: 0,
        })
    }

    /// Append one turn line
    ///
    /// Repeated guesses are logged like any other accepted turn.
    ///
    /// # Errors
    /// Returns an I/O error if the line cannot be written.
    pub fn record_turn(
        &mut self,
        turn: &TurnRecord,
        wrong_count: u32,
        max_wrong: u32,
    ) -> io::Result<()> {
        self.turn_index += 1;
        writeln!(
            self.file,
            "Turn {}: Guessed '{}' - {} ({wrong_count}/{max_wrong} wrong) [{}]",
            self.turn_index, turn.guess, turn.result, turn.revealed
        )
    }

    /// Append the summary block and flush the file
    ///
    /// # Errors
    /// Returns an I/O error if the summary cannot be written.
    pub fn finalize(
        &mut self,
        outcome: Outcome,
        score: u32,
        wrong_count: u32,
        max_wrong: u32,
        wrong_letters: &[char],
        duration: Duration,
    ) -> io::Result<()> {
        let wrong_list = if wrong_letters.is_empty() {
            "None".to_string()
        } else {
            wrong_letters
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        writeln!(self.file)?;
        writeln!(self.file, "Result: {outcome}")?;
        writeln!(self.file, "Total Guesses: {}", self.turn_index)?;
        writeln!(self.file, "Wrong Guesses: {wrong_count}/{max_wrong}")?;
        writeln!(self.file, "Wrong Letters: {wrong_list}")?;
        writeln!(self.file, "Points Earned: {score}")?;
        writeln!(self.file, "Duration: {}s", duration.as_secs())?;
        writeln!(self.file, "Ended: {}", Local::now().format(TIMESTAMP_FORMAT))?;
        self.file.flush()
    }

    /// Sequential number of this round
    #[inline]
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Where this round's log lives
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Next unused round number in the log directory
fn next_round_number(log_dir: &Path) -> io::Result<u32> {
    let mut highest = 0;

    for entry in fs::read_dir(log_dir)? {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(number) = name
            .strip_prefix("game")
            .and_then(|rest| rest.strip_suffix(".log"))
            .and_then(|digits| digits.parse::<u32>().ok())
        {
            highest = highest.max(number);
        }
    }

    Ok(highest + 1)
}
