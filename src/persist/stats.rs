//! Cross-session statistics
//!
//! Cumulative counters persisted as JSON. The aggregate is always read and
//! rewritten whole; a missing or unparseable file loads as the zero
//! aggregate, never an error. Writes go through a temp file and rename so
//! an interrupted write cannot corrupt the one piece of cross-session
//! state.

use crate::core::Outcome;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Cumulative statistics across all rounds
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub games_played: u64,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
    #[serde(default)]
    pub total_score: u64,
    #[serde(default)]
    pub last_played: Option<DateTime<Local>>,
}

impl Statistics {
    /// Wins as a percentage of games played (0.0 when none played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.wins as f64 / self.games_played as f64) * 100.0
        }
    }

    /// Mean score per game (0.0 when none played)
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games_played as f64
        }
    }
}

/// On-disk shape: the counters plus the derived rates
///
/// The derived fields are recomputed on every write and ignored on read.
#[derive(Serialize)]
struct StatsRecord<'a> {
    games_played: u64,
    wins: u64,
    losses: u64,
    total_score: u64,
    win_rate: f64,
    average_score: f64,
    last_played: &'a Option<DateTime<Local>>,
}

impl<'a> From<&'a Statistics> for StatsRecord<'a> {
    fn from(stats: &'a Statistics) -> Self {
        Self {
            games_played: stats.games_played,
            wins: stats.wins,
            losses: stats.losses,
            total_score: stats.total_score,
            win_rate: stats.win_rate(),
            average_score: stats.average_score(),
            last_played: &stats.last_played,
        }
    }
}

/// Handle to the persisted statistics file
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Point the store at its JSON file (created on first write)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the aggregate from disk
    ///
    /// Missing or corrupt state is treated as a first run and yields the
    /// zero aggregate.
    #[must_use]
    pub fn load(&self) -> Statistics {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Fold one finished round into the aggregate and persist it
    ///
    /// Read-modify-write of the whole record; returns the updated
    /// aggregate.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be written; the caller
    /// reports it and gameplay continues.
    pub fn record(&self, outcome: Outcome, points: u32) -> io::Result<Statistics> {
        let mut stats = self.load();

        stats.games_played += 1;
        match outcome {
            Outcome::Win => stats.wins += 1,
            _ => stats.losses += 1,
        }
        stats.total_score += u64::from(points);
        stats.last_played = Some(Local::now());

        self.save(&stats)?;
        Ok(stats)
    }

    /// Where the statistics file lives
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole aggregate via temp file and rename
    fn save(&self, stats: &Statistics) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&StatsRecord::from(stats))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> StatsStore {
        let path = std::env::temp_dir().join(format!(
            "hangman_stats_{tag}_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        StatsStore::new(path)
    }

    fn cleanup(store: &StatsStore) {
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn missing_file_loads_zero_aggregate() {
        let store = temp_store("missing");
        let stats = store.load();
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_score(), 0.0);
    }

    #[test]
    fn corrupt_file_loads_zero_aggregate() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), Statistics::default());
        cleanup(&store);
    }

    #[test]
    fn record_accumulates_across_reloads() {
        let store = temp_store("accumulate");

        store.record(Outcome::Win, 50).unwrap();
        store.record(Outcome::Loss, 0).unwrap();
        store.record(Outcome::Win, 30).unwrap();

        let stats = store.load();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.total_score, 80);
        assert!(stats.last_played.is_some());

        cleanup(&store);
    }

    #[test]
    fn wins_plus_losses_equals_games_played() {
        let store = temp_store("totals");
        for outcome in [Outcome::Win, Outcome::Loss, Outcome::Loss, Outcome::Win] {
            store.record(outcome, 10).unwrap();
        }
        let stats = store.load();
        assert_eq!(stats.wins + stats.losses, stats.games_played);
        cleanup(&store);
    }

    #[test]
    fn derived_fields_written_but_not_trusted_on_read() {
        let store = temp_store("derived");
        store.record(Outcome::Win, 40).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"win_rate\""));
        assert!(content.contains("\"average_score\""));

        // Stale derived values on disk are ignored; rates come from counters
        fs::write(
            store.path(),
            r#"{"games_played": 4, "wins": 1, "losses": 3, "total_score": 40, "win_rate": 99.0, "average_score": 99.0}"#,
        )
        .unwrap();
        let stats = store.load();
        assert_eq!(stats.win_rate(), 25.0);
        assert_eq!(stats.average_score(), 10.0);

        cleanup(&store);
    }

    #[test]
    fn partial_record_fills_defaults() {
        let store = temp_store("partial");
        fs::write(store.path(), r#"{"games_played": 2, "wins": 2}"#).unwrap();

        let stats = store.load();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.total_score, 0);
        assert_eq!(stats.last_played, None);

        cleanup(&store);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let store = temp_store("tmpfile");
        store.record(Outcome::Win, 10).unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());
        cleanup(&store);
    }
}
