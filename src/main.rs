//! Hangman - CLI
//!
//! Terminal Hangman with categories, ASCII-art gallows, per-round logs,
//! and persistent statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, run_categories, run_play, run_stats},
    wordlists::WordSource,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal Hangman with categories, scoring, and persistent statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of category word lists (*.txt); defaults to the built-in lists
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Base directory for game logs and the statistics file
    #[arg(short = 'd', long, global = true, default_value = ".")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Category to draw words from (default: prompt each round)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show cumulative statistics
    Stats,
    /// List word categories
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Word lists: a directory of *.txt files, or the embedded defaults
    let source = match &cli.words {
        Some(dir) => WordSource::from_dir(dir)
            .with_context(|| format!("Failed to load word lists from {}", dir.display()))?,
        None => WordSource::embedded(),
    };

    let stats_path = cli.data_dir.join("statistics.json");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { category: None });

    match command {
        Commands::Play { category } => {
            let config = PlayConfig {
                category,
                log_dir: cli.data_dir.join("game_log"),
                stats_path,
            };
            run_play(&source, &config)
        }
        Commands::Stats => {
            run_stats(&stats_path);
            Ok(())
        }
        Commands::Categories => {
            run_categories(&source);
            Ok(())
        }
    }
}
