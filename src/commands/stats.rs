//! `stats` and `categories` subcommands

use crate::output::display;
use crate::persist::StatsStore;
use crate::wordlists::WordSource;
use std::path::Path;

/// Print the cumulative statistics table
pub fn run_stats(stats_path: &Path) {
    let stats = StatsStore::new(stats_path).load();
    if stats.games_played == 0 {
        println!("No games played yet.\n");
    }
    display::print_statistics(&stats);
}

/// List the available categories and their word counts
pub fn run_categories(source: &WordSource) {
    let categories = source.categories();
    display::print_categories(&categories);
    println!("Total: {} words", source.len());
}
