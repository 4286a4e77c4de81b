//! Round logs and cross-session statistics
//!
//! Everything here is non-fatal to gameplay: callers report failures and
//! keep playing.

mod logger;
mod stats;

pub use logger::RoundLog;
pub use stats::{Statistics, StatsStore};
