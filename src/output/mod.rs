//! Terminal output formatting

pub mod art;
pub mod display;
