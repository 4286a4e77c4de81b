//! Category word lists for Hangman
//!
//! Provides embedded default lists compiled into the binary plus runtime
//! loading from a directory of plain-text files.

mod embedded;
pub mod loader;

pub use embedded::{ANIMALS, CATEGORIES, COUNTRIES, PROGRAMMING, SCIENCE};
pub use loader::{WordListError, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_categories_non_empty() {
        assert!(!CATEGORIES.is_empty());
        for &(name, words) in CATEGORIES {
            assert!(!words.is_empty(), "Category '{name}' has no words");
        }
    }

    #[test]
    fn embedded_words_are_valid() {
        for &(name, words) in CATEGORIES {
            for &word in words {
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' in '{name}' is not lowercase alphabetic"
                );
            }
        }
    }

    #[test]
    fn embedded_source_keeps_every_word() {
        let source = WordSource::embedded();
        let expected: usize = CATEGORIES.iter().map(|(_, words)| words.len()).sum();
        assert_eq!(source.len(), expected);
    }

    #[test]
    fn embedded_table_matches_consts() {
        let table: Vec<&str> = CATEGORIES.iter().map(|&(name, _)| name).collect();
        assert_eq!(
            table,
            vec!["animals", "countries", "programming", "science"]
        );
        assert_eq!(CATEGORIES[0].1, ANIMALS);
        assert_eq!(CATEGORIES[1].1, COUNTRIES);
        assert_eq!(CATEGORIES[2].1, PROGRAMMING);
        assert_eq!(CATEGORIES[3].1, SCIENCE);
    }
}
