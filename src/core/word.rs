//! Secret word representation
//!
//! A `WordEntry` stores a validated, lowercased word together with the
//! category it was drawn from and its set of distinct letters.

use rustc_hash::FxHashSet;
use std::fmt;

/// A category-tagged secret word
///
/// Stores the normalized word text plus the set of distinct letters for
/// win-condition checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    category: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl WordEntry {
    /// Create a new entry from a raw word and its category
    ///
    /// The word is lowercased; the category is kept as given.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Python", "programming").unwrap();
    /// assert_eq!(entry.word(), "python");
    /// assert_eq!(entry.category(), "programming");
    ///
    /// assert!(WordEntry::new("", "misc").is_err());
    /// assert!(WordEntry::new("c3po", "misc").is_err());
    /// ```
    pub fn new(word: impl Into<String>, category: impl Into<String>) -> Result<Self, WordError> {
        let word: String = word.into().to_lowercase();

        if word.is_empty() {
            return Err(WordError::Empty);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic);
        }

        let letters: FxHashSet<char> = word.chars().collect();

        Ok(Self {
            word,
            category: category.into(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the category this word was drawn from
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// True if the word has no letters (never holds for a validated entry)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// The set of distinct letters in the word
    #[inline]
    pub(crate) fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("penguin", "animals").unwrap();
        assert_eq!(entry.word(), "penguin");
        assert_eq!(entry.category(), "animals");
        assert_eq!(entry.len(), 7);
    }

    #[test]
    fn entry_creation_uppercase_normalized() {
        let entry = WordEntry::new("PENGUIN", "animals").unwrap();
        assert_eq!(entry.word(), "penguin");

        let entry2 = WordEntry::new("PeNgUiN", "animals").unwrap();
        assert_eq!(entry2.word(), "penguin");
    }

    #[test]
    fn entry_creation_empty() {
        assert!(matches!(WordEntry::new("", "misc"), Err(WordError::Empty)));
    }

    #[test]
    fn entry_creation_non_alphabetic() {
        assert!(WordEntry::new("pengu1n", "misc").is_err()); // Digit
        assert!(WordEntry::new("pen guin", "misc").is_err()); // Space
        assert!(WordEntry::new("pengüin", "misc").is_err()); // Non-ASCII
        assert!(WordEntry::new("pen-guin", "misc").is_err()); // Punctuation
    }

    #[test]
    fn entry_has_letter() {
        let entry = WordEntry::new("penguin", "animals").unwrap();
        assert!(entry.has_letter('p'));
        assert!(entry.has_letter('n'));
        assert!(!entry.has_letter('z'));
        assert!(!entry.has_letter('x'));
    }

    #[test]
    fn entry_letters_distinct() {
        let entry = WordEntry::new("penguin", "animals").unwrap();
        // 'n' appears twice but counts once
        assert_eq!(entry.letters().len(), 6);
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("galaxy", "science").unwrap();
        assert_eq!(format!("{entry}"), "galaxy");
    }
}
