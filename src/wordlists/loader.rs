//! Word-list loading and random selection
//!
//! A `WordSource` holds category-tagged word lists, loaded either from the
//! embedded defaults or from a directory of plain-text files, and hands out
//! one random word per round.

use crate::core::WordEntry;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The resolved list has zero entries; a round cannot start
    EmptyWordList,
    /// The requested category does not exist
    UnknownCategory(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "No words available to start a round"),
            Self::UnknownCategory(name) => write!(f, "Unknown category '{name}'"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Category-tagged word lists with random selection
///
/// Words are validated and lowercased at load time; lines that fail
/// validation are skipped, not errors.
#[derive(Debug, Clone)]
pub struct WordSource {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordSource {
    /// Build a source from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(super::CATEGORIES.iter().copied())
    }

    /// Build a source from (category, words) pairs
    ///
    /// Invalid words are skipped; categories that end up empty are kept so
    /// they still show in listings (selection from them fails).
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let categories = entries
            .into_iter()
            .map(|(name, words)| {
                let valid: Vec<String> = words
                    .iter()
                    .filter_map(|w| {
                        WordEntry::new(w.trim(), name)
                            .ok()
                            .map(|entry| entry.word().to_string())
                    })
                    .collect();
                (name.to_lowercase(), valid)
            })
            .collect();

        Self { categories }
    }

    /// Load every `*.txt` file in a directory as one category
    ///
    /// The file stem is the category name; one word per line. Lines with
    /// non-alphabetic characters are skipped.
    ///
    /// # Errors
    /// Returns an I/O error if the directory or any word file cannot be
    /// read.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let mut categories = BTreeMap::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let name = name.to_lowercase();

            let content = fs::read_to_string(&path)?;
            let words: Vec<String> = content
                .lines()
                .filter_map(|line| {
                    WordEntry::new(line.trim(), &name)
                        .ok()
                        .map(|entry| entry.word().to_string())
                })
                .collect();

            categories.insert(name, words);
        }

        Ok(Self { categories })
    }

    /// Category names with their word counts, sorted by name
    #[must_use]
    pub fn categories(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|(name, words)| (name.as_str(), words.len()))
            .collect()
    }

    /// Total number of words across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// True if no category holds any word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick one word uniformly at random
    ///
    /// A named category samples from that category's list. `None` (or the
    /// name "all") samples from the union of every list, so larger
    /// categories are proportionally more likely.
    ///
    /// # Errors
    /// Returns `WordListError::UnknownCategory` for a name that was never
    /// loaded, or `WordListError::EmptyWordList` when the resolved list has
    /// no entries.
    pub fn select<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<WordEntry, WordListError> {
        match category.map(str::to_lowercase).as_deref() {
            Some("all") | None => self.select_from_union(rng),
            Some(name) => {
                let words = self
                    .categories
                    .get(name)
                    .ok_or_else(|| WordListError::UnknownCategory(name.to_string()))?;
                if words.is_empty() {
                    return Err(WordListError::EmptyWordList);
                }
                let word = &words[rng.random_range(0..words.len())];
                Ok(Self::entry(word, name))
            }
        }
    }

    fn select_from_union<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WordEntry, WordListError> {
        let total = self.len();
        if total == 0 {
            return Err(WordListError::EmptyWordList);
        }

        let mut index = rng.random_range(0..total);
        for (name, words) in &self.categories {
            if index < words.len() {
                return Ok(Self::entry(&words[index], name));
            }
            index -= words.len();
        }
        unreachable!("index bounded by total word count")
    }

    fn entry(word: &str, category: &str) -> WordEntry {
        // Words were validated at load time
        WordEntry::new(word, category).expect("word validated at load time")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source() -> WordSource {
        WordSource::from_entries([
            ("animals", ["cat", "dog", "ferret"].as_slice()),
            ("science", ["photon"].as_slice()),
        ])
    }

    #[test]
    fn select_from_named_category() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);
        let entry = source.select(Some("science"), &mut rng).unwrap();
        assert_eq!(entry.word(), "photon");
        assert_eq!(entry.category(), "science");
    }

    #[test]
    fn select_category_case_insensitive() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);
        let entry = source.select(Some("SCIENCE"), &mut rng).unwrap();
        assert_eq!(entry.word(), "photon");
    }

    #[test]
    fn select_unknown_category() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            source.select(Some("minerals"), &mut rng),
            Err(WordListError::UnknownCategory("minerals".to_string()))
        );
    }

    #[test]
    fn select_from_empty_category() {
        let source = WordSource::from_entries([("void", &[] as &[&str])]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            source.select(Some("void"), &mut rng),
            Err(WordListError::EmptyWordList)
        );
    }

    #[test]
    fn select_from_empty_source() {
        let source = WordSource::from_entries(Vec::<(&str, &[&str])>::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(source.select(None, &mut rng), Err(WordListError::EmptyWordList));
    }

    #[test]
    fn select_union_tags_owning_category() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let entry = source.select(None, &mut rng).unwrap();
            match entry.word() {
                "photon" => assert_eq!(entry.category(), "science"),
                _ => assert_eq!(entry.category(), "animals"),
            }
        }
    }

    #[test]
    fn select_all_is_union() {
        let source = source();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let from_none = source.select(None, &mut a).unwrap();
        let from_all = source.select(Some("all"), &mut b).unwrap();
        assert_eq!(from_none, from_all);
    }

    #[test]
    fn select_deterministic_for_fixed_seed() {
        let source = source();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            source.select(None, &mut a).unwrap(),
            source.select(None, &mut b).unwrap()
        );
    }

    #[test]
    fn invalid_words_skipped_at_load() {
        let source = WordSource::from_entries([(
            "mixed",
            ["valid", "has space", "d1git", "", "  trimmed  "].as_slice(),
        )]);
        assert_eq!(source.len(), 2); // "valid" and "trimmed"
    }

    #[test]
    fn categories_listed_with_counts() {
        let source = source();
        assert_eq!(source.categories(), vec![("animals", 3), ("science", 1)]);
    }

    #[test]
    fn from_dir_loads_categories() {
        let dir = std::env::temp_dir().join(format!("hangman_words_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("fruit.txt"), "apple\nbanana\nnot valid\n").unwrap();
        std::fs::write(dir.join("notes.md"), "ignored\n").unwrap();

        let source = WordSource::from_dir(&dir).unwrap();
        assert_eq!(source.categories(), vec![("fruit", 2)]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
