//! Word lists for Wordle solving
//!
//! A [`Dictionary`] is an ordered list of distinct words of one length. Order
//! matters: every tie between equally scored guesses goes to the earlier word.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_entries};

use crate::core::{Alphabet, Word, WordError};
use log::warn;
use rustc_hash::{FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};

/// Ordered, duplicate-free word list of a single length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    alphabet: Alphabet,
}

impl Dictionary {
    /// Build a dictionary from raw entries, keeping first occurrences
    ///
    /// Blank entries are skipped and repeated words are dropped with a warning.
    ///
    /// # Errors
    /// - `LoadError::InvalidWord` if an entry is not a valid word over `alphabet`
    /// - `LoadError::MixedLengths` if entries differ in length
    /// - `LoadError::Empty` if no words remain
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::Alphabet;
    /// use wordle_bounds::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_entries(["crane", "slate", "crane"], Alphabet::LOWERCASE).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.word_len(), 5);
    /// ```
    pub fn from_entries<I, S>(entries: I, alphabet: Alphabet) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = Vec::new();
        let mut seen: FxHashSet<Word> = FxHashSet::default();

        for (position, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }

            let word = Word::with_alphabet(entry, alphabet).map_err(|source| {
                LoadError::InvalidWord {
                    entry: position + 1,
                    word: entry.to_string(),
                    source,
                }
            })?;

            if let Some(first) = words.first()
                && first.len() != word.len()
            {
                return Err(LoadError::MixedLengths {
                    word: word.text().to_string(),
                    expected: first.len(),
                    found: word.len(),
                });
            }

            if seen.insert(word.clone()) {
                words.push(word);
            } else {
                warn!("dropping duplicate word '{word}'");
            }
        }

        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { words, alphabet })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Symbols the words were validated against
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Parse user input as a word over this dictionary's alphabet and length
    ///
    /// # Errors
    /// Returns `WordError` if `text` uses a symbol outside the alphabet or has
    /// a different length than the dictionary's words.
    pub fn parse_word(&self, text: &str) -> Result<Word, WordError> {
        let word = Word::with_alphabet(text.trim(), self.alphabet)?;
        if word.len() != self.word_len() {
            return Err(WordError::LengthMismatch {
                expected: self.word_len(),
                found: word.len(),
            });
        }
        Ok(word)
    }

    /// Length shared by every word
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.words.first().map_or(0, Word::len)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Look up a word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_ascii_lowercase();
        self.words.iter().find(|word| word.text() == text)
    }

    /// Order-sensitive hash of the word list
    ///
    /// Used to tell whether a cached score table was built from this list.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.words.len().hash(&mut hasher);
        for word in &self.words {
            word.text().hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl AsRef<[Word]> for Dictionary {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}
