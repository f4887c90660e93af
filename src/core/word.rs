//! Dictionary word representation
//!
//! A Word stores a fixed-length word over a configurable alphabet, along with a
//! letter bitmask used for O(1) containment checks during feedback calculation.

use std::fmt;
use thiserror::Error;

/// Longest supported word; 3^20 feedback codes still fit in a `u32`.
pub const MAX_WORD_LENGTH: usize = 20;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    InvalidLength(usize),
    #[error("expected a {expected}-letter word, got {found} letters")]
    LengthMismatch { expected: usize, found: usize },
    #[error("word must contain only ASCII characters")]
    NonAscii,
    #[error("letter '{0}' is outside the configured alphabet")]
    OutsideAlphabet(char),
}

/// The set of symbols words may be spelled with
///
/// Stored as a bitmask over ASCII byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    mask: u128,
}

impl Alphabet {
    /// Lowercase English letters `a..=z`
    pub const LOWERCASE: Self = Self {
        mask: ((1u128 << 26) - 1) << b'a',
    };

    /// Build an alphabet from the symbols of a string
    ///
    /// Symbols are lowercased, matching how words are normalized.
    ///
    /// # Errors
    /// Returns `WordError::NonAscii` if any symbol is not ASCII.
    pub fn from_symbols(symbols: &str) -> Result<Self, WordError> {
        let mut mask = 0u128;
        for ch in symbols.chars() {
            if !ch.is_ascii() {
                return Err(WordError::NonAscii);
            }
            mask |= 1u128 << (ch.to_ascii_lowercase() as u8);
        }
        Ok(Self { mask })
    }

    /// Check if a byte belongs to the alphabet
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter < 128 && self.mask & (1u128 << letter) != 0
    }

    /// Number of symbols in the alphabet
    #[must_use]
    pub const fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::LOWERCASE
    }
}

/// A fixed-length word with letter membership tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: Box<str>,
    letters: u128,
}

impl Word {
    /// Create a new Word over the lowercase English alphabet
    ///
    /// # Errors
    /// Returns `WordError` if the length is outside `1..=MAX_WORD_LENGTH` or the
    /// word contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::Word;
    ///
    /// let word = Word::new("Bread").unwrap();
    /// assert_eq!(word.text(), "bread");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_alphabet(text, Alphabet::LOWERCASE)
    }

    /// Create a new Word, validating every letter against `alphabet`
    ///
    /// # Errors
    /// Returns `WordError` on a bad length, non-ASCII input, or a letter
    /// outside the alphabet.
    pub fn with_alphabet(text: impl Into<String>, alphabet: Alphabet) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = 0u128;
        for &byte in text.as_bytes() {
            if !alphabet.contains(byte) {
                return Err(WordError::OutsideAlphabet(char::from(byte)));
            }
            letters |= 1u128 << byte;
        }

        Ok(Self {
            text: text.into_boxed_str(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: words have at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter < 128 && self.letters & (1u128 << letter) != 0
    }

    /// Ensure `other` has the same length as this word
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` when the lengths differ.
    pub fn check_same_length(&self, other: &Self) -> Result<(), WordError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(WordError::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            })
        }
    }

    /// Count of each letter, indexed by byte value
    ///
    /// Used by the duplicate-aware feedback rule.
    pub(crate) fn char_counts(&self) -> [u8; 128] {
        let mut counts = [0u8; 128];
        for &ch in self.chars() {
            counts[usize::from(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
