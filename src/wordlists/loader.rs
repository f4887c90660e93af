//! Word list loading utilities
//!
//! Reads word lists as plain text (one word per line) or as a JSON array of
//! strings.

use super::Dictionary;
use crate::core::{Alphabet, WordError};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON word list")]
    Json(#[from] serde_json::Error),

    #[error("entry {entry} ('{word}') is not a valid word")]
    InvalidWord {
        /// 1-based position in the source: the line of a text list or the
        /// element of a JSON array
        entry: usize,
        word: String,
        #[source]
        source: WordError,
    },

    #[error("word '{word}' has {found} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("word list is empty")]
    Empty,
}

/// Load a dictionary from a file
///
/// A file whose first non-blank character is `[` is parsed as a JSON array;
/// anything else is read one word per line.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, plus any error from
/// [`parse_entries`] or [`Dictionary::from_entries`].
///
/// # Examples
/// ```no_run
/// use wordle_bounds::core::Alphabet;
/// use wordle_bounds::wordlists::load_from_file;
///
/// let dictionary = load_from_file("all_words.json", Alphabet::LOWERCASE).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, alphabet: Alphabet) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_entries(parse_entries(&content)?, alphabet)?;
    debug!(
        "loaded {} words of length {} from {}",
        dictionary.len(),
        dictionary.word_len(),
        path.display()
    );
    Ok(dictionary)
}

/// Split file content into raw entries
///
/// # Errors
///
/// Returns `LoadError::Json` if the content looks like JSON but is not an array
/// of strings.
///
/// # Examples
/// ```
/// use wordle_bounds::wordlists::parse_entries;
///
/// assert_eq!(parse_entries("crane\nslate\n").unwrap(), ["crane", "slate"]);
/// assert_eq!(parse_entries(r#"["crane", "slate"]"#).unwrap(), ["crane", "slate"]);
/// ```
pub fn parse_entries(content: &str) -> Result<Vec<String>, LoadError> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    // Blank lines stay so entry positions match file lines
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}
