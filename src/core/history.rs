//! Guess/feedback history
//!
//! Turns are kept in play order. Earlier turns are never edited; backtracking is
//! done by truncating, or by working on an [`GuessHistory::extended`] copy.

use super::feedback::{Feedback, FeedbackParseError};
use super::word::{Alphabet, Word, WordError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One turn: the guess and the feedback it received
pub type Turn = (Word, Feedback);

/// Ordered sequence of turns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    turns: Vec<Turn>,
}

/// Error type for a malformed `guess:feedback` turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnParseError {
    #[error("expected GUESS:FEEDBACK, got '{0}'")]
    MissingSeparator(String),
    #[error("invalid guess: {0}")]
    Word(#[from] WordError),
    #[error("invalid feedback: {0}")]
    Feedback(#[from] FeedbackParseError),
    #[error("feedback has {feedback} positions but the guess has {guess} letters")]
    LengthMismatch { guess: usize, feedback: usize },
}

impl GuessHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn
    pub fn push(&mut self, guess: Word, feedback: Feedback) {
        debug_assert_eq!(guess.len(), feedback.len());
        self.turns.push((guess, feedback));
    }

    /// Remove and return the most recent turn
    pub fn pop(&mut self) -> Option<Turn> {
        self.turns.pop()
    }

    /// Drop every turn after the first `len`
    pub fn truncate(&mut self, len: usize) {
        self.turns.truncate(len);
    }

    /// A copy of this history with one more turn appended
    #[must_use]
    pub fn extended(&self, guess: Word, feedback: Feedback) -> Self {
        let mut next = self.clone();
        next.push(guess, feedback);
        next
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Feedback of the most recent turn
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.turns.last().map(|(_, feedback)| *feedback)
    }

    /// Check if the most recent turn solved the puzzle
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_feedback().is_some_and(Feedback::is_solved)
    }

    /// Check if `word` has already been guessed
    #[must_use]
    pub fn contains_guess(&self, word: &Word) -> bool {
        self.turns.iter().any(|(guess, _)| guess == word)
    }

    /// Parse turns written as `guess:feedback`, e.g. `rates:11331`
    ///
    /// # Errors
    /// Returns `TurnParseError` for the first malformed turn.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::GuessHistory;
    ///
    /// let history = GuessHistory::parse_turns(["irate:32332", "sored:31113"]).unwrap();
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.last_feedback().unwrap().to_string(), "31113");
    /// ```
    pub fn parse_turns<I, S>(turns: I) -> Result<Self, TurnParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::parse_turns_with(turns, Alphabet::LOWERCASE)
    }

    /// Parse turns whose guesses are spelled over `alphabet`
    ///
    /// # Errors
    /// Returns `TurnParseError` for the first malformed turn, including a guess
    /// with a symbol outside `alphabet`.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{Alphabet, GuessHistory};
    ///
    /// let digits = Alphabet::from_symbols("0123456789").unwrap();
    /// assert!(GuessHistory::parse_turns_with(["12345:22222"], digits).is_ok());
    /// assert!(GuessHistory::parse_turns_with(["1234x:22222"], digits).is_err());
    /// ```
    pub fn parse_turns_with<I, S>(turns: I, alphabet: Alphabet) -> Result<Self, TurnParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new();
        for turn in turns {
            let (guess, feedback) = parse_turn(turn.as_ref(), alphabet)?;
            history.push(guess, feedback);
        }
        Ok(history)
    }
}

fn parse_turn(text: &str, alphabet: Alphabet) -> Result<Turn, TurnParseError> {
    let (guess, feedback) = text
        .split_once(':')
        .ok_or_else(|| TurnParseError::MissingSeparator(text.to_string()))?;

    let guess = Word::with_alphabet(guess.trim(), alphabet)?;
    let feedback = Feedback::from_str(feedback)?;

    if guess.len() != feedback.len() {
        return Err(TurnParseError::LengthMismatch {
            guess: guess.len(),
            feedback: feedback.len(),
        });
    }

    Ok((guess, feedback))
}

impl<'a> IntoIterator for &'a GuessHistory {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

impl FromIterator<Turn> for GuessHistory {
    fn from_iter<T: IntoIterator<Item = Turn>>(iter: T) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for GuessHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (guess, feedback)) in self.turns.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{guess}:{feedback}")?;
        }
        Ok(())
    }
}
