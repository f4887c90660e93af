//! Next-guess command
//!
//! Parses a feedback history and asks the selector for the next guess.

use super::CommandError;
use crate::core::{GuessHistory, Word};
use crate::solver::{GuessSelector, Metric};

/// Suggested next guess with the state it was chosen from
#[derive(Debug, Clone)]
pub struct NextResult {
    pub history: GuessHistory,
    pub guess: Word,
    pub score: f64,
    /// Metric actually used after the fallback policy
    pub metric: Metric,
    pub candidates: Vec<Word>,
}

/// Pick the next guess for turns written as `guess:feedback`
///
/// # Errors
///
/// Returns an error if a turn cannot be parsed or the history admits no word.
pub fn next_guess<S: AsRef<str>>(
    turns: &[S],
    selector: &GuessSelector<'_>,
) -> Result<NextResult, CommandError> {
    let history = GuessHistory::parse_turns_with(turns, selector.alphabet())?;
    let candidates = selector.candidates(&history)?;
    let (guess, score) = selector.select_scored(&history)?;

    Ok(NextResult {
        metric: selector.metric().effective(&history),
        guess: guess.clone(),
        score,
        candidates: candidates.into_iter().cloned().collect(),
        history,
    })
}
