//! Worst-case bound command
//!
//! Runs the exhaustive search for a history, optionally stopping it after a
//! wall-clock timeout.

use super::CommandError;
use crate::core::{FeedbackRule, GuessHistory};
use crate::solver::{CancelToken, CandidateFilter, ExhaustiveSolver, SearchConfig, SearchReport};
use crate::wordlists::Dictionary;
use log::warn;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Configuration for a bound computation
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundConfig {
    pub search: SearchConfig,
    /// Cancel the search once this much time has passed
    pub timeout: Option<Duration>,
}

/// Result of a bound computation
#[derive(Debug, Clone)]
pub struct BoundResult {
    pub history: GuessHistory,
    pub candidates: usize,
    pub report: SearchReport,
    pub elapsed: Duration,
}

/// Compute the worst-case number of further guesses for `turns`
///
/// # Errors
///
/// Returns an error if a turn cannot be parsed, or if the search fails, runs
/// out of budget or times out.
pub fn bound_history<S: AsRef<str>>(
    turns: &[S],
    dictionary: &Dictionary,
    rule: FeedbackRule,
    config: &BoundConfig,
) -> Result<BoundResult, CommandError> {
    let history = GuessHistory::parse_turns_with(turns, dictionary.alphabet())?;
    let candidates = CandidateFilter::new(rule)
        .filter(&history, dictionary.words())
        .len();

    let token = CancelToken::new();
    let solver = ExhaustiveSolver::new(dictionary.words(), rule)
        .with_config(config.search)
        .with_cancel_token(token.clone());

    let start = Instant::now();
    let report = match config.timeout {
        Some(timeout) => thread::scope(|scope| {
            let (done, finished) = mpsc::channel::<()>();
            scope.spawn(move || {
                if let Err(RecvTimeoutError::Timeout) = finished.recv_timeout(timeout) {
                    warn!("search timed out after {timeout:?}, cancelling");
                    token.cancel();
                }
            });
            let report = solver.search(&history);
            drop(done);
            report
        }),
        None => solver.search(&history),
    }?;

    Ok(BoundResult {
        history,
        candidates,
        report,
        elapsed: start.elapsed(),
    })
}
