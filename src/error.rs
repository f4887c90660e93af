//! Engine error type
//!
//! Every error is local to one call; callers decide whether to skip, retry or
//! abort.

use crate::core::WordError;
use std::fmt;
use thiserror::Error;

/// Which search budget ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// The worst case needs more than this many further guesses
    Depth(u32),
    /// More than this many search nodes were visited
    Nodes(u64),
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depth(depth) => write!(f, "depth cap of {depth}"),
            Self::Nodes(nodes) => write!(f, "node budget of {nodes}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The feedback history admits no dictionary word
    #[error("feedback history is inconsistent: no dictionary word fits every turn")]
    InconsistentHistory,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Scoring needs at least one candidate
    #[error("cannot score an empty candidate set")]
    EmptyCandidateSet,

    #[error("search exceeded its {budget}{}", best_bound_note(.best_bound))]
    SearchBudgetExceeded {
        /// For `Budget::Depth(d)` the worst case is proven to be at least `d + 1`
        budget: Budget,
        /// Smallest worst case achieved by some guess before the budget ran out
        ///
        /// This is an upper bound on the answer. A depth overrun proves no guess
        /// stays within the cap, so it never carries one; its lower bound is
        /// already in `budget`.
        best_bound: Option<u32>,
    },

    #[error("search was cancelled")]
    Cancelled,
}

fn best_bound_note(best_bound: &Option<u32>) -> String {
    best_bound.map_or_else(String::new, |bound| {
        format!(" (best bound found so far: {bound})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_messages() {
        let err = EngineError::SearchBudgetExceeded {
            budget: Budget::Depth(3),
            best_bound: None,
        };
        assert_eq!(err.to_string(), "search exceeded its depth cap of 3");

        let err = EngineError::SearchBudgetExceeded {
            budget: Budget::Nodes(1000),
            best_bound: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "search exceeded its node budget of 1000 (best bound found so far: 4)"
        );
    }

    #[test]
    fn word_errors_convert() {
        let err: EngineError = WordError::InvalidLength(0).into();
        assert!(matches!(err, EngineError::InvalidWord(_)));
    }
}
