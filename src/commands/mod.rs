//! Command implementations
//!
//! Each command turns word lists and arguments into a result struct; printing
//! lives in [`crate::output`].

pub mod analyze;
pub mod bound;
pub mod evaluate;
pub mod next;
pub mod rank;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_opening};
pub use bound::{BoundConfig, BoundResult, bound_history};
pub use evaluate::{EvaluateConfig, OpeningStats, evaluate_openings, play_game};
pub use next::{NextResult, next_guess};
pub use rank::{RankConfig, RankResult, rank_openings};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};

use crate::cache::CacheError;
use crate::core::{TurnParseError, WordError};
use crate::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid word: {0}")]
    Word(#[from] WordError),

    #[error("invalid turn: {0}")]
    Turn(#[from] TurnParseError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
}

fn progress_style() -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}
