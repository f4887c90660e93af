//! Wordle solving algorithms
//!
//! Candidate filtering, partition scoring, one-ply guess selection and the
//! exhaustive worst-case search.

mod engine;
pub mod exhaustive;
mod filter;
pub mod partition;
mod strategy;

pub use engine::GuessSelector;
pub use exhaustive::{CancelToken, ExhaustiveSolver, SearchConfig, SearchReport};
pub use filter::{CandidateFilter, check_history_length};
pub use partition::{PartitionMetrics, PartitionScorer, ScoreTable};
pub use strategy::Metric;
