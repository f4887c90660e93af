//! Wordle bounds
//!
//! Scores Wordle opening words by how evenly they split the solutions, filters
//! candidates as feedback accumulates, and computes exhaustive worst-case
//! bounds on the number of guesses still needed.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_bounds::core::{Feedback, Word};
//!
//! let guess = Word::new("abide").unwrap();
//! let solution = Word::new("bread").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &solution);
//! assert_eq!(feedback.to_string(), "22322");
//! ```

// Core domain types
pub mod core;

// Engine errors
pub mod error;

// Filtering, scoring and search
pub mod solver;

// Word lists
pub mod wordlists;

// Opening score cache
pub mod cache;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
