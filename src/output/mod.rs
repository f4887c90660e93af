//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_bound_result, print_evaluation, print_next_result,
    print_rank_result, print_solve_result,
};
