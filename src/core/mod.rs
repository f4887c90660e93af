//! Core domain types for Wordle
//!
//! Words, feedback codes, the feedback space and guess histories. All types here
//! are pure values with no I/O.

mod feedback;
mod history;
mod space;
mod word;

pub use feedback::{Feedback, FeedbackParseError, FeedbackRule, Mark, feedback};
pub use history::{GuessHistory, Turn, TurnParseError};
pub use space::FeedbackSpace;
pub use word::{Alphabet, MAX_WORD_LENGTH, Word, WordError};
