//! Candidate filtering
//!
//! Narrows a word list to the words consistent with every turn of a history.

use crate::core::{Feedback, FeedbackRule, GuessHistory, Mark, Word, WordError};
use log::trace;

/// Filters dictionaries against accumulated feedback
///
/// The filter must use the same [`FeedbackRule`] as the code that produced the
/// feedback, or true solutions can be rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    rule: FeedbackRule,
}

impl CandidateFilter {
    #[must_use]
    pub const fn new(rule: FeedbackRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(self) -> FeedbackRule {
        self.rule
    }

    /// Check a single turn against a word, ignoring the no-repeat rule
    #[must_use]
    pub fn admits(self, guess: &Word, feedback: Feedback, word: &Word) -> bool {
        if guess.len() != word.len() || feedback.len() != word.len() {
            return false;
        }

        match self.rule {
            FeedbackRule::Containment => guess.chars().iter().enumerate().all(|(i, &g)| {
                match feedback.mark(i) {
                    Mark::Match => word.char_at(i) == g,
                    Mark::Present => word.char_at(i) != g && word.has_letter(g),
                    Mark::Absent => !word.has_letter(g),
                }
            }),
            FeedbackRule::Standard => FeedbackRule::Standard.feedback(guess, word) == feedback,
        }
    }

    /// Check a word against every turn, excluding words already guessed
    #[must_use]
    pub fn is_consistent(self, history: &GuessHistory, word: &Word) -> bool {
        history
            .iter()
            .all(|(guess, feedback)| guess != word && self.admits(guess, *feedback, word))
    }

    /// Words from `dictionary` consistent with `history`, in dictionary order
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{Feedback, GuessHistory, Word};
    /// use wordle_bounds::solver::CandidateFilter;
    ///
    /// let dictionary: Vec<Word> = ["abide", "abled", "bread"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let history = GuessHistory::parse_turns(["abide:22322"]).unwrap();
    /// let candidates = CandidateFilter::default().filter(&history, &dictionary);
    ///
    /// assert_eq!(candidates.len(), 1);
    /// assert_eq!(candidates[0].text(), "bread");
    /// ```
    #[must_use]
    pub fn filter<'a>(self, history: &GuessHistory, dictionary: &'a [Word]) -> Vec<&'a Word> {
        let candidates: Vec<&Word> = dictionary
            .iter()
            .filter(|word| self.is_consistent(history, word))
            .collect();
        trace!(
            "filtered {} words to {} candidates over {} turns",
            dictionary.len(),
            candidates.len(),
            history.len()
        );
        candidates
    }

    /// Dictionary indices of the words consistent with `history`, ascending
    #[must_use]
    pub fn filter_indices(self, history: &GuessHistory, dictionary: &[Word]) -> Vec<u32> {
        dictionary
            .iter()
            .enumerate()
            .filter(|(_, word)| self.is_consistent(history, word))
            .map(|(idx, _)| idx as u32)
            .collect()
    }

    /// Apply one more turn to an already filtered candidate set
    ///
    /// Equivalent to filtering the dictionary with the extended history.
    #[must_use]
    pub fn narrow<'a>(
        self,
        candidates: &[&'a Word],
        guess: &Word,
        feedback: Feedback,
    ) -> Vec<&'a Word> {
        candidates
            .iter()
            .copied()
            .filter(|&word| word != guess && self.admits(guess, feedback, word))
            .collect()
    }
}

/// Ensure every guess in `history` has `word_len` letters
///
/// # Errors
/// Returns `WordError::LengthMismatch` for the first guess of the wrong length.
pub fn check_history_length(history: &GuessHistory, word_len: usize) -> Result<(), WordError> {
    for (guess, _) in history {
        if guess.len() != word_len {
            return Err(WordError::LengthMismatch {
                expected: word_len,
                found: guess.len(),
            });
        }
    }
    Ok(())
}
