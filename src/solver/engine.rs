//! One-ply heuristic guess selection

use super::filter::{CandidateFilter, check_history_length};
use super::partition::PartitionScorer;
use super::strategy::Metric;
use crate::core::{Alphabet, FeedbackRule, GuessHistory, Word};
use crate::error::EngineError;
use log::debug;

/// Picks the next guess from the candidates consistent with a history
///
/// Guesses are always drawn from the remaining candidates, so a history that
/// the selector extends never repeats a word.
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'a> {
    dictionary: &'a [Word],
    alphabet: Alphabet,
    filter: CandidateFilter,
    scorer: PartitionScorer,
    metric: Metric,
}

impl<'a> GuessSelector<'a> {
    /// Create a selector over `dictionary`
    ///
    /// The same `rule` drives both filtering and scoring.
    #[must_use]
    pub const fn new(dictionary: &'a [Word], rule: FeedbackRule, metric: Metric) -> Self {
        Self {
            dictionary,
            alphabet: Alphabet::LOWERCASE,
            filter: CandidateFilter::new(rule),
            scorer: PartitionScorer::new(rule),
            metric,
        }
    }

    /// Spell user-supplied words over `alphabet` instead of `a..=z`
    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub const fn rule(&self) -> FeedbackRule {
        self.filter.rule()
    }

    /// Best next guess for `history`
    ///
    /// # Errors
    /// - `EngineError::InvalidWord` if a guess in `history` has the wrong length
    /// - `EngineError::InconsistentHistory` if no dictionary word fits `history`
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{FeedbackRule, GuessHistory, Word};
    /// use wordle_bounds::solver::{GuessSelector, Metric};
    ///
    /// let dictionary: Vec<Word> = ["abide", "abled", "bread", "beard"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let selector = GuessSelector::new(&dictionary, FeedbackRule::Containment, Metric::BucketVariance);
    ///
    /// let history = GuessHistory::parse_turns(["abide:22322"]).unwrap();
    /// let guess = selector.select(&history).unwrap();
    /// assert!(guess.text() == "bread" || guess.text() == "beard");
    /// ```
    pub fn select(&self, history: &GuessHistory) -> Result<&'a Word, EngineError> {
        self.select_scored(history).map(|(word, _)| word)
    }

    /// Like [`select`](Self::select), also returning the winning score
    ///
    /// # Errors
    /// Same as [`select`](Self::select).
    pub fn select_scored(&self, history: &GuessHistory) -> Result<(&'a Word, f64), EngineError> {
        let candidates = self.candidates(history)?;
        if candidates.is_empty() {
            return Err(EngineError::InconsistentHistory);
        }

        let metric = self.metric.effective(history);
        if metric != self.metric {
            debug!("no Absent marks in the last turn, scoring by {}", metric.name());
        }
        self.scorer.best_guess(&candidates, metric)
    }

    /// Dictionary words consistent with `history`
    ///
    /// # Errors
    /// Returns `EngineError::InvalidWord` if a guess in `history` has the wrong
    /// length for this dictionary.
    pub fn candidates(&self, history: &GuessHistory) -> Result<Vec<&'a Word>, EngineError> {
        if let Some(first) = self.dictionary.first() {
            check_history_length(history, first.len())?;
        }
        Ok(self.filter.filter(history, self.dictionary))
    }

    /// Number of dictionary words consistent with `history`
    ///
    /// # Errors
    /// Same as [`candidates`](Self::candidates).
    pub fn count_candidates(&self, history: &GuessHistory) -> Result<usize, EngineError> {
        self.candidates(history).map(|candidates| candidates.len())
    }
}
