//! Guess selection by partition score
//!
//! Scores run in parallel with rayon. Ties always resolve to the earliest word
//! in the input order, whatever order the workers finish in.

use super::calculator::score;
use crate::core::{FeedbackRule, Word};
use crate::solver::strategy::Metric;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select the guess from `candidates` with the lowest score
///
/// Returns the winning word and its score, or `None` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_bounds::core::{FeedbackRule, Word};
/// use wordle_bounds::solver::Metric;
/// use wordle_bounds::solver::partition::select_best_guess;
///
/// let words: Vec<Word> = ["abide", "abled", "bread"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let (best, _) = select_best_guess(FeedbackRule::Containment, &refs, Metric::BucketVariance)
///     .unwrap();
/// assert!(words.contains(best));
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    rule: FeedbackRule,
    candidates: &[&'a Word],
    metric: Metric,
) -> Option<(&'a Word, f64)> {
    candidates
        .par_iter()
        .enumerate()
        .map(|(idx, &guess)| (idx, guess, score(rule, metric, guess, candidates)))
        .min_by(|a, b| by_score_then_index((a.0, a.2), (b.0, b.2)))
        .map(|(_, guess, value)| (guess, value))
}

/// Score every word of `guesses` against `candidates`, in `guesses` order
///
/// `on_scored` runs once per guess, from whichever worker scored it.
pub fn score_all<F>(
    rule: FeedbackRule,
    guesses: &[&Word],
    candidates: &[&Word],
    metric: Metric,
    on_scored: F,
) -> Vec<f64>
where
    F: Fn() + Sync,
{
    guesses
        .par_iter()
        .map(|&guess| {
            let value = score(rule, metric, guess, candidates);
            on_scored();
            value
        })
        .collect()
}

fn by_score_then_index(a: (usize, f64), b: (usize, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}
