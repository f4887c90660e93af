//! Partition-quality scoring
//!
//! A guess is good when it splits the remaining candidates into many small
//! feedback buckets. Two metrics measure that, both lower-is-better:
//! bucket variance and max information (fewest Absent marks).

mod calculator;
mod selector;

pub use calculator::{
    PartitionMetrics, absent_marks, bucket_counts, bucket_variance, calculate_metrics, score,
    variance_from_counts,
};
pub use selector::{score_all, select_best_guess};

use super::strategy::Metric;
use crate::core::{FeedbackRule, Word};
use crate::error::EngineError;
use log::debug;

/// Scores guesses against a candidate set under one feedback rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionScorer {
    rule: FeedbackRule,
}

impl PartitionScorer {
    #[must_use]
    pub const fn new(rule: FeedbackRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(self) -> FeedbackRule {
        self.rule
    }

    /// Lowest-scoring guess drawn from `candidates` itself
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if `candidates` is empty.
    pub fn best_guess<'a>(
        self,
        candidates: &[&'a Word],
        metric: Metric,
    ) -> Result<(&'a Word, f64), EngineError> {
        let (guess, value) = select_best_guess(self.rule, candidates, metric)
            .ok_or(EngineError::EmptyCandidateSet)?;
        debug!(
            "best {} guess over {} candidates: {guess} ({value:.4})",
            metric.name(),
            candidates.len()
        );
        Ok((guess, value))
    }

    /// Score every candidate as a guess against the whole set
    #[must_use]
    pub fn score_table(self, candidates: &[&Word], metric: Metric) -> ScoreTable {
        self.score_table_with_progress(candidates, candidates, metric, || {})
    }

    /// Score every word of `guesses` against `candidates`
    ///
    /// `on_scored` is called once per guess and may run on any rayon worker.
    pub fn score_table_with_progress<F>(
        self,
        guesses: &[&Word],
        candidates: &[&Word],
        metric: Metric,
        on_scored: F,
    ) -> ScoreTable
    where
        F: Fn() + Sync,
    {
        let scores = score_all(self.rule, guesses, candidates, metric, on_scored);
        let entries = guesses
            .iter()
            .zip(scores)
            .map(|(&word, value)| (word.clone(), value))
            .collect();
        ScoreTable { metric, entries }
    }

    /// Both metrics and the bucket summary for one guess
    #[must_use]
    pub fn analyze(self, guess: &Word, candidates: &[&Word]) -> PartitionMetrics {
        calculate_metrics(self.rule, guess, candidates)
    }
}

/// Scores for a list of guesses under one metric, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    metric: Metric,
    entries: Vec<(Word, f64)>,
}

impl ScoreTable {
    #[must_use]
    pub const fn from_entries(metric: Metric, entries: Vec<(Word, f64)>) -> Self {
        Self { metric, entries }
    }

    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn entries(&self) -> &[(Word, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == word)
            .map(|&(_, value)| value)
    }

    /// The `n` lowest scores; equal scores keep their input order
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::Word;
    /// use wordle_bounds::solver::Metric;
    /// use wordle_bounds::solver::partition::ScoreTable;
    ///
    /// let table = ScoreTable::from_entries(
    ///     Metric::MaxInformation,
    ///     vec![
    ///         (Word::new("crane").unwrap(), 4.0),
    ///         (Word::new("slate").unwrap(), 2.0),
    ///         (Word::new("irate").unwrap(), 2.0),
    ///     ],
    /// );
    ///
    /// let best: Vec<&str> = table.smallest(2).iter().map(|(w, _)| w.text()).collect();
    /// assert_eq!(best, ["slate", "irate"]);
    /// ```
    #[must_use]
    pub fn smallest(&self, n: usize) -> Vec<(&Word, f64)> {
        let mut ranked: Vec<(&Word, f64)> = self
            .entries
            .iter()
            .map(|(word, value)| (word, *value))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    const SAMPLE: &[&str] = &[
        "abide", "abled", "bread", "beard", "debar", "baked", "crane", "slate", "irate", "crate",
        "grate",
    ];

    #[test]
    fn empty_set_is_an_error() {
        let refs: Vec<&Word> = Vec::new();
        let result = PartitionScorer::default().best_guess(&refs, Metric::BucketVariance);
        assert_eq!(result, Err(EngineError::EmptyCandidateSet));
    }

    #[test]
    fn best_guess_is_table_minimum() {
        let pool = words(SAMPLE);
        let refs: Vec<&Word> = pool.iter().collect();
        let scorer = PartitionScorer::default();

        for metric in [Metric::BucketVariance, Metric::MaxInformation] {
            let (best, value) = scorer.best_guess(&refs, metric).unwrap();
            let table = scorer.score_table(&refs, metric);
            let (first, first_value) = table.smallest(1)[0];

            assert_eq!(best, first);
            assert!((value - first_value).abs() < f64::EPSILON);
            assert_eq!(table.get(best), Some(value));
        }
    }

    #[test]
    fn single_candidate_is_its_own_best_guess() {
        let pool = words(&["crane"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let (best, value) = PartitionScorer::default()
            .best_guess(&refs, Metric::BucketVariance)
            .unwrap();
        assert_eq!(best.text(), "crane");
        assert!(value.abs() < f64::EPSILON);
    }

    #[test]
    fn table_preserves_input_order() {
        let pool = words(SAMPLE);
        let refs: Vec<&Word> = pool.iter().collect();
        let table = PartitionScorer::default().score_table(&refs, Metric::MaxInformation);

        assert_eq!(table.len(), pool.len());
        assert_eq!(table.metric(), Metric::MaxInformation);
        for ((word, _), expected) in table.entries().iter().zip(&pool) {
            assert_eq!(word, expected);
        }
    }

    #[test]
    fn smallest_handles_oversized_request() {
        let table = ScoreTable::from_entries(
            Metric::BucketVariance,
            vec![(Word::new("crane").unwrap(), 1.5)],
        );
        assert_eq!(table.smallest(10).len(), 1);
        assert!(table.smallest(0).is_empty());
    }

    #[test]
    fn analyze_reports_both_metrics() {
        let pool = words(SAMPLE);
        let refs: Vec<&Word> = pool.iter().collect();
        let scorer = PartitionScorer::new(FeedbackRule::Standard);

        let metrics = scorer.analyze(&pool[2], &refs);
        assert_eq!(metrics.partitioned, pool.len() - 1);
        assert!(
            (metrics.variance - bucket_variance(FeedbackRule::Standard, &pool[2], &refs)).abs()
                < 1e-9
        );
        assert_eq!(
            metrics.absent_marks,
            absent_marks(FeedbackRule::Standard, &pool[2], &refs)
        );
    }
}
