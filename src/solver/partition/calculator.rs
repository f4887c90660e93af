//! Partition quality calculation
//!
//! Given a guess and a candidate set, measures how evenly the guess splits the
//! other candidates across feedback buckets.

use crate::core::{Feedback, FeedbackRule, FeedbackSpace, Mark, Word};
use crate::solver::strategy::Metric;
use rustc_hash::FxHashMap;

/// Summary of how a guess partitions a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionMetrics {
    /// Bucket-variance score (lower is a more even split)
    pub variance: f64,
    /// Total Absent marks across the other candidates
    pub absent_marks: u64,
    /// Number of non-empty buckets
    pub buckets_used: usize,
    /// Size of the largest bucket (worst case after this guess)
    pub largest_bucket: usize,
    /// Number of candidates partitioned (the set minus the guess itself)
    pub partitioned: usize,
}

/// Group the candidates other than `guess` by the feedback they produce
#[must_use]
pub fn bucket_counts(
    rule: FeedbackRule,
    guess: &Word,
    candidates: &[&Word],
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        if candidate == guess {
            continue;
        }
        let feedback = rule.feedback(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Sum of squared deviations from the mean over every bucket in the space
///
/// Buckets that received no candidate count too, each contributing `mean²`.
/// They are added in closed form rather than materialized.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_bounds::core::{Feedback, FeedbackSpace};
/// use wordle_bounds::solver::partition::variance_from_counts;
///
/// // 3 buckets for 1-letter words, 3 candidates split 2/1/0
/// let space = FeedbackSpace::new(1).unwrap();
/// let mut counts = FxHashMap::default();
/// counts.insert(Feedback::parse("2").unwrap(), 2);
/// counts.insert(Feedback::parse("3").unwrap(), 1);
///
/// // mean = 1: (2-1)² + (1-1)² + (0-1)² = 2
/// assert!((variance_from_counts(&counts, space) - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn variance_from_counts<S>(
    counts: &std::collections::HashMap<Feedback, usize, S>,
    space: FeedbackSpace,
) -> f64
where
    S: std::hash::BuildHasher,
{
    let buckets = f64::from(space.size());
    let total = counts.values().sum::<usize>() as f64;
    let mean = total / buckets;

    let occupied: f64 = counts
        .values()
        .map(|&count| {
            let diff = count as f64 - mean;
            diff * diff
        })
        .sum();
    let empty = buckets - counts.len() as f64;

    occupied + empty * mean * mean
}

/// Bucket-variance score of `guess` against `candidates`
///
/// Returns 0.0 when nothing is left to partition.
#[must_use]
pub fn bucket_variance(rule: FeedbackRule, guess: &Word, candidates: &[&Word]) -> f64 {
    let Ok(space) = FeedbackSpace::new(guess.len()) else {
        return 0.0;
    };
    let counts = bucket_counts(rule, guess, candidates);
    variance_from_counts(&counts, space)
}

/// Total number of Absent marks `guess` produces against the other candidates
#[must_use]
pub fn absent_marks(rule: FeedbackRule, guess: &Word, candidates: &[&Word]) -> u64 {
    candidates
        .iter()
        .filter(|&&candidate| candidate != guess)
        .map(|&candidate| rule.feedback(guess, candidate).count(Mark::Absent) as u64)
        .sum()
}

/// Score `guess` against `candidates` under `metric` (lower is better)
#[must_use]
pub fn score(rule: FeedbackRule, metric: Metric, guess: &Word, candidates: &[&Word]) -> f64 {
    match metric {
        Metric::BucketVariance => bucket_variance(rule, guess, candidates),
        Metric::MaxInformation => absent_marks(rule, guess, candidates) as f64,
    }
}

/// Calculate every partition metric for a guess in one pass
#[must_use]
pub fn calculate_metrics(rule: FeedbackRule, guess: &Word, candidates: &[&Word]) -> PartitionMetrics {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    let mut absent = 0u64;

    for &candidate in candidates {
        if candidate == guess {
            continue;
        }
        let feedback = rule.feedback(guess, candidate);
        absent += feedback.count(Mark::Absent) as u64;
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let variance = FeedbackSpace::new(guess.len())
        .map(|space| variance_from_counts(&counts, space))
        .unwrap_or(0.0);

    PartitionMetrics {
        variance,
        absent_marks: absent,
        buckets_used: counts.len(),
        largest_bucket: counts.values().copied().max().unwrap_or(0),
        partitioned: counts.values().sum(),
    }
}
