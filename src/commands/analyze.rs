//! Opening analysis command
//!
//! Reports both partition metrics and the bucket summary for one opening.

use super::CommandError;
use crate::core::{FeedbackRule, Word, WordError};
use crate::solver::{PartitionMetrics, PartitionScorer};
use crate::wordlists::Dictionary;

/// Result of analyzing an opening
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: PartitionMetrics,
    pub total_candidates: usize,
}

impl AnalysisResult {
    /// Mean bucket size over the non-empty buckets
    #[must_use]
    pub fn average_bucket(&self) -> f64 {
        if self.metrics.buckets_used == 0 {
            0.0
        } else {
            self.metrics.partitioned as f64 / self.metrics.buckets_used as f64
        }
    }
}

/// Analyze `word` as an opening against `solutions`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or has the wrong length
/// - The word is not in the guess list
pub fn analyze_opening(
    word: &str,
    guesses: &Dictionary,
    solutions: &Dictionary,
    rule: FeedbackRule,
) -> Result<AnalysisResult, CommandError> {
    let parsed = guesses.parse_word(word)?;
    if parsed.len() != solutions.word_len() {
        return Err(CommandError::Word(WordError::LengthMismatch {
            expected: solutions.word_len(),
            found: parsed.len(),
        }));
    }
    let word = guesses
        .find(parsed.text())
        .ok_or_else(|| CommandError::NotInDictionary(parsed.text().to_string()))?;

    let candidates: Vec<&Word> = solutions.words().iter().collect();
    let metrics = PartitionScorer::new(rule).analyze(word, &candidates);

    Ok(AnalysisResult {
        word: word.clone(),
        metrics,
        total_candidates: candidates.len(),
    })
}
