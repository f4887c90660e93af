//! Opening ranking command
//!
//! Scores every guess-list word as an opening against the solution list.

use super::{CommandError, progress_style};
use crate::cache::{CacheKey, ScoreCache};
use crate::core::{FeedbackRule, Word};
use crate::solver::{Metric, PartitionScorer, ScoreTable};
use crate::wordlists::Dictionary;
use indicatif::ProgressBar;
use log::info;
use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::path::PathBuf;

/// Configuration for ranking openings
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub metric: Metric,
    pub rule: FeedbackRule,
    pub top: usize,
    pub cache: Option<PathBuf>,
    pub show_progress: bool,
}

impl RankConfig {
    #[must_use]
    pub const fn new(metric: Metric, rule: FeedbackRule) -> Self {
        Self {
            metric,
            rule,
            top: 10,
            cache: None,
            show_progress: false,
        }
    }
}

/// Ranked openings
#[derive(Debug, Clone)]
pub struct RankResult {
    pub table: ScoreTable,
    pub best: Vec<(Word, f64)>,
    pub candidates: usize,
    pub from_cache: bool,
}

/// Score every word of `guesses` as an opening against `solutions`
///
/// # Errors
///
/// Returns an error if the cache exists but cannot be read or written.
pub fn rank_openings(
    guesses: &Dictionary,
    solutions: &Dictionary,
    config: &RankConfig,
) -> Result<RankResult, CommandError> {
    let guess_refs: Vec<&Word> = guesses.words().iter().collect();
    let solution_refs: Vec<&Word> = solutions.words().iter().collect();

    let cache = config.cache.as_ref().map(ScoreCache::new);
    let key = CacheKey::new(
        config.metric,
        config.rule,
        combined_fingerprint(guesses, solutions),
    );

    let cached = match &cache {
        Some(cache) => cache.load(key, &guess_refs)?,
        None => None,
    };
    let from_cache = cached.is_some();

    let table = if let Some(table) = cached {
        info!("using {} cached opening scores", table.len());
        table
    } else {
        let bar = if config.show_progress {
            ProgressBar::new(guess_refs.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(progress_style());
        bar.set_message(format!("scoring by {}", config.metric.name()));

        let table = PartitionScorer::new(config.rule).score_table_with_progress(
            &guess_refs,
            &solution_refs,
            config.metric,
            || bar.inc(1),
        );
        bar.finish_and_clear();

        if let Some(cache) = &cache {
            cache.store(key, &table)?;
        }
        table
    };

    let best = table
        .smallest(config.top)
        .into_iter()
        .map(|(word, value)| (word.clone(), value))
        .collect();

    Ok(RankResult {
        table,
        best,
        candidates: solutions.len(),
        from_cache,
    })
}

fn combined_fingerprint(guesses: &Dictionary, solutions: &Dictionary) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(guesses.fingerprint());
    hasher.write_u64(solutions.fingerprint());
    hasher.finish()
}
