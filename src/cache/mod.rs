//! On-disk cache for opening score tables
//!
//! Scoring every dictionary word as an opening is the slowest heuristic pass,
//! so its result can be kept in a JSON file. A cache is only used when its
//! metric, feedback rule and dictionary fingerprint all match the request;
//! anything else is recomputed.

use crate::core::{FeedbackRule, Word};
use crate::solver::{Metric, ScoreTable};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to access score cache {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode score cache")]
    Json(#[from] serde_json::Error),
}

/// What a cached table must have been computed with to be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKey {
    pub metric: Metric,
    pub rule: FeedbackRule,
    pub fingerprint: u64,
}

impl CacheKey {
    #[must_use]
    pub const fn new(metric: Metric, rule: FeedbackRule, fingerprint: u64) -> Self {
        Self {
            metric,
            rule,
            fingerprint,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    metric: String,
    rule: String,
    fingerprint: u64,
    scores: BTreeMap<String, f64>,
}

/// JSON score cache at a fixed path
#[derive(Debug, Clone)]
pub struct ScoreCache {
    path: PathBuf,
}

impl ScoreCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a table for `guesses`, or `None` if there is nothing usable
    ///
    /// A missing file, an unreadable document, a key mismatch or a missing
    /// guess all count as a miss.
    ///
    /// # Errors
    /// Returns `CacheError::Io` if the file exists but cannot be read.
    pub fn load(&self, key: CacheKey, guesses: &[&Word]) -> Result<Option<ScoreTable>, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no score cache at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(CacheError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let file: CacheFile = match serde_json::from_str(&content) {
            Ok(file) => file,
            Err(err) => {
                warn!("ignoring unreadable score cache {}: {err}", self.path.display());
                return Ok(None);
            }
        };

        if file.metric != key.metric.name()
            || file.rule != key.rule.name()
            || file.fingerprint != key.fingerprint
        {
            debug!("score cache {} is stale", self.path.display());
            return Ok(None);
        }

        let mut entries = Vec::with_capacity(guesses.len());
        for &guess in guesses {
            let Some(&value) = file.scores.get(guess.text()) else {
                debug!("score cache {} lacks '{guess}'", self.path.display());
                return Ok(None);
            };
            entries.push((guess.clone(), value));
        }

        debug!("score cache hit: {} entries", entries.len());
        Ok(Some(ScoreTable::from_entries(key.metric, entries)))
    }

    /// Write `table` under `key`, replacing any previous cache
    ///
    /// # Errors
    /// Returns `CacheError::Io` if the file cannot be written.
    pub fn store(&self, key: CacheKey, table: &ScoreTable) -> Result<(), CacheError> {
        let file = CacheFile {
            metric: key.metric.name().to_string(),
            rule: key.rule.name().to_string(),
            fingerprint: key.fingerprint,
            scores: table
                .entries()
                .iter()
                .map(|(word, value)| (word.text().to_string(), *value))
                .collect(),
        };

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json).map_err(|source| CacheError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("stored {} scores in {}", table.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PartitionScorer;

    fn temp_cache(name: &str) -> ScoreCache {
        let path = std::env::temp_dir().join(format!(
            "wordle_bounds_cache_{}_{name}.json",
            std::process::id()
        ));
        fs::remove_file(&path).ok();
        ScoreCache::new(path)
    }

    /// Real variance scores over every 3-letter word on a-h
    fn table() -> (Vec<Word>, ScoreTable) {
        let letters = b"abcdefgh";
        let mut words = Vec::new();
        for &a in letters {
            for &b in letters {
                for &c in letters {
                    words.push(Word::new(String::from_utf8(vec![a, b, c]).unwrap()).unwrap());
                }
            }
        }
        let refs: Vec<&Word> = words.iter().collect();
        let table = PartitionScorer::new(FeedbackRule::Containment)
            .score_table(&refs, Metric::BucketVariance);
        (words, table)
    }

    #[test]
    fn round_trips() {
        let cache = temp_cache("round_trip");
        let (words, table) = table();
        let refs: Vec<&Word> = words.iter().collect();
        let key = CacheKey::new(Metric::BucketVariance, FeedbackRule::Containment, 42);

        cache.store(key, &table).unwrap();
        let loaded = cache.load(key, &refs).unwrap().unwrap();
        for ((word, fresh), (_, cached)) in table.entries().iter().zip(loaded.entries()) {
            assert_eq!(fresh.to_bits(), cached.to_bits(), "score of {word} changed");
        }
        assert_eq!(loaded, table);

        fs::remove_file(cache.path()).ok();
    }

    #[test]
    fn missing_file_is_a_miss() {
        let cache = temp_cache("missing");
        let key = CacheKey::new(Metric::BucketVariance, FeedbackRule::Containment, 1);
        assert_eq!(cache.load(key, &[]).unwrap(), None);
    }

    #[test]
    fn stale_cache_is_ignored() {
        let cache = temp_cache("stale");
        let (words, table) = table();
        let refs: Vec<&Word> = words.iter().collect();
        let key = CacheKey::new(Metric::BucketVariance, FeedbackRule::Containment, 42);
        cache.store(key, &table).unwrap();

        let other_dictionary = CacheKey::new(Metric::BucketVariance, FeedbackRule::Containment, 43);
        let other_metric = CacheKey::new(Metric::MaxInformation, FeedbackRule::Containment, 42);
        let other_rule = CacheKey::new(Metric::BucketVariance, FeedbackRule::Standard, 42);
        for stale in [other_dictionary, other_metric, other_rule] {
            assert_eq!(cache.load(stale, &refs).unwrap(), None);
        }

        // A guess the cache never scored forces a recompute
        let extra = Word::new("grate").unwrap();
        let mut more = refs.clone();
        more.push(&extra);
        assert_eq!(cache.load(key, &more).unwrap(), None);

        fs::remove_file(cache.path()).ok();
    }

    #[test]
    fn corrupt_file_is_a_miss() {
        let cache = temp_cache("corrupt");
        fs::write(cache.path(), "{ not json").unwrap();
        let key = CacheKey::new(Metric::BucketVariance, FeedbackRule::Containment, 1);
        assert_eq!(cache.load(key, &[]).unwrap(), None);
        fs::remove_file(cache.path()).ok();
    }
}
