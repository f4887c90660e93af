//! Partition metrics and the fallback policy between them

use crate::core::{GuessHistory, Mark};

/// Metric used to rank guesses; lower scores are better for both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Squared deviation of bucket sizes from an even split
    #[default]
    BucketVariance,
    /// Total Absent marks a guess would produce across the candidates
    MaxInformation,
}

impl Metric {
    /// Create metric from name string
    ///
    /// Supported names: "variance", "std-dev", "max-info", "max-information"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "variance" | "bucket-variance" | "std-dev" => Some(Self::BucketVariance),
            "max-info" | "max-information" => Some(Self::MaxInformation),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BucketVariance => "variance",
            Self::MaxInformation => "max-info",
        }
    }

    /// The metric to actually use after `history`
    ///
    /// Once the most recent feedback holds no Absent mark there are no letters
    /// left to exclude, so max-information falls back to bucket variance. An
    /// empty history never falls back.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::GuessHistory;
    /// use wordle_bounds::solver::Metric;
    ///
    /// let history = GuessHistory::parse_turns(["abide:22122"]).unwrap();
    /// assert_eq!(Metric::MaxInformation.effective(&history), Metric::BucketVariance);
    /// ```
    #[must_use]
    pub fn effective(self, history: &GuessHistory) -> Self {
        match history.last_feedback() {
            Some(last) if last.count(Mark::Absent) == 0 => Self::BucketVariance,
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for metric in [Metric::BucketVariance, Metric::MaxInformation] {
            assert_eq!(Metric::from_name(metric.name()), Some(metric));
        }
        assert_eq!(Metric::from_name("std-dev"), Some(Metric::BucketVariance));
        assert_eq!(Metric::from_name("entropy"), None);
    }

    #[test]
    fn max_info_kept_while_letters_are_excludable() {
        let history = GuessHistory::parse_turns(["abide:22322"]).unwrap();
        assert_eq!(
            Metric::MaxInformation.effective(&history),
            Metric::MaxInformation
        );
    }

    #[test]
    fn fallback_only_looks_at_latest_turn() {
        let history = GuessHistory::parse_turns(["abide:33333", "bread:12211"]).unwrap();
        assert_eq!(
            Metric::MaxInformation.effective(&history),
            Metric::BucketVariance
        );

        let history = GuessHistory::parse_turns(["bread:12211", "abide:33333"]).unwrap();
        assert_eq!(
            Metric::MaxInformation.effective(&history),
            Metric::MaxInformation
        );
    }

    #[test]
    fn empty_history_never_falls_back() {
        assert_eq!(
            Metric::MaxInformation.effective(&GuessHistory::new()),
            Metric::MaxInformation
        );
    }

    #[test]
    fn variance_is_unaffected() {
        let history = GuessHistory::parse_turns(["abide:22122"]).unwrap();
        assert_eq!(
            Metric::BucketVariance.effective(&history),
            Metric::BucketVariance
        );
    }
}
