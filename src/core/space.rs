//! Enumeration of feedback codes
//!
//! A word of length L admits 3^L feedback codes. The all-Match code is the
//! terminal "solved" signal, so callers that bucket intermediate feedback use
//! [`FeedbackSpace::intermediate_codes`].

use super::feedback::{Feedback, Mark, POW3};
use super::word::{MAX_WORD_LENGTH, WordError};

/// All feedback codes for one word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSpace {
    len: usize,
}

impl FeedbackSpace {
    /// Create the space for words of `len` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if `len` is outside `1..=MAX_WORD_LENGTH`.
    pub fn new(len: usize) -> Result<Self, WordError> {
        if len == 0 || len > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }
        Ok(Self { len })
    }

    /// Word length this space covers
    #[must_use]
    pub const fn word_len(self) -> usize {
        self.len
    }

    /// Number of codes (3^L)
    #[must_use]
    pub const fn size(self) -> u32 {
        POW3[self.len]
    }

    /// Every code, in ascending value order (all-Match first)
    pub fn codes(self) -> impl Iterator<Item = Feedback> {
        (0..self.size()).map(move |value| Feedback::from_value(value, self.len))
    }

    /// Every code except all-Match
    pub fn intermediate_codes(self) -> impl Iterator<Item = Feedback> {
        self.codes().filter(|code| !code.is_solved())
    }

    /// Every code at least as informative as `code`
    ///
    /// Positions that are Match in `code` stay Match; every other position may
    /// independently become Absent, Present or Match. The result has 3^k
    /// entries for k non-Match positions, in a fixed depth-first order.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{Feedback, FeedbackSpace};
    ///
    /// let space = FeedbackSpace::new(3).unwrap();
    /// let codes = space.at_least_as_good(Feedback::parse("131").unwrap());
    ///
    /// let text: Vec<String> = codes.iter().map(ToString::to_string).collect();
    /// assert_eq!(text, ["131", "121", "111"]);
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if `code` has a different length than the space
    #[must_use]
    pub fn at_least_as_good(self, code: Feedback) -> Vec<Feedback> {
        debug_assert_eq!(code.len(), self.len);

        let free = code.count(Mark::Present) + code.count(Mark::Absent);
        let mut result = Vec::with_capacity(POW3[free] as usize);
        let mut path = Vec::with_capacity(self.len);
        Self::expand(code, &mut path, &mut result);
        result
    }

    /// Sort key that puts `code` where [`at_least_as_good`](Self::at_least_as_good)
    /// would list it for `reference`, without building that list
    ///
    /// Codes that do not refine `reference` sort after all codes that do, in
    /// value order.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{Feedback, FeedbackSpace};
    ///
    /// let space = FeedbackSpace::new(3).unwrap();
    /// let reference = Feedback::parse("131").unwrap();
    /// let mut codes = space.at_least_as_good(reference);
    /// codes.reverse();
    /// codes.sort_by_key(|&code| space.response_rank(reference, code));
    /// assert_eq!(codes, space.at_least_as_good(reference));
    /// ```
    #[must_use]
    pub fn response_rank(self, reference: Feedback, code: Feedback) -> (bool, u32) {
        if !code.refines(reference) {
            return (true, code.value());
        }
        // Depth-first order tries Absent before Present before Match, with the
        // first position most significant
        let rank = code
            .marks()
            .fold(0, |rank, mark| rank * 3 + (Mark::Absent as u32 - mark as u32));
        (false, rank)
    }

    fn expand(code: Feedback, path: &mut Vec<Mark>, result: &mut Vec<Feedback>) {
        let idx = path.len();
        if idx == code.len() {
            result.push(Feedback::from_marks(path));
            return;
        }

        let options: &[Mark] = if code.mark(idx) == Mark::Match {
            &[Mark::Match]
        } else {
            &[Mark::Absent, Mark::Present, Mark::Match]
        };

        for &mark in options {
            path.push(mark);
            Self::expand(code, path, result);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn space_size_is_power_of_three() {
        assert_eq!(FeedbackSpace::new(5).unwrap().size(), 243);
        assert_eq!(FeedbackSpace::new(1).unwrap().size(), 3);
        assert_eq!(FeedbackSpace::new(5).unwrap().codes().count(), 243);
    }

    #[test]
    fn intermediate_codes_skip_solved() {
        let space = FeedbackSpace::new(5).unwrap();
        let codes: Vec<_> = space.intermediate_codes().collect();
        assert_eq!(codes.len(), 242);
        assert!(codes.iter().all(|c| !c.is_solved()));
    }

    #[test]
    fn codes_are_distinct() {
        let space = FeedbackSpace::new(4).unwrap();
        let unique: FxHashSet<_> = space.codes().collect();
        assert_eq!(unique.len(), 81);
    }

    #[test]
    fn invalid_lengths_rejected() {
        assert!(FeedbackSpace::new(0).is_err());
        assert!(FeedbackSpace::new(21).is_err());
    }

    #[test]
    fn at_least_as_good_keeps_matches() {
        let space = FeedbackSpace::new(5).unwrap();
        let reference = Feedback::parse("11331").unwrap();
        let codes = space.at_least_as_good(reference);

        assert_eq!(codes.len(), 9);
        for code in &codes {
            assert_eq!(code.mark(0), Mark::Match);
            assert_eq!(code.mark(1), Mark::Match);
            assert_eq!(code.mark(4), Mark::Match);
        }
        assert!(codes.contains(&reference));
        assert!(codes.contains(&Feedback::solved(5)));
    }

    #[test]
    fn at_least_as_good_order_is_depth_first() {
        let space = FeedbackSpace::new(2).unwrap();
        let codes = space.at_least_as_good(Feedback::parse("32").unwrap());
        let text: Vec<String> = codes.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            ["33", "32", "31", "23", "22", "21", "13", "12", "11"]
        );
    }

    #[test]
    fn at_least_as_good_of_solved_is_solved_only() {
        let space = FeedbackSpace::new(5).unwrap();
        let codes = space.at_least_as_good(Feedback::solved(5));
        assert_eq!(codes, vec![Feedback::solved(5)]);
    }

    #[test]
    fn at_least_as_good_of_all_absent_is_everything() {
        let space = FeedbackSpace::new(3).unwrap();
        let codes = space.at_least_as_good(Feedback::parse("333").unwrap());
        let unique: FxHashSet<_> = codes.iter().copied().collect();
        let all: FxHashSet<_> = space.codes().collect();
        assert_eq!(codes.len(), 27);
        assert_eq!(unique, all);
    }

    #[test]
    fn response_rank_reproduces_depth_first_order() {
        let space = FeedbackSpace::new(3).unwrap();
        for reference in space.codes() {
            let expected = space.at_least_as_good(reference);
            let mut ranked: Vec<Feedback> =
                space.codes().filter(|code| code.refines(reference)).collect();
            ranked.sort_by_key(|&code| space.response_rank(reference, code));
            assert_eq!(ranked, expected, "reference {reference}");
        }
    }

    #[test]
    fn response_rank_puts_unreachable_codes_last() {
        let space = FeedbackSpace::new(20).unwrap();
        let reference = Feedback::parse("13333333333333333333").unwrap();
        let reachable = Feedback::parse("11111111111111111113").unwrap();
        let unreachable = Feedback::parse("31111111111111111111").unwrap();
        assert!(
            space.response_rank(reference, reachable) < space.response_rank(reference, unreachable)
        );
    }
}
