//! Feedback calculation and representation
//!
//! A feedback code encodes the per-position result of comparing a guess with a
//! solution, using base-3 encoding:
//! - 0 = Match (right letter, right position)
//! - 1 = Present (letter elsewhere in the solution)
//! - 2 = Absent (letter not in the solution)
//!
//! Position `i` contributes `digit × 3^i`, so the all-Match code is always 0.
//! Textual codes use the digits `1`/`2`/`3` for Match/Present/Absent.

use super::word::{MAX_WORD_LENGTH, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Powers of three up to 3^20
pub(crate) const POW3: [u32; MAX_WORD_LENGTH + 1] = {
    let mut table = [1u32; MAX_WORD_LENGTH + 1];
    let mut i = 1;
    while i <= MAX_WORD_LENGTH {
        table[i] = table[i - 1] * 3;
        i += 1;
    }
    table
};

/// Result for a single position
///
/// Ordered from most to least informative: `Match < Present < Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Match = 0,
    Present = 1,
    Absent = 2,
}

impl Mark {
    /// All marks in encoding order
    pub const ALL: [Self; 3] = [Self::Match, Self::Present, Self::Absent];

    #[inline]
    const fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Self::Match,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// The digit used in textual codes (`1`, `2` or `3`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => '1',
            Self::Present => '2',
            Self::Absent => '3',
        }
    }
}

/// Rule used to decide which mismatched positions are marked Present
///
/// Whichever rule is chosen must be used for both feedback calculation and
/// candidate filtering, otherwise a true solution can be filtered out by its
/// own feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackRule {
    /// A letter is Present if it occurs anywhere in the solution.
    ///
    /// Repeated guess letters can all be marked Present even when the solution
    /// holds fewer unmatched copies.
    #[default]
    Containment,
    /// Official Wordle scoring: Matches consume letters first, then Present
    /// marks are drawn left to right from the remaining letter counts.
    Standard,
}

impl FeedbackRule {
    /// Parse a rule name: "containment" (default) or "standard"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "containment" | "simple" => Some(Self::Containment),
            "standard" | "official" => Some(Self::Standard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Containment => "containment",
            Self::Standard => "standard",
        }
    }

    /// Calculate feedback under this rule
    #[inline]
    #[must_use]
    pub fn feedback(self, guess: &Word, solution: &Word) -> Feedback {
        Feedback::calculate_with(self, guess, solution)
    }
}

/// Feedback code for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    value: u32,
    len: u8,
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}' (expected 1/2/3, G/Y/- or colored squares)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// The all-Match code for a word of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` is zero or exceeds `MAX_WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn solved(len: usize) -> Self {
        debug_assert!(len > 0 && len <= MAX_WORD_LENGTH);
        Self {
            value: 0,
            len: len as u8,
        }
    }

    /// Create a code from its raw base-3 value
    ///
    /// # Panics
    /// Panics in debug mode if `value >= 3^len`
    #[inline]
    #[must_use]
    pub const fn from_value(value: u32, len: usize) -> Self {
        debug_assert!(len > 0 && len <= MAX_WORD_LENGTH);
        debug_assert!(value < POW3[len]);
        Self {
            value,
            len: len as u8,
        }
    }

    /// Build a code from per-position marks
    ///
    /// # Panics
    /// Panics in debug mode if `marks` is empty or longer than `MAX_WORD_LENGTH`
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(!marks.is_empty() && marks.len() <= MAX_WORD_LENGTH);
        let value = marks
            .iter()
            .enumerate()
            .map(|(i, &mark)| mark as u32 * POW3[i])
            .sum();
        Self {
            value,
            len: marks.len() as u8,
        }
    }

    /// Raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false: codes have at least one position
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is a Match
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.value == 0
    }

    /// Mark at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        assert!(position < self.len(), "position out of range");
        Mark::from_digit(self.value / POW3[position] % 3)
    }

    /// Iterate over the marks from the first position to the last
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        (0..self.len()).map(move |i| self.mark(i))
    }

    /// Check that every Match in `reference` is also a Match here
    #[must_use]
    pub fn refines(self, reference: Self) -> bool {
        self.len == reference.len
            && reference
                .marks()
                .zip(self.marks())
                .all(|(old, new)| old != Mark::Match || new == Mark::Match)
    }

    /// Count how many positions carry `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().filter(|&m| m == mark).count()
    }

    /// Calculate feedback under the containment rule
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{Feedback, Word};
    ///
    /// let guess = Word::new("abide").unwrap();
    /// let solution = Word::new("bread").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &solution);
    /// assert_eq!(feedback.to_string(), "22322");
    /// ```
    #[inline]
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        Self::calculate_with(FeedbackRule::Containment, guess, solution)
    }

    /// Calculate feedback under the given rule
    ///
    /// Both words must have the same length; use [`feedback`] for a checked
    /// version.
    #[must_use]
    pub fn calculate_with(rule: FeedbackRule, guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len());
        match rule {
            FeedbackRule::Containment => Self::containment(guess, solution),
            FeedbackRule::Standard => Self::standard(guess, solution),
        }
    }

    fn containment(guess: &Word, solution: &Word) -> Self {
        let mut value = 0;
        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            let mark = if g == s {
                Mark::Match
            } else if solution.has_letter(g) {
                Mark::Present
            } else {
                Mark::Absent
            };
            value += mark as u32 * POW3[i];
        }
        Self {
            value,
            len: guess.len() as u8,
        }
    }

    fn standard(guess: &Word, solution: &Word) -> Self {
        let len = guess.len();
        let mut marks = [Mark::Absent; MAX_WORD_LENGTH];
        let mut available = solution.char_counts();

        // First pass: matches consume their letters
        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Match;
                available[usize::from(g)] -= 1;
            }
        }

        // Second pass: present marks drawn from what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Absent && available[usize::from(g)] > 0 {
                marks[i] = Mark::Present;
                available[usize::from(g)] -= 1;
            }
        }

        Self::from_marks(&marks[..len])
    }

    /// Parse a code like "11331", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackParseError` on an empty or over-long string, or on an
    /// unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::Feedback;
    ///
    /// let digits = Feedback::parse("12331").unwrap();
    /// let letters = Feedback::parse("GY--G").unwrap();
    /// assert_eq!(digits, letters);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackParseError> {
        let marks = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '1' | 'G' | 'g' | '🟩' => Ok(Mark::Match),
                '2' | 'Y' | 'y' | '🟨' => Ok(Mark::Present),
                '3' | '-' | '_' | '⬜' | '⬛' => Ok(Mark::Absent),
                other => Err(FeedbackParseError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if marks.is_empty() || marks.len() > MAX_WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(marks.len()));
        }

        Ok(Self::from_marks(&marks))
    }

    /// Convert the code to colored squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Match => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Checked feedback calculation under the containment rule
///
/// # Errors
/// Returns `WordError::LengthMismatch` if the words differ in length.
pub fn feedback(guess: &Word, solution: &Word) -> Result<Feedback, WordError> {
    guess.check_same_length(solution)?;
    Ok(Feedback::calculate(guess, solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn golden_abide_against_bread() {
        // a: elsewhere, b: elsewhere, i: absent, d: elsewhere, e: elsewhere
        let code = Feedback::calculate(&word("abide"), &word("bread"));
        assert_eq!(code.to_string(), "22322");
        assert_eq!(
            code.marks().collect::<Vec<_>>(),
            vec![
                Mark::Present,
                Mark::Present,
                Mark::Absent,
                Mark::Present,
                Mark::Present
            ]
        );
    }

    #[test]
    fn solved_code_is_zero() {
        let w = word("bread");
        let code = Feedback::calculate(&w, &w);
        assert!(code.is_solved());
        assert_eq!(code, Feedback::solved(5));
        assert_eq!(code.to_string(), "11111");
    }

    #[test]
    fn word_against_itself_always_solved() {
        for text in ["abide", "abled", "bread", "speed", "aaaaa", "cat"] {
            let w = word(text);
            for rule in [FeedbackRule::Containment, FeedbackRule::Standard] {
                assert!(rule.feedback(&w, &w).is_solved(), "{text} under {rule:?}");
            }
        }
    }

    #[test]
    fn match_count_equals_equal_positions() {
        let words = ["abide", "abled", "bread", "speed", "erase", "robot", "floor"];
        for g in words {
            for s in words {
                let (gw, sw) = (word(g), word(s));
                let equal = gw
                    .chars()
                    .iter()
                    .zip(sw.chars())
                    .filter(|(a, b)| a == b)
                    .count();
                for rule in [FeedbackRule::Containment, FeedbackRule::Standard] {
                    assert_eq!(rule.feedback(&gw, &sw).count(Mark::Match), equal);
                }
            }
        }
    }

    #[test]
    fn containment_overcounts_repeated_letters() {
        // SPEED vs ABIDE: only one E in the solution, both guess E's are Present
        let code = Feedback::calculate(&word("speed"), &word("abide"));
        assert_eq!(code.to_string(), "33222");
    }

    #[test]
    fn standard_rule_consumes_letters() {
        // Only one E to hand out after the match-free first pass
        let code = FeedbackRule::Standard.feedback(&word("speed"), &word("abide"));
        assert_eq!(code.to_string(), "33232");

        // ROBOT vs FLOOR: second O is a match, first O takes the remaining O
        let code = FeedbackRule::Standard.feedback(&word("robot"), &word("floor"));
        assert_eq!(code.to_string(), "22313");
    }

    #[test]
    fn rules_agree_without_repeated_letters() {
        let code_a = Feedback::calculate(&word("crane"), &word("slate"));
        let code_b = FeedbackRule::Standard.feedback(&word("crane"), &word("slate"));
        assert_eq!(code_a, code_b);
        assert_eq!(code_a.to_string(), "33131");
    }

    #[test]
    fn parse_accepts_all_notations() {
        let digits = Feedback::parse("12331").unwrap();
        assert_eq!(Feedback::parse("GY--G").unwrap(), digits);
        assert_eq!(Feedback::parse("gy__g").unwrap(), digits);
        assert_eq!(Feedback::parse("🟩🟨⬜⬜🟩").unwrap(), digits);
        assert_eq!(digits.to_string(), "12331");
        assert_eq!(digits.to_emoji(), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Feedback::parse("12x31"),
            Err(FeedbackParseError::InvalidSymbol('x'))
        );
        assert_eq!(Feedback::parse(""), Err(FeedbackParseError::InvalidLength(0)));
        assert!(Feedback::parse(&"1".repeat(21)).is_err());
        assert!("11111".parse::<Feedback>().unwrap().is_solved());
    }

    #[test]
    fn from_marks_and_mark_round_trip_positions() {
        let marks = [Mark::Absent, Mark::Match, Mark::Present];
        let code = Feedback::from_marks(&marks);
        assert_eq!(code.len(), 3);
        assert_eq!(code.value(), 2 + 9);
        assert_eq!(code.mark(0), Mark::Absent);
        assert_eq!(code.mark(1), Mark::Match);
        assert_eq!(code.mark(2), Mark::Present);
    }

    #[test]
    fn checked_feedback_rejects_length_mismatch() {
        assert!(feedback(&word("bread"), &word("bred")).is_err());
        assert_eq!(
            feedback(&word("abide"), &word("bread")).unwrap().to_string(),
            "22322"
        );
    }

    #[test]
    fn mark_ordering() {
        assert!(Mark::Match < Mark::Present);
        assert!(Mark::Present < Mark::Absent);
    }

    #[test]
    fn rule_names() {
        assert_eq!(
            FeedbackRule::from_name("standard"),
            Some(FeedbackRule::Standard)
        );
        assert_eq!(
            FeedbackRule::from_name("containment"),
            Some(FeedbackRule::Containment)
        );
        assert_eq!(FeedbackRule::from_name("bogus"), None);
        assert_eq!(FeedbackRule::default(), FeedbackRule::Containment);
    }

    #[test]
    fn refines_keeps_matches() {
        let reference = Feedback::parse("13231").unwrap();
        assert!(Feedback::parse("11111").unwrap().refines(reference));
        assert!(Feedback::parse("12331").unwrap().refines(reference));
        assert!(!Feedback::parse("33231").unwrap().refines(reference));
        assert!(!Feedback::parse("1323").unwrap().refines(reference));
    }
}
