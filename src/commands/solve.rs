//! Word solving command
//!
//! Plays the selector against a known solution and records every turn.

use super::CommandError;
use crate::core::{Feedback, GuessHistory, Word};
use crate::solver::GuessSelector;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    /// Forced first guess; the selector picks when `None`
    pub opening: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            opening: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Partition score of the guess, absent for a forced opening
    pub score: Option<f64>,
}

/// Solve `config.target` with `selector`
///
/// # Errors
///
/// Returns an error if:
/// - The target or opening is not a valid word of the dictionary's length
/// - The target is not in the selector's dictionary
/// - The selector fails to produce a guess
pub fn solve_word(
    config: SolveConfig,
    selector: &GuessSelector<'_>,
) -> Result<SolveResult, CommandError> {
    let alphabet = selector.alphabet();
    let target = Word::with_alphabet(config.target.trim(), alphabet)?;
    if !selector.dictionary().contains(&target) {
        return Err(CommandError::NotInDictionary(target.text().to_string()));
    }
    let opening = config
        .opening
        .as_deref()
        .map(|text| Word::with_alphabet(text.trim(), alphabet))
        .transpose()?;
    if let Some(opening) = &opening {
        opening.check_same_length(&target)?;
    }

    let rule = selector.rule();
    let mut history = GuessHistory::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let candidates_before = selector.count_candidates(&history)?;

        let (guess, score) = match (&opening, turn) {
            (Some(opening), 0) => (opening.clone(), None),
            _ => {
                let (guess, score) = selector.select_scored(&history)?;
                (guess.clone(), Some(score))
            }
        };

        let feedback = rule.feedback(&guess, &target);
        history.push(guess.clone(), feedback);
        let candidates_after = if feedback.is_solved() {
            1
        } else {
            selector.count_candidates(&history)?
        };

        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after,
            score,
        });

        if feedback.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, FeedbackRule, WordError};
    use crate::solver::Metric;

    fn words() -> Vec<Word> {
        [
            "abide", "abled", "bread", "beard", "debar", "baked", "crane", "slate", "irate",
            "crate", "grate", "trace",
        ]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect()
    }

    #[test]
    fn solve_word_succeeds() {
        let dictionary = words();
        let selector =
            GuessSelector::new(&dictionary, FeedbackRule::Containment, Metric::BucketVariance);

        for target in &dictionary {
            let result = solve_word(SolveConfig::new(target.text().to_string()), &selector).unwrap();
            assert!(result.success, "failed on {target}");
            assert_eq!(result.guesses.last().unwrap().word, *target);
        }
    }

    #[test]
    fn solve_records_history() {
        let dictionary = words();
        let selector =
            GuessSelector::new(&dictionary, FeedbackRule::Standard, Metric::MaxInformation);

        let result = solve_word(SolveConfig::new("grate".to_string()), &selector).unwrap();
        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn forced_opening_is_played_first() {
        let dictionary = words();
        let selector =
            GuessSelector::new(&dictionary, FeedbackRule::Containment, Metric::BucketVariance);

        let mut config = SolveConfig::new("beard".to_string());
        config.opening = Some("abide".to_string());

        let result = solve_word(config, &selector).unwrap();
        assert_eq!(result.guesses[0].word.text(), "abide");
        assert_eq!(result.guesses[0].feedback.to_string(), "22322");
        assert_eq!(result.guesses[0].score, None);
        assert!(result.success);
    }

    #[test]
    fn unknown_target_returns_error() {
        let dictionary = words();
        let selector =
            GuessSelector::new(&dictionary, FeedbackRule::Containment, Metric::BucketVariance);

        let result = solve_word(SolveConfig::new("zzzzz".to_string()), &selector);
        assert!(matches!(result, Err(CommandError::NotInDictionary(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let dictionary = words();
        let selector =
            GuessSelector::new(&dictionary, FeedbackRule::Containment, Metric::BucketVariance);

        let mut config = SolveConfig::new("trace".to_string());
        config.max_guesses = 1;
        config.opening = Some("abide".to_string());

        let result = solve_word(config, &selector).unwrap();
        assert_eq!(result.guesses.len(), 1);
        assert!(!result.success);
    }

    #[test]
    fn words_follow_the_selector_alphabet() {
        let digits = Alphabet::from_symbols("0123456789").unwrap();
        let dictionary: Vec<Word> = ["12345", "23451", "67890"]
            .iter()
            .map(|w| Word::with_alphabet(*w, digits).unwrap())
            .collect();
        let selector =
            GuessSelector::new(&dictionary, FeedbackRule::Containment, Metric::BucketVariance)
                .with_alphabet(digits);

        let result = solve_word(SolveConfig::new("67890".to_string()), &selector).unwrap();
        assert!(result.success);

        let mut config = SolveConfig::new("67890".to_string());
        config.opening = Some("abcde".to_string());
        assert!(matches!(
            solve_word(config, &selector),
            Err(CommandError::Word(WordError::OutsideAlphabet('a')))
        ));
    }
}
