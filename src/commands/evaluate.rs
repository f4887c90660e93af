//! Batch evaluation of opening words
//!
//! Plays the selector from a fixed opening against every solution (or a random
//! sample of them) and aggregates the path lengths.

use super::{CommandError, progress_style};
use crate::core::{GuessHistory, Word};
use crate::solver::GuessSelector;
use indicatif::ProgressBar;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Configuration for an evaluation run
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    /// Openings to evaluate; the selector's own choice when empty
    pub openings: Vec<String>,
    /// Games longer than this many guesses are reported as over budget
    pub turn_budget: usize,
    /// Play only this many randomly chosen solutions
    pub sample: Option<usize>,
    /// Seed for the sample, random when `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl EvaluateConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            openings: Vec::new(),
            turn_budget: 6,
            sample: None,
            seed: None,
            show_progress: false,
        }
    }
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregated path lengths for one opening
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningStats {
    pub opening: String,
    pub games: usize,
    pub average: f64,
    pub max: usize,
    /// Solutions that needed `max` guesses
    pub max_words: Vec<String>,
    /// Solutions that needed more than the turn budget
    pub over_budget: Vec<String>,
    /// Path length to the solutions that needed it
    pub lengths: BTreeMap<usize, Vec<String>>,
}

/// Play `selector` from `opening` until `solution` is guessed
///
/// Returns every guess made, ending with the solution. Each guess after the
/// opening is a not-yet-guessed candidate and the solution always stays a
/// candidate, so the game ends.
///
/// # Errors
///
/// Returns an error if the selector fails, e.g. because `solution` is not in
/// its dictionary.
pub fn play_game(
    selector: &GuessSelector<'_>,
    opening: &Word,
    solution: &Word,
) -> Result<Vec<Word>, CommandError> {
    opening.check_same_length(solution)?;
    let rule = selector.rule();
    let mut history = GuessHistory::new();
    let mut path = vec![opening.clone()];

    while let Some(guess) = path.last()
        && guess != solution
    {
        history.push(guess.clone(), rule.feedback(guess, solution));
        let next = selector.select(&history)?;
        path.push(next.clone());
    }
    Ok(path)
}

/// Evaluate every configured opening
///
/// # Errors
///
/// Returns an error if an opening is not a valid word or a game fails.
pub fn evaluate_openings(
    selector: &GuessSelector<'_>,
    config: &EvaluateConfig,
) -> Result<Vec<OpeningStats>, CommandError> {
    let openings: Vec<Word> = if config.openings.is_empty() {
        vec![selector.select(&GuessHistory::new())?.clone()]
    } else {
        config
            .openings
            .iter()
            .map(|text| Word::with_alphabet(text.trim(), selector.alphabet()))
            .collect::<Result<_, _>>()?
    };

    let solutions = sample_solutions(selector.dictionary(), config);
    info!(
        "evaluating {} opening(s) against {} solutions",
        openings.len(),
        solutions.len()
    );

    openings
        .iter()
        .map(|opening| evaluate_opening(selector, opening, &solutions, config))
        .collect()
}

fn sample_solutions<'a>(dictionary: &'a [Word], config: &EvaluateConfig) -> Vec<&'a Word> {
    let Some(count) = config.sample else {
        return dictionary.iter().collect();
    };

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!("sampling {count} solutions with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    dictionary.choose_multiple(&mut rng, count).collect()
}

fn evaluate_opening(
    selector: &GuessSelector<'_>,
    opening: &Word,
    solutions: &[&Word],
    config: &EvaluateConfig,
) -> Result<OpeningStats, CommandError> {
    let bar = if config.show_progress {
        ProgressBar::new(solutions.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(progress_style());
    bar.set_message(format!("opening {opening}"));

    let played: Vec<(String, usize)> = solutions
        .par_iter()
        .map(|&solution| {
            let path = play_game(selector, opening, solution)?;
            bar.inc(1);
            Ok::<_, CommandError>((solution.text().to_string(), path.len()))
        })
        .collect::<Result<_, CommandError>>()?;
    bar.finish_and_clear();

    Ok(aggregate(opening, played, config.turn_budget))
}

fn aggregate(opening: &Word, played: Vec<(String, usize)>, turn_budget: usize) -> OpeningStats {
    let games = played.len();
    let total: usize = played.iter().map(|(_, length)| length).sum();
    let max = played.iter().map(|&(_, length)| length).max().unwrap_or(0);

    let mut lengths: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut over_budget = Vec::new();
    for (solution, length) in played {
        if length > turn_budget {
            over_budget.push(solution.clone());
        }
        lengths.entry(length).or_default().push(solution);
    }

    OpeningStats {
        opening: opening.text().to_string(),
        games,
        average: if games == 0 {
            0.0
        } else {
            total as f64 / games as f64
        },
        max,
        max_words: lengths.get(&max).cloned().unwrap_or_default(),
        over_budget,
        lengths,
    }
}
