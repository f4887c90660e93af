//! Exhaustive worst-case search
//!
//! Computes the minimax number of further guesses needed to identify any
//! solution consistent with a history, assuming every guess is drawn from the
//! remaining candidates and the solution is chosen adversarially.
//!
//! Past guesses are never candidates, so no line of play repeats a word. Each
//! child node receives its own candidate subset by value, which keeps
//! backtracking free of shared mutable state.

mod cancel;
mod memo;
mod search;

pub use cancel::CancelToken;
pub use memo::MemoTable;

use super::filter::{CandidateFilter, check_history_length};
use crate::core::{FeedbackRule, FeedbackSpace, GuessHistory, Word};
use crate::error::{Budget, EngineError};
use log::debug;
use rayon::prelude::*;
use search::{SearchContext, Worker, floor};

/// Limits and switches for one exhaustive search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Report `SearchBudgetExceeded` if the answer is larger than this
    pub max_depth: Option<u32>,
    /// Abort after visiting this many nodes
    pub max_nodes: Option<u64>,
    /// Reuse exact values for repeated candidate sets
    pub memoize: bool,
    /// Evaluate root guesses on the rayon pool
    pub parallel: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            max_nodes: None,
            memoize: true,
            parallel: false,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub const fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    #[must_use]
    pub const fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Worst-case number of further guesses, 0 once solved
    pub depth: u32,
    /// Earliest guess achieving `depth`; `None` when already solved
    pub best_guess: Option<Word>,
    /// Search nodes visited
    pub nodes: u64,
}

/// Minimax solver over a fixed dictionary
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver<'a> {
    dictionary: &'a [Word],
    rule: FeedbackRule,
    config: SearchConfig,
    cancel: CancelToken,
}

impl<'a> ExhaustiveSolver<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word], rule: FeedbackRule) -> Self {
        Self {
            dictionary,
            rule,
            config: SearchConfig::new(),
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub const fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Share `token` so another thread can stop the search
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Worst-case number of further guesses after `history`
    ///
    /// # Errors
    /// See [`search`](Self::search).
    ///
    /// # Examples
    /// ```
    /// use wordle_bounds::core::{FeedbackRule, GuessHistory, Word};
    /// use wordle_bounds::solver::ExhaustiveSolver;
    ///
    /// let dictionary: Vec<Word> = ["abide", "abled", "bread"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment);
    ///
    /// let history = GuessHistory::parse_turns(["abide:22322"]).unwrap();
    /// assert_eq!(solver.worst_case_depth(&history).unwrap(), 1);
    ///
    /// let solved = GuessHistory::parse_turns(["bread:11111"]).unwrap();
    /// assert_eq!(solver.worst_case_depth(&solved).unwrap(), 0);
    /// ```
    pub fn worst_case_depth(&self, history: &GuessHistory) -> Result<u32, EngineError> {
        self.search(history).map(|report| report.depth)
    }

    /// Run the search and report the depth, best guess and effort
    ///
    /// # Errors
    /// - `EngineError::InvalidWord` if a guess in `history` has the wrong length
    /// - `EngineError::EmptyCandidateSet` if the dictionary is empty
    /// - `EngineError::InconsistentHistory` if no dictionary word fits `history`
    /// - `EngineError::SearchBudgetExceeded` if a depth or node budget ran out
    /// - `EngineError::Cancelled` if the cancel token was set
    pub fn search(&self, history: &GuessHistory) -> Result<SearchReport, EngineError> {
        if self.cancel.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        if history.is_solved() {
            return Ok(SearchReport {
                depth: 0,
                best_guess: None,
                nodes: 0,
            });
        }

        let word_len = self
            .dictionary
            .first()
            .map(Word::len)
            .ok_or(EngineError::EmptyCandidateSet)?;
        check_history_length(history, word_len)?;
        let space = FeedbackSpace::new(word_len)?;

        let candidates = CandidateFilter::new(self.rule).filter_indices(history, self.dictionary);
        if candidates.is_empty() {
            return Err(EngineError::InconsistentHistory);
        }

        let ctx = SearchContext::new(
            self.dictionary,
            self.rule,
            space,
            self.config.memoize,
            self.config.max_nodes,
            &self.cancel,
        );
        let most = u32::try_from(candidates.len()).unwrap_or(u32::MAX);
        let limit = self.config.max_depth.map_or(most, |cap| cap.min(most));

        debug!(
            "exhaustive search over {} candidates (limit {limit}, parallel {})",
            candidates.len(),
            self.config.parallel
        );

        let outcome = if self.config.parallel {
            Self::search_root_parallel(&ctx, &candidates, history, limit)
        } else {
            Self::search_root(&ctx, &candidates, history, limit)
        };

        let best = outcome.map_err(|err| match err {
            EngineError::SearchBudgetExceeded {
                budget: budget @ Budget::Nodes(_),
                ..
            } => EngineError::SearchBudgetExceeded {
                budget,
                best_bound: ctx.best_root(),
            },
            other => other,
        })?;

        let Some((depth, guess)) = best else {
            return Err(EngineError::SearchBudgetExceeded {
                budget: Budget::Depth(limit),
                best_bound: None,
            });
        };

        debug!("worst case {depth} after {} nodes", ctx.nodes());
        Ok(SearchReport {
            depth,
            best_guess: Some(self.dictionary[guess as usize].clone()),
            nodes: ctx.nodes(),
        })
    }

    /// Root guesses in order, each bounded by the best found before it
    fn search_root(
        ctx: &SearchContext<'_>,
        candidates: &[u32],
        history: &GuessHistory,
        limit: u32,
    ) -> Result<Option<(u32, u32)>, EngineError> {
        let last = history.last_feedback();
        let floor = floor(candidates.len());
        let mut worker = Worker::new(ctx);
        let mut best = None;
        let mut bound = limit;

        for &guess in candidates {
            if let Some(worst) = worker.guess_value(guess, candidates, last, bound)? {
                ctx.record_root(worst);
                best = Some((worst, guess));
                if worst <= floor {
                    break;
                }
                bound = worst - 1;
            }
        }

        debug!(
            "memo held {} sets ({} hits)",
            worker.memo().len(),
            worker.memo().hits()
        );
        Ok(best)
    }

    /// Root guesses across the rayon pool
    ///
    /// Workers share only the best root value found so far. Each guess is
    /// bounded inclusively by it, so every guess tying the optimum is still
    /// found and the earliest one wins.
    fn search_root_parallel(
        ctx: &SearchContext<'_>,
        candidates: &[u32],
        history: &GuessHistory,
        limit: u32,
    ) -> Result<Option<(u32, u32)>, EngineError> {
        let last = history.last_feedback();

        let results = candidates
            .par_iter()
            .map_init(
                || Worker::new(ctx),
                |worker, &guess| {
                    let bound = ctx.best_root().map_or(limit, |best| best.min(limit));
                    let worst = worker.guess_value(guess, candidates, last, bound)?;
                    if let Some(worst) = worst {
                        ctx.record_root(worst);
                    }
                    Ok::<_, EngineError>(worst.map(|worst| (worst, guess)))
                },
            )
            .collect::<Result<Vec<_>, EngineError>>()?;

        Ok(results.into_iter().flatten().min())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    const SAMPLE: &[&str] = &[
        "abide", "abled", "bread", "beard", "debar", "baked", "ideal", "crane", "slate", "irate",
        "crate", "grate", "trace", "react", "cater",
    ];

    const SMALL: &[&str] = &["abide", "abled", "bread", "beard", "debar", "baked", "ideal"];

    /// Plain minimax over per-solution histories, no buckets or bounds
    fn naive_depth(dictionary: &[Word], history: &GuessHistory, rule: FeedbackRule) -> u32 {
        if history.is_solved() {
            return 0;
        }
        let candidates = CandidateFilter::new(rule).filter(history, dictionary);
        candidates
            .iter()
            .map(|&guess| {
                candidates
                    .iter()
                    .map(|&solution| {
                        let code = rule.feedback(guess, solution);
                        1 + naive_depth(dictionary, &history.extended(guess.clone(), code), rule)
                    })
                    .max()
                    .unwrap()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn solved_history_is_zero() {
        let dictionary = words(SAMPLE);
        let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment);

        for history in [
            GuessHistory::parse_turns(["crane:11111"]).unwrap(),
            GuessHistory::parse_turns(["slate:33111", "grate:11111"]).unwrap(),
        ] {
            let report = solver.search(&history).unwrap();
            assert_eq!(report.depth, 0);
            assert_eq!(report.best_guess, None);
        }
    }

    #[test]
    fn unsolved_history_is_positive() {
        let dictionary = words(SAMPLE);
        let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment);

        let history = GuessHistory::parse_turns(["slate:33111"]).unwrap();
        assert!(solver.worst_case_depth(&history).unwrap() >= 1);
        assert!(solver.worst_case_depth(&GuessHistory::new()).unwrap() >= 1);
    }

    #[test]
    fn small_sets_have_known_depths() {
        let rule = FeedbackRule::Containment;

        // One candidate: guess it
        let dictionary = words(&["abide", "abled", "bread"]);
        let history = GuessHistory::parse_turns(["abide:22322"]).unwrap();
        let report = ExhaustiveSolver::new(&dictionary, rule).search(&history).unwrap();
        assert_eq!(report.depth, 1);
        assert_eq!(report.best_guess.unwrap().text(), "bread");

        // Two candidates: the first guess may miss
        let dictionary = words(&["abc", "def"]);
        let solver = ExhaustiveSolver::new(&dictionary, rule);
        assert_eq!(solver.worst_case_depth(&GuessHistory::new()).unwrap(), 2);

        // "abc" tells "abd" and "xyz" apart, so two guesses suffice
        let dictionary = words(&["abc", "abd", "xyz"]);
        let report = ExhaustiveSolver::new(&dictionary, rule)
            .search(&GuessHistory::new())
            .unwrap();
        assert_eq!(report.depth, 2);
        assert_eq!(report.best_guess.unwrap().text(), "abc");

        // No guess separates "abd" from "abe"
        let dictionary = words(&["abc", "abd", "abe"]);
        let solver = ExhaustiveSolver::new(&dictionary, rule);
        assert_eq!(solver.worst_case_depth(&GuessHistory::new()).unwrap(), 3);
    }

    #[test]
    fn matches_plain_minimax() {
        let dictionary = words(SMALL);

        for rule in [FeedbackRule::Containment, FeedbackRule::Standard] {
            let solver = ExhaustiveSolver::new(&dictionary, rule);
            let mut histories = vec![GuessHistory::new()];
            for guess in ["abide", "bread"] {
                let guess = Word::new(guess).unwrap();
                let code = rule.feedback(&guess, &dictionary[3]);
                let mut history = GuessHistory::new();
                history.push(guess, code);
                histories.push(history);
            }

            for history in &histories {
                assert_eq!(
                    solver.worst_case_depth(history).unwrap(),
                    naive_depth(&dictionary, history, rule),
                    "{history} under {rule:?}"
                );
            }
        }
    }

    #[test]
    fn memo_parallel_and_sequential_agree() {
        let dictionary = words(SAMPLE);
        let histories = [
            GuessHistory::new(),
            GuessHistory::parse_turns(["slate:33111"]).unwrap(),
            GuessHistory::parse_turns(["abide:22322"]).unwrap(),
        ];

        let configs = [
            SearchConfig::new().with_memoize(false),
            SearchConfig::new(),
            SearchConfig::new().with_parallel(true),
            SearchConfig::new().with_parallel(true).with_memoize(false),
        ];

        for history in &histories {
            let reports: Vec<SearchReport> = configs
                .iter()
                .map(|&config| {
                    ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment)
                        .with_config(config)
                        .search(history)
                        .unwrap()
                })
                .collect();

            for report in &reports[1..] {
                assert_eq!(report.depth, reports[0].depth);
                assert_eq!(report.best_guess, reports[0].best_guess);
            }
        }
    }

    #[test]
    fn longest_words_search_only_occupied_buckets() {
        let dictionary = words(&[
            "abcdefghijklmnopqrst",
            "bcdefghijklmnopqrsta",
            "tsrqponmlkjihgfedcba",
        ]);
        let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment);

        assert_eq!(solver.worst_case_depth(&GuessHistory::new()), Ok(2));

        // Every letter is elsewhere, so any of 3^20 codes could follow
        let history = GuessHistory::parse_turns(["abcdefghijklmnopqrst:22222222222222222222"])
            .unwrap();
        let report = solver.search(&history).unwrap();
        assert_eq!(report.depth, 2);
        assert_eq!(report.best_guess, Some(dictionary[1].clone()));

        let parallel = solver.with_config(SearchConfig::new().with_parallel(true));
        assert_eq!(parallel.worst_case_depth(&history), Ok(2));
    }

    #[test]
    fn depth_cap_is_reported() {
        let dictionary = words(&["abc", "def"]);
        let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment)
            .with_config(SearchConfig::new().with_max_depth(1));

        assert_eq!(
            solver.worst_case_depth(&GuessHistory::new()),
            Err(EngineError::SearchBudgetExceeded {
                budget: Budget::Depth(1),
                best_bound: None,
            })
        );

        let relaxed = solver.with_config(SearchConfig::new().with_max_depth(2));
        assert_eq!(relaxed.worst_case_depth(&GuessHistory::new()), Ok(2));
    }

    #[test]
    fn node_budget_is_reported() {
        let dictionary = words(SAMPLE);
        for parallel in [false, true] {
            let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment)
                .with_config(SearchConfig::new().with_max_nodes(2).with_parallel(parallel));

            let err = solver.worst_case_depth(&GuessHistory::new()).unwrap_err();
            assert!(matches!(
                err,
                EngineError::SearchBudgetExceeded {
                    budget: Budget::Nodes(2),
                    ..
                }
            ));
        }
    }

    #[test]
    fn cancelled_search_stops() {
        let dictionary = words(SAMPLE);
        let token = CancelToken::new();
        let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment)
            .with_cancel_token(token.clone());

        token.cancel();
        assert_eq!(
            solver.worst_case_depth(&GuessHistory::new()),
            Err(EngineError::Cancelled)
        );
    }

    #[test]
    fn inconsistent_history_is_an_error() {
        let dictionary = words(SAMPLE);
        let solver = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment);
        let history = GuessHistory::parse_turns(["zzzzz:11112"]).unwrap();

        assert_eq!(
            solver.worst_case_depth(&history),
            Err(EngineError::InconsistentHistory)
        );
    }

    #[test]
    fn report_counts_nodes() {
        let dictionary = words(SAMPLE);
        let report = ExhaustiveSolver::new(&dictionary, FeedbackRule::Containment)
            .search(&GuessHistory::new())
            .unwrap();
        assert!(report.nodes > 0);
        assert!(report.best_guess.is_some());
    }
}
