//! Wordle bounds - CLI
//!
//! Opening-word ranking, next-guess suggestions and exhaustive worst-case
//! bounds for Wordle.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_bounds::{
    commands::{
        BoundConfig, EvaluateConfig, RankConfig, SolveConfig, analyze_opening, bound_history,
        evaluate_openings, next_guess, rank_openings, solve_word,
    },
    core::{Alphabet, FeedbackRule},
    output::{
        print_analysis_result, print_bound_result, print_evaluation, print_next_result,
        print_rank_result, print_solve_result,
    },
    solver::{GuessSelector, Metric, SearchConfig},
    wordlists::{Dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_bounds",
    about = "Wordle opening scoring, candidate filtering and exhaustive worst-case bounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guess list: one word per line, or a JSON array of strings
    #[arg(short = 'w', long, global = true, default_value = "all_words.json")]
    words: PathBuf,

    /// Solution list (defaults to the guess list)
    #[arg(short = 's', long, global = true)]
    solutions: Option<PathBuf>,

    /// Metric: variance (default) or max-info
    #[arg(short, long, global = true, default_value = "variance")]
    metric: String,

    /// Feedback rule: containment (default) or standard
    #[arg(short, long, global = true, default_value = "containment")]
    rule: String,

    /// Symbols words may use (defaults to a-z)
    #[arg(long, global = true)]
    alphabet: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every guess as an opening and list the best
    Rank {
        /// Number of openings to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// JSON file to reuse and refresh opening scores
        #[arg(short, long)]
        cache: Option<PathBuf>,
    },

    /// Show both metrics for one opening
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Suggest the next guess for a history of guess:feedback turns
    Next {
        /// Turns such as `abide:22322` (1 = match, 2 = present, 3 = absent)
        turns: Vec<String>,

        /// Number of remaining candidates to list
        #[arg(short = 'l', long, default_value = "20")]
        list: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Give up after this many guesses
        #[arg(long, default_value = "6")]
        max_guesses: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Exhaustive worst-case number of guesses after a history
    Bound {
        /// Turns such as `abide:22322`
        turns: Vec<String>,

        /// Fail if the answer exceeds this many guesses
        #[arg(long)]
        max_depth: Option<u32>,

        /// Fail after visiting this many search nodes
        #[arg(long)]
        max_nodes: Option<u64>,

        /// Cancel the search after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Disable the memo table
        #[arg(long)]
        no_memo: bool,

        /// Search root guesses in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Play every solution from each opening and report path lengths
    Evaluate {
        /// Opening words (defaults to the selector's own choice)
        #[arg(short = 'f', long = "first-word")]
        openings: Vec<String>,

        /// Report solutions needing more than this many guesses
        #[arg(short, long, default_value = "6")]
        budget: usize,

        /// Play only this many random solutions
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long)]
        seed: Option<u64>,

        /// Write the statistics as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let metric = Metric::from_name(&cli.metric)
        .with_context(|| format!("unknown metric '{}'", cli.metric))?;
    let rule = FeedbackRule::from_name(&cli.rule)
        .with_context(|| format!("unknown feedback rule '{}'", cli.rule))?;
    let alphabet = match &cli.alphabet {
        Some(symbols) => Alphabet::from_symbols(symbols).context("invalid alphabet")?,
        None => Alphabet::LOWERCASE,
    };

    let (guesses, solutions) = load_wordlists(&cli.words, cli.solutions.as_deref(), alphabet)?;
    let selector = GuessSelector::new(solutions.words(), rule, metric).with_alphabet(alphabet);

    match cli.command {
        Commands::Rank { top, cache } => {
            let config = RankConfig {
                top,
                cache,
                show_progress: true,
                ..RankConfig::new(metric, rule)
            };
            let result = rank_openings(&guesses, &solutions, &config)?;
            print_rank_result(&result);
        }
        Commands::Analyze { word } => {
            let result = analyze_opening(&word, &guesses, &solutions, rule)?;
            print_analysis_result(&result);
        }
        Commands::Next { turns, list } => {
            let result = next_guess(&turns, &selector)?;
            print_next_result(&result, list);
        }
        Commands::Solve {
            word,
            first_word,
            max_guesses,
            verbose,
        } => {
            let config = SolveConfig {
                max_guesses,
                opening: first_word,
                ..SolveConfig::new(word)
            };
            let result = solve_word(config, &selector)?;
            print_solve_result(&result, verbose);
        }
        Commands::Bound {
            turns,
            max_depth,
            max_nodes,
            timeout,
            no_memo,
            parallel,
        } => {
            let config = BoundConfig {
                search: SearchConfig {
                    max_depth,
                    max_nodes,
                    memoize: !no_memo,
                    parallel,
                },
                timeout: timeout.map(Duration::from_secs),
            };
            let result = bound_history(&turns, &solutions, rule, &config)?;
            print_bound_result(&result);
        }
        Commands::Evaluate {
            openings,
            budget,
            sample,
            seed,
            output,
        } => {
            let config = EvaluateConfig {
                openings,
                turn_budget: budget,
                sample,
                seed,
                show_progress: true,
            };
            let stats = evaluate_openings(&selector, &config)?;
            print_evaluation(&stats, budget);

            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                serde_json::to_writer_pretty(BufWriter::new(file), &stats)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("wrote evaluation to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Load the guess list and the solution list
///
/// Without `--solutions` the guess list doubles as the solution list.
fn load_wordlists(
    words: &Path,
    solutions: Option<&Path>,
    alphabet: Alphabet,
) -> Result<(Dictionary, Dictionary)> {
    let guesses = load_from_file(words, alphabet)
        .with_context(|| format!("failed to load word list {}", words.display()))?;

    let Some(path) = solutions else {
        return Ok((guesses.clone(), guesses));
    };

    let solutions = load_from_file(path, alphabet)
        .with_context(|| format!("failed to load solution list {}", path.display()))?;
    if solutions.word_len() != guesses.word_len() {
        bail!(
            "solution list has {}-letter words but the guess list has {}-letter words",
            solutions.word_len(),
            guesses.word_len()
        );
    }
    Ok((guesses, solutions))
}
