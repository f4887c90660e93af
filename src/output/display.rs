//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, percentage, word_list};
use crate::commands::{AnalysisResult, BoundResult, NextResult, OpeningStats, RankResult, SolveResult};
use crate::solver::Metric;
use colored::Colorize;

fn header(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the best openings from a ranking
pub fn print_rank_result(result: &RankResult) {
    let metric = result.table.metric();
    header("OPENING RANKING", Some(metric.name()));

    println!(
        "\n📊 {} openings scored against {} solutions{}",
        result.table.len(),
        result.candidates,
        if result.from_cache {
            " (cached)".bright_black().to_string()
        } else {
            String::new()
        }
    );
    println!("   Lower is better.\n");

    for (rank, (word, score)) in result.best.iter().enumerate() {
        println!(
            "   {:>3}. {}  {}",
            rank + 1,
            word.text().to_uppercase().bright_yellow(),
            format_score(metric, *score)
        );
    }
}

/// Print the result of opening analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    header("OPENING ANALYSIS:", Some(result.word.text()));

    let metrics = &result.metrics;
    println!("\n📊 Against {} possible solutions:", result.total_candidates);
    println!(
        "   Variance:      {}",
        format!("{:.4}", metrics.variance).bright_yellow()
    );
    println!(
        "   Absent marks:  {}",
        metrics.absent_marks.to_string().bright_yellow()
    );
    println!("   Buckets used:  {}", metrics.buckets_used);
    println!(
        "   Largest:       {} ({:.1}% of the rest)",
        metrics.largest_bucket,
        percentage(metrics.largest_bucket, metrics.partitioned)
    );
    println!("   Average:       {:.2} words per bucket", result.average_bucket());
}

/// Print a suggested next guess
pub fn print_next_result(result: &NextResult, show_candidates: usize) {
    header("NEXT GUESS", None);

    for (guess, feedback) in &result.history {
        println!("   {}", colored_guess(guess, *feedback));
    }

    println!(
        "\n   Candidates remaining: {}",
        result.candidates.len().to_string().bright_yellow()
    );
    if show_candidates > 0 {
        let texts: Vec<String> = result
            .candidates
            .iter()
            .map(|word| word.text().to_string())
            .collect();
        println!("   {}", word_list(&texts, show_candidates).bright_black());
    }
    println!(
        "\n➡️  {}  ({} {})",
        result.guess.text().to_uppercase().green().bold(),
        result.metric.name(),
        format_score(result.metric, result.score)
    );
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match step.score {
                Some(score) => println!("  Score:      {score:.4}"),
                None => println!("  Score:      (forced opening)"),
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print an exhaustive worst-case bound
pub fn print_bound_result(result: &BoundResult) {
    header("WORST-CASE BOUND", None);

    for (guess, feedback) in &result.history {
        println!("   {}", colored_guess(guess, *feedback));
    }

    println!("\n   Candidates:   {}", result.candidates);
    println!(
        "   Worst case:   {}",
        format!("{} more guess(es)", result.report.depth)
            .bright_yellow()
            .bold()
    );
    if let Some(guess) = &result.report.best_guess {
        println!(
            "   Best guess:   {}",
            guess.text().to_uppercase().green().bold()
        );
    }
    println!("   Nodes:        {}", result.report.nodes);
    println!("   Time taken:   {:.2}s", result.elapsed.as_secs_f64());
}

/// Print evaluation statistics for each opening
pub fn print_evaluation(stats: &[OpeningStats], turn_budget: usize) {
    header("EVALUATION RESULTS", None);

    for opening in stats {
        println!(
            "\n🎯 {}",
            opening.opening.to_uppercase().bright_yellow().bold()
        );
        println!("   Games played:     {}", opening.games);
        println!(
            "   Average guesses:  {}",
            format!("{:.3}", opening.average).bright_yellow().bold()
        );
        println!(
            "   Worst case:       {} ({})",
            opening.max.to_string().yellow(),
            word_list(&opening.max_words, 8)
        );

        if opening.over_budget.is_empty() {
            println!("   Over {turn_budget} guesses:   {}", "none".green());
        } else {
            println!(
                "   Over {turn_budget} guesses:   {}",
                word_list(&opening.over_budget, 8).red()
            );
        }

        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (length, words) in &opening.lengths {
            let pct = percentage(words.len(), opening.games);
            let bar = create_progress_bar(pct, 100.0, 40);
            let bar = if *length > turn_budget {
                bar.red()
            } else {
                bar.green()
            };
            println!("   {length:>2}: {bar} {:4} ({pct:5.1}%)", words.len());
        }
    }
}

fn format_score(metric: Metric, score: f64) -> String {
    match metric {
        Metric::BucketVariance => format!("{score:.4}"),
        Metric::MaxInformation => format!("{score:.0}"),
    }
}
