//! Display functions for command results

use super::formatters::{format_probability, pattern_bar};
use crate::commands::{GuessAnalysis, RankReport};
use crate::core::Pattern;
use colored::Colorize;

/// Print the result of ranking every first guess
pub fn print_rank_report(report: &RankReport, top: usize, bottom: usize) {
    let summary = &report.summary;
    let n = summary.total();

    println!("\n{}", "═".repeat(62).cyan());
    println!(
        " {} ",
        "Nerdle: Probability of Solving in Exactly 2 Guesses"
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(62).cyan());

    if n == report.loaded {
        println!("\nTotal solutions (N): {n}");
    } else {
        println!("\nSampled solutions (N): {n} of {}", report.loaded);
    }
    println!(
        "Pairs evaluated:     {} in {:.1}s ({:.0} pairs/s)",
        report.pairs(),
        report.duration.as_secs_f64(),
        report.pairs_per_second()
    );

    println!(
        "\nP(solve in 1 guess) = 1/{n} = {}",
        format_probability(summary.solve_in_one_probability())
    );

    let best = summary.best();
    println!(
        "\n✨ {}  {}",
        "Best first guess:".green().bold(),
        best.guess.bright_green().bold()
    );
    println!("   Distinct patterns: {}", best.distinct_patterns);
    println!(
        "   P(solve in 2)    = {}/{n} = {}",
        best.distinct_patterns,
        format_probability(best.probability).bright_yellow()
    );

    let worst = summary.worst();
    println!(
        "\nAverage P(solve in 2) over all first guesses: {}",
        format_probability(summary.random_guess_probability())
    );
    println!(
        "Median  P(solve in 2): {}",
        format_probability(summary.median_probability())
    );
    println!(
        "Worst   P(solve in 2): {}  guess: {}",
        format_probability(worst.probability),
        worst.guess.yellow()
    );
    println!(
        "Distinct patterns: min {}, max {}, mean {:.2}, median {:.1}",
        summary.min(),
        summary.max(),
        summary.mean(),
        summary.median()
    );

    if top > 0 {
        println!("\n📈 {}", format!("Top {top} First Guesses").bright_cyan().bold());
        println!(
            "{:>4}  {:<12}  {:>8}  {:>12}",
            "Rank", "First Guess", "Patterns", "P(solve=2)"
        );
        println!(
            "{:>4}  {:<12}  {:>8}  {:>12}",
            "----", "----------", "--------", "----------"
        );
        for row in summary.top(top) {
            println!(
                "{:4}  {:<12}  {:8}  {:12.6}  {}",
                row.rank,
                row.guess,
                row.distinct_patterns,
                row.probability,
                pattern_bar(row.distinct_patterns, best.distinct_patterns, 20).green()
            );
        }
    }

    if bottom > 0 {
        println!("\n😰 {}", format!("Worst {bottom} First Guesses").yellow().bold());
        for (i, row) in summary.bottom(bottom).into_iter().enumerate() {
            println!(
                "  {}. {:<12}  {:4} patterns  P = {:.6}",
                i + 1,
                row.guess,
                row.distinct_patterns,
                row.probability
            );
        }
    }
}

/// Print the breakdown of a single guess
pub fn print_guess_analysis(result: &GuessAnalysis) {
    println!("\n{}", "═".repeat(62).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(62).cyan());

    println!("\n📊 Against {} possible solutions:", result.total_candidates);
    if !result.in_candidate_set {
        println!("   {}", "Guess is not itself a possible solution".yellow());
    }
    println!("   Distinct patterns:  {}", result.distinct_patterns);
    println!(
        "   P(solve in 2):      {}",
        format_probability(result.probability).bright_yellow()
    );
    println!(
        "   Bucket-by-bucket:   {}",
        format_probability(result.brute_force_probability)
    );
    println!(
        "   Unique patterns:    {} (identify the solution outright)",
        result.singleton_patterns
    );

    if !result.largest_buckets.is_empty() {
        println!("\n🧮 {}", "Largest buckets".bright_cyan().bold());
        for (pattern, count) in &result.largest_buckets {
            println!("   {}  {pattern}  {count:5}", pattern.to_emoji());
        }
    }
}

/// Print the feedback for a single guess/solution pair
pub fn print_score(guess: &str, solution: &str, pattern: Pattern) {
    println!(
        "{}  vs  {}\n{}  {}",
        guess.bright_yellow(),
        solution.bright_green(),
        pattern.to_emoji(),
        pattern
    );
}
