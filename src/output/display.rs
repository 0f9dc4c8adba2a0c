//! Display functions for command results

use super::formatters::{clue_to_emoji, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.mode
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            clue_to_emoji(&step.clue)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = &step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
                println!("  Worst case: {} candidates", metrics.max_partition);

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", metrics.max_partition);
    println!("   Clues:       {} distinct", metrics.buckets);
    println!(
        "   {} score: {}",
        result.mode,
        format!("{:.3}", result.score).bright_yellow().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let mut counts: Vec<_> = result.distribution.iter().collect();
        counts.sort_unstable();
        for (guess_count, &count) in counts {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} ({}):",
            "Failures".red().bold(),
            result.failures.len()
        );
        for word in result.failures.iter().take(20) {
            println!("   {}", word.text().to_uppercase());
        }
        if result.failures.len() > 20 {
            println!("   … and {} more", result.failures.len() - 20);
        }
    }
}
