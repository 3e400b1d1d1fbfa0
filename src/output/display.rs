//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, GenerateResult, SolveResult};
use crate::solver::{GuessSource, Outcome};
use colored::Colorize;

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
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            let why = match step.source {
                GuessSource::SoleCandidate => "only candidate left",
                GuessSource::Opening => "fixed opening",
                GuessSource::MaxEntropy => "maximum entropy",
                GuessSource::External => "external",
            };
            println!("  Chosen by:  {why}");
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    ratio.log2(),
                    ratio
                );
            }
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved { turns } => println!(
            "{}",
            format!(
                "✅ Solved in {turns} {}!",
                if turns == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.metrics.max_partition
    );
    println!(
        "   Rank:        #{} of {} guesses",
        result.rank, result.total_guesses
    );

    if !result.top.is_empty() {
        println!("\n🏆 {}", "Best openings:".bright_cyan().bold());
        for (i, (word, entropy)) in result.top.iter().enumerate() {
            let line = format!(
                "   {:>2}. {} {entropy:.3} bits",
                i + 1,
                word.text().to_uppercase()
            );
            if *word == result.word {
                println!("{}", line.bright_yellow().bold());
            } else {
                println!("{line}");
            }
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
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

    if !result.failed.is_empty() {
        let failed: Vec<String> = result
            .failed
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("   Failed:           {}", failed.join(", ").red());
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words.max(1) as f64) * 100.0;
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

/// Print the result of building the pattern dictionary
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PATTERN DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Guesses:      {}", result.guesses);
    println!("   Answers:      {}", result.answers);
    println!("   Cache size:   {:.1} MiB", result.bytes as f64 / (1024.0 * 1024.0));
    println!("   Build time:   {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Written to:   {}",
        result.path.display().to_string().bright_yellow()
    );
}
