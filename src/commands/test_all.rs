//! Test all answers - comprehensive solver evaluation
//!
//! Runs the solver against every answer word, summarizes the results and
//! optionally writes a per-answer JSON report.

use crate::core::Word;
use crate::solver::{GameReport, Solver, SolverError};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    /// Games that hit the turn cap
    pub exhausted: usize,
    /// Answers the solver rejected outright
    pub errors: usize,
    pub max_turns: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub first_guess_used: BTreeMap<String, usize>,
}

/// One batch run: every game plus its summary
pub struct TestAllRun {
    pub results: Vec<(Word, Result<GameReport, SolverError>)>,
    pub stats: TestAllStatistics,
}

/// Per-answer turn counts as written to disk
///
/// `results` maps each answer to its turn count, or `null` if the game was
/// exhausted. Answers that could not be played at all go to `errors`.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub max_turns: usize,
    pub opening: Option<String>,
    pub average_guesses: f64,
    pub results: BTreeMap<String, Option<usize>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

/// Run solver on all answer words (or the first `limit` of them)
///
/// Games run in parallel; results keep the order of `answer_words`.
pub fn run_test_all(
    solver: &Solver<'_>,
    answer_words: &[Word],
    limit: Option<usize>,
) -> TestAllRun {
    let test_words = &answer_words[..limit.unwrap_or(answer_words.len()).min(answer_words.len())];

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let games: Vec<_> = test_words
        .par_iter()
        .map(|answer| {
            let report = solver.play(answer);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");

    let results: Vec<_> = test_words.iter().cloned().zip(games).collect();
    let stats = summarize(&results, solver.config().max_turns, total_start.elapsed());

    TestAllRun { results, stats }
}

fn summarize(
    results: &[(Word, Result<GameReport, SolverError>)],
    max_turns: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut first_guess_used = BTreeMap::new();
    let mut solved_turns = Vec::new();
    let mut worst_words = Vec::new();
    let mut exhausted = 0;
    let mut errors = 0;

    for (answer, result) in results {
        let Ok(report) = result else {
            errors += 1;
            continue;
        };

        if let Some(first) = report.log.first() {
            *first_guess_used
                .entry(first.guess.text().to_string())
                .or_insert(0) += 1;
        }

        match report.outcome.turns() {
            Some(turns) => {
                *guess_distribution.entry(turns).or_insert(0) += 1;
                solved_turns.push(turns);
                if turns >= 5 {
                    worst_words.push((answer.text().to_string(), turns));
                }
            }
            None => exhausted += 1,
        }
    }

    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    let solved = solved_turns.len();
    let average_guesses = if solved > 0 {
        solved_turns.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    TestAllStatistics {
        total_words: results.len(),
        solved,
        exhausted,
        errors,
        max_turns,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved_turns.iter().copied().max().unwrap_or(0),
        min_guesses: solved_turns.iter().copied().min().unwrap_or(0),
        worst_words,
        first_guess_used,
    }
}

impl TestAllRun {
    /// Build the serializable per-answer report
    #[must_use]
    pub fn report(&self, opening: Option<&Word>) -> BatchReport {
        let mut results = BTreeMap::new();
        let mut errors = BTreeMap::new();

        for (answer, result) in &self.results {
            match result {
                Ok(report) => {
                    results.insert(answer.text().to_string(), report.outcome.turns());
                }
                Err(err) => {
                    errors.insert(answer.text().to_string(), err.to_string());
                }
            }
        }

        BatchReport {
            max_turns: self.stats.max_turns,
            opening: opening.map(|w| w.text().to_string()),
            average_guesses: self.stats.average_guesses,
            results,
            errors,
        }
    }
}

/// Write a batch report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}

/// Print test-all statistics with beautiful formatting
#[allow(clippy::too_many_lines)] // Comprehensive output formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.exhausted > 0 {
        println!(
            "  Hit the turn cap:    {} {}",
            stats.exhausted,
            format!("({:.1}%)", stats.exhausted as f64 / total * 100.0).red()
        );
    }
    if stats.errors > 0 {
        println!(
            "  Not playable:        {} {}",
            stats.errors,
            "(not in the answer vocabulary)".red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    if stats.solved > 0 {
        for guesses in 1..=stats.max_turns {
            let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    println!("\n🧮 Information Theory Metrics");
    let total_bits = total.log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Total information:   {total_bits:.2} bits");
    println!("  Bits per guess:      {bits_per_guess:.2} bits");

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by_key(|(_, count)| std::cmp::Reverse(**count));

    for (word, count) in first_guesses.iter().take(5) {
        let percentage = **count as f64 / total * 100.0;
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            percentage
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::dictionary::PatternDictionary;
    use crate::solver::SolverConfig;
    use crate::weights::WeightTable;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "stare", "roast", "toast", "beast",
    ];

    fn setup() -> (Vocabulary, PatternDictionary, WeightTable) {
        let vocab = Vocabulary::from_strs(WORDS).unwrap();
        let weights = WeightTable::uniform(&vocab);
        let dict = PatternDictionary::build(&vocab);
        (vocab, dict, weights)
    }

    #[test]
    fn tests_every_answer_in_order() {
        let (vocab, dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let run = run_test_all(&solver, vocab.words(), None);

        let order: Vec<&str> = run.results.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, WORDS);
        assert_eq!(run.stats.total_words, WORDS.len());
        assert_eq!(run.stats.solved, WORDS.len());
        assert_eq!(run.stats.exhausted, 0);

        let distribution_sum: usize = run.stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, run.stats.solved);

        // No opening configured: every game starts with the same max-entropy guess
        assert_eq!(run.stats.first_guess_used.len(), 1);
    }

    #[test]
    fn limit_truncates() {
        let (vocab, dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();

        assert_eq!(run_test_all(&solver, vocab.words(), Some(3)).stats.total_words, 3);
        assert_eq!(
            run_test_all(&solver, vocab.words(), Some(100)).stats.total_words,
            WORDS.len()
        );
    }

    #[test]
    fn report_marks_exhausted_and_errors() {
        let (_, dict, weights) = setup();
        let config = SolverConfig {
            max_turns: 1,
            opening: Some(Word::new("crane").unwrap()),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&dict, &weights, config).unwrap();
        let answers = [
            Word::new("crane").unwrap(),
            Word::new("beast").unwrap(),
            Word::new("zzzzz").unwrap(),
        ];

        let run = run_test_all(&solver, &answers, None);
        assert_eq!(run.stats.solved, 1);
        assert_eq!(run.stats.exhausted, 1);
        assert_eq!(run.stats.errors, 1);

        let report = run.report(Some(&Word::new("crane").unwrap()));
        assert_eq!(report.results.get("crane"), Some(&Some(1)));
        assert_eq!(report.results.get("beast"), Some(&None));
        assert!(report.errors.contains_key("zzzzz"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"]["crane"], 1);
        assert!(json["results"]["beast"].is_null());
        assert_eq!(json["opening"], "crane");
        assert_eq!(json["max_turns"], 1);
    }

    #[test]
    fn write_report_produces_json() {
        let (vocab, dict, weights) = setup();
        let solver = Solver::new(&dict, &weights, SolverConfig::default()).unwrap();
        let run = run_test_all(&solver, vocab.words(), None);

        let path = std::env::temp_dir().join(format!(
            "wordle_maxent_report_{}.json",
            std::process::id()
        ));
        write_report(&run.report(None), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(json["results"].as_object().unwrap().len(), WORDS.len());
        assert!(json.get("errors").is_none());
        assert!(json["opening"].is_null());
    }
}
