//! Wordle Max-Entropy Solver - CLI
//!
//! Entropy-maximizing Wordle solver with interactive and batch modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_maxent::{
    commands::{
        ResourceConfig, Resources, analyze_word, load_resources, print_test_all_statistics,
        resolve_opening, run_benchmark, run_generate, run_play, run_test_all, sample_answers,
        solve_word, write_report,
    },
    output::{
        print_analysis_result, print_benchmark_result, print_generate_result, print_solve_result,
    },
    solver::{Solver, SolverConfig, TieBreak},
    weights::WeightConfig,
    wordlists::load_vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_maxent",
    about = "Wordle solver that always plays the maximum-entropy guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer vocabulary, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Extra guess-only words (answers are always guessable)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<PathBuf>,

    /// Word frequency file (`word value` per line); uniform weights if omitted
    #[arg(short = 'f', long, global = true)]
    frequencies: Option<PathBuf>,

    /// Pattern dictionary cache
    #[arg(short = 'c', long, global = true, default_value = "patterns.bin")]
    cache: PathBuf,

    /// Rebuild the pattern dictionary instead of loading the cache
    #[arg(long, global = true)]
    rebuild: bool,

    /// Sigmoid width of the commonness prior
    #[arg(long, global = true, default_value_t = 10.0)]
    width: f64,

    /// Commonness rank at which an answer's weight is one half
    #[arg(long, global = true, default_value_t = 3000)]
    cutoff: usize,

    /// Games not solved by this turn are lost
    #[arg(short = 't', long, global = true, default_value_t = 9)]
    max_turns: usize,

    /// Fixed opening guess, or 'auto' to compute the best one once
    #[arg(short = 'o', long, global = true)]
    opening: Option<String>,

    /// Tie-break among equal entropies: pool, candidate, lexicographic
    #[arg(long, global = true, default_value = "pool")]
    tie_break: TieBreak,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): get suggestions for a real game
    Play,

    /// Build the pattern dictionary and write it to the cache
    Generate,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of best openings to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Benchmark solver performance on a random sample of answers
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the sample
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Test solver on every answer
    TestAll {
        /// Answers to test (defaults to the answer vocabulary)
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write per-answer turn counts as JSON
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

impl Cli {
    fn resource_config(&self) -> ResourceConfig {
        ResourceConfig {
            words: self.words.clone(),
            guesses: self.guesses.clone(),
            frequencies: self.frequencies.clone(),
            cache: self.cache.clone(),
            rebuild: self.rebuild,
            weights: WeightConfig {
                width: self.width,
                cutoff: self.cutoff,
            },
        }
    }

    fn solver_config(&self, resources: &Resources) -> Result<SolverConfig> {
        let mut config = SolverConfig {
            max_turns: self.max_turns,
            opening: None,
            tie_break: self.tie_break,
        };
        config.opening = resolve_opening(self.opening.as_deref(), resources, &config)?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resource_config = cli.resource_config();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    if matches!(command, Commands::Generate) {
        let result = run_generate(&resource_config)?;
        print_generate_result(&result);
        return Ok(());
    }

    let resources = load_resources(&resource_config)?;
    let config = cli.solver_config(&resources)?;
    let opening = config.opening.clone();
    let solver = Solver::new(&resources.dictionary, &resources.weights, config)?;

    match command {
        Commands::Play | Commands::Generate => run_play(&solver),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&solver, word)?;
            print_solve_result(&result, *verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&solver, word, *top)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let targets = sample_answers(resources.dictionary.answers().words(), *count, *seed);
            println!(
                "Running benchmark on {} random words (seed {seed})...",
                targets.len()
            );
            let result = run_benchmark(&solver, &targets);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll {
            answers,
            limit,
            report,
        } => {
            let answer_words = match answers {
                Some(path) => load_vocabulary(path)?.words().to_vec(),
                None => resources.dictionary.answers().words().to_vec(),
            };

            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} possible answers", answer_words.len());
            println!("Turn cap: {}", cli.max_turns);
            if let Some(word) = &opening {
                println!("Opening guess: {}", word.text().to_uppercase());
            }
            println!();

            let run = run_test_all(&solver, &answer_words, *limit);
            print_test_all_statistics(&run.stats);

            if let Some(path) = report {
                write_report(&run.report(opening.as_ref()), path)
                    .with_context(|| format!("report not written to {}", path.display()))?;
                println!("\nReport written to {}", path.display());
            }
            Ok(())
        }
    }
}
