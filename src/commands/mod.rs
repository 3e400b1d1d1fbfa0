//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod generate;
pub mod play;
pub mod resources;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use generate::{GenerateResult, run_generate};
pub use play::run_play;
pub use resources::{ResourceConfig, Resources, load_resources, resolve_opening};
pub use solve::{GuessStep, SolveResult, solve_word};
pub use test_all::{
    BatchReport, TestAllRun, TestAllStatistics, print_test_all_statistics, run_test_all,
    write_report,
};
