//! Interactive CLI mode
//!
//! The solver suggests a guess, the user plays it in a real game and types
//! back the feedback.

use crate::core::Pattern;
use crate::solver::entropy::guess_metrics;
use crate::solver::{GameState, Phase, Solver, SolverError, Suggestion};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What the user typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    /// Play this word instead of the suggestion
    Use(String),
    Feedback(Pattern),
    Invalid,
}

impl Command {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "undo" | "u" => Self::Undo,
            "win" | "correct" | "yes" | "solved" => Self::Feedback(Pattern::PERFECT),
            lower => match lower.strip_prefix("use ") {
                Some(word) => Self::Use(word.trim().to_string()),
                None => Pattern::parse(input).map_or(Self::Invalid, Self::Feedback),
            },
        }
    }
}

/// Run the interactive mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(solver: &Solver<'_>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(solver, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive one interactive session until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle Solver - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "After each guess, enter the feedback pattern:\n")?;
    writeln!(out, "  - Use G/g/2/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/1/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/0/⬛ for gray (not in word)")?;
    writeln!(out, "  - Or type 'win' if you got it right!\n")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess, 'use WORD' to play your own guess\n"
    )?;

    let mut state = solver.new_game();

    loop {
        let suggestion = match state.phase() {
            Phase::AwaitingFeedback(s) => s,
            Phase::AwaitingGuess => match solver.next_guess(&mut state) {
                Ok(s) => s,
                Err(err) => {
                    writeln!(out, "\n❌ {err}. Starting over.\n")?;
                    state = solver.new_game();
                    continue;
                }
            },
            Phase::Solved | Phase::Exhausted => {
                print_finished(&state, out)?;
                match prompt(input, out, "Play again? (yes/no)")? {
                    Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                        state = solver.new_game();
                        writeln!(out, "\n🔄 New game started!\n")?;
                        continue;
                    }
                    _ => {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                }
            }
        };

        print_turn(solver, &state, suggestion, out)?;

        loop {
            let Some(line) = prompt(input, out, "Enter feedback (G/Y/-, 'win', or command)")? else {
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Quit => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                Command::New => {
                    state = solver.new_game();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    break;
                }
                Command::Undo => {
                    if !state.log().is_empty() && solver.undo(&mut state) {
                        writeln!(out, "✓ Undone! Back to turn {}\n", state.turn())?;
                        break;
                    }
                    writeln!(out, "Nothing to undo!\n")?;
                }
                Command::Use(text) => {
                    match solver.dictionary().guesses().find(&text) {
                        Some(guess) => {
                            solver.commit(&mut state, Suggestion::external(guess))?;
                            writeln!(out, "Playing {} instead\n", text.to_uppercase())?;
                            break;
                        }
                        None => writeln!(out, "❌ {text:?} is not in the guess pool\n")?,
                    }
                }
                Command::Feedback(pattern) => match solver.feedback(&mut state, pattern) {
                    Ok(_) => break,
                    Err(SolverError::NoCandidates) => {
                        writeln!(
                            out,
                            "\n❌ No candidates match that feedback! Check it, or type 'undo'.\n"
                        )?;
                    }
                    Err(err) => return Err(err.into()),
                },
                Command::Invalid => {
                    writeln!(out, "❌ Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬛🟩🟨'\n")?;
                }
            }
        }
    }
}

fn print_turn<W: Write>(
    solver: &Solver<'_>,
    state: &GameState,
    suggestion: Suggestion,
    out: &mut W,
) -> Result<()> {
    let remaining = state.remaining();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Turn {}: {} candidates remaining",
        state.turn(),
        remaining.len()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;

    writeln!(
        out,
        "\n📊 Suggested guess: {}",
        solver.word(suggestion.guess).text().to_uppercase().bright_green().bold()
    )?;

    if remaining.len() > 1 {
        let metrics = guess_metrics(
            solver.dictionary(),
            suggestion.guess,
            remaining,
            solver.weights(),
        );
        writeln!(out, "   Entropy:          {:.3} bits", metrics.entropy)?;
        writeln!(
            out,
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        )?;
        writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
    }
    writeln!(out)?;

    if remaining.len() <= 10 {
        writeln!(out, "Remaining candidates:")?;
        for candidate in solver.candidates(state) {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn print_finished<W: Write>(state: &GameState, out: &mut W) -> Result<()> {
    let turns = state.log().len();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    if state.phase() == Phase::Solved {
        writeln!(
            out,
            "{}",
            "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        )?;
        writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
        writeln!(
            out,
            "\n  Solution found in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(out, "{}", "    Out of turns    ".yellow().bold())?;
        writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in state.log().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess.text().to_uppercase().bright_white().bold(),
            turn.pattern.to_emoji()
        )?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;

    Ok(())
}

/// Prompt for one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
