//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: clamped to [0, width] below
        ((value / max).max(0.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar, scaled against the most a single guess could give
///
/// A guess can never split the candidates into more than 243 patterns, nor
/// more buckets than there are candidates.
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.min(Pattern::COUNT) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Guess letters colored by their feedback, Wordle style
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.feedback())
        .map(|(c, fb)| tile(c, fb).to_string())
        .collect()
}

fn tile(c: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", c.to_ascii_uppercase());
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_degenerate_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
        assert_eq!(create_progress_bar(-1.0, 2.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_scales_by_candidates() {
        // Two candidates: one bit is the most possible
        assert_eq!(entropy_bar(1.0, 2, 4), "████");
        assert_eq!(entropy_bar(1.0, 4, 4), "██░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        let word = Word::new("crane").unwrap();
        let shown = colored_guess(&word, Pattern::PERFECT);
        for letter in [" C ", " R ", " A ", " N ", " E "] {
            assert!(shown.contains(letter));
        }
    }
}
