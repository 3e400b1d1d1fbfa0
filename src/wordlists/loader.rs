//! Word list and frequency file loading
//!
//! Word lists hold one word per line. Frequency files hold one `word value` pair
//! per line, separated by whitespace or a comma. Blank lines and `#` comments are
//! skipped in both. Malformed lines are errors, never silently dropped.

use crate::core::{Vocabulary, Word, WordError};
use crate::weights::Frequencies;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for input files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: {source}", .path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("{}:{line}: expected `word value`, got {content:?}", .path.display())]
    InvalidFrequency {
        path: PathBuf,
        line: usize,
        content: String,
    },
    #[error("{} contains no words", .path.display())]
    Empty { path: PathBuf },
}

/// Load a vocabulary from a word list file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, a line is not a valid word,
/// or the file has no words.
///
/// # Examples
/// ```no_run
/// use wordle_maxent::wordlists::loader::load_vocabulary;
///
/// let words = load_vocabulary("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    parse_vocabulary(&content, path)
}

fn parse_vocabulary(content: &str, path: &Path) -> Result<Vocabulary, LoadError> {
    let words = meaningful_lines(content)
        .map(|(line, text)| {
            Word::new(text).map_err(|source| LoadError::InvalidWord {
                path: path.to_path_buf(),
                line,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Vocabulary::new(words).map_err(|_| LoadError::Empty {
        path: path.to_path_buf(),
    })
}

/// Load a frequency table
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or a line is not a
/// `word value` pair with a finite value.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<Frequencies, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    parse_frequencies(&content, path)
}

fn parse_frequencies(content: &str, path: &Path) -> Result<Frequencies, LoadError> {
    let mut frequencies = Frequencies::default();

    for (line, text) in meaningful_lines(content) {
        let invalid = || LoadError::InvalidFrequency {
            path: path.to_path_buf(),
            line,
            content: text.to_string(),
        };

        let mut fields = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty());
        let (Some(word), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(invalid());
        };

        let word = Word::new(word).map_err(|source| LoadError::InvalidWord {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        let value: f64 = value.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        frequencies.insert(word, value);
    }

    Ok(frequencies)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank, non-comment lines with 1-based line numbers
fn meaningful_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
