//! Binary cache for the pattern dictionary
//!
//! Format (all integers little-endian):
//! - magic `WPDX` (4 bytes), version (u32), guess count (u32), answer count (u32)
//! - guess words, 5 bytes each, in row order
//! - answer words, 5 bytes each, in column order
//! - pattern codes, guess count × answer count bytes, row-major
//!
//! Loading validates every section, so a successful load always satisfies the
//! partition invariant of the in-memory table.

use super::PatternDictionary;
use crate::core::{Vocabulary, WORD_LEN, Word};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const MAGIC: &[u8; 4] = b"WPDX";
const VERSION: u32 = 1;
const HEADER_LEN: usize = 16;

/// Error type for cache load/save
#[derive(Debug, Error)]
pub enum CacheError {
    /// No cache at the path; the caller decides whether to rebuild
    #[error(
        "pattern dictionary cache not found at {}; run `generate` to build it or pass --rebuild",
        .path.display()
    )]
    NotFound { path: PathBuf },
    #[error("pattern dictionary cache {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("I/O error on pattern dictionary cache {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `dict` to `path`, replacing any existing file
///
/// # Errors
/// Returns `CacheError::Io` if the file cannot be created or written.
pub fn save(dict: &PatternDictionary, path: impl AsRef<Path>) -> Result<(), CacheError> {
    let path = path.as_ref();
    let io_err = |source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_to(dict, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)
}

fn write_to(dict: &PatternDictionary, out: &mut impl Write) -> io::Result<()> {
    out.write_all(MAGIC)?;
    out.write_all(&VERSION.to_le_bytes())?;
    out.write_all(&count_u32(dict.guesses().len())?.to_le_bytes())?;
    out.write_all(&count_u32(dict.answers().len())?.to_le_bytes())?;

    for word in dict.guesses().words().iter().chain(dict.answers().words()) {
        out.write_all(word.chars())?;
    }

    out.write_all(dict.table())
}

fn count_u32(n: usize) -> io::Result<u32> {
    u32::try_from(n).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "vocabulary too large"))
}

/// Read a dictionary from `path`
///
/// # Errors
/// Returns `CacheError::NotFound` when there is no file at `path`,
/// `CacheError::Corrupt` when its contents fail validation, and
/// `CacheError::Io` for any other read failure.
pub fn load(path: impl AsRef<Path>) -> Result<PatternDictionary, CacheError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CacheError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CacheError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    decode(bytes).map_err(|reason| CacheError::Corrupt {
        path: path.to_path_buf(),
        reason,
    })
}

/// Parse a whole cache file, reusing its buffer as the pattern table
fn decode(mut bytes: Vec<u8>) -> Result<PatternDictionary, String> {
    let mut reader = Reader {
        bytes: &bytes,
        pos: 0,
    };

    if reader.take(4)? != MAGIC {
        return Err("bad magic".to_string());
    }
    let version = reader.u32()?;
    if version != VERSION {
        return Err(format!("unsupported version {version}"));
    }
    let guess_count = reader.u32()? as usize;
    let answer_count = reader.u32()? as usize;

    let guesses = reader.vocabulary(guess_count)?;
    let answers = reader.vocabulary(answer_count)?;

    let table_len = guess_count
        .checked_mul(answer_count)
        .ok_or_else(|| "table size overflows".to_string())?;
    let table_start = reader.pos;
    reader.take(table_len)?;

    if reader.pos != bytes.len() {
        return Err(format!("{} trailing bytes", bytes.len() - reader.pos));
    }

    bytes.drain(..table_start);
    PatternDictionary::from_parts(guesses, answers, bytes)
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], String> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| format!("truncated at byte {}", self.pos))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32, String> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn vocabulary(&mut self, count: usize) -> Result<Vocabulary, String> {
        let mut words = Vec::with_capacity(count.min(1 << 16));
        for i in 0..count {
            let mut buf = [0u8; WORD_LEN];
            buf.copy_from_slice(self.take(WORD_LEN)?);
            words.push(Word::from_bytes(buf).map_err(|e| format!("word {i}: {e}"))?);
        }
        let vocab = Vocabulary::new(words).map_err(|e| e.to_string())?;
        if vocab.len() != count {
            return Err("duplicate words in word section".to_string());
        }
        Ok(vocab)
    }
}

/// Size in bytes of the encoded form of `dict`
#[must_use]
pub fn encoded_len(dict: &PatternDictionary) -> usize {
    HEADER_LEN + (dict.guesses().len() + dict.answers().len()) * WORD_LEN + dict.table().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_maxent_{}_{name}", std::process::id()))
    }

    fn sample() -> PatternDictionary {
        let guesses = Vocabulary::from_strs(&["crane", "slate", "speed", "zzzzz"]).unwrap();
        let answers = Vocabulary::from_strs(&["slate", "erase", "crane"]).unwrap();
        PatternDictionary::build_with_guesses(guesses, answers)
    }

    #[test]
    fn round_trip_preserves_buckets() {
        let dict = sample();
        let path = temp_path("round_trip.bin");

        save(&dict, &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len() as usize, encoded_len(&dict));

        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, dict);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load(temp_path("does_not_exist.bin")).unwrap_err();
        assert!(matches!(err, CacheError::NotFound { .. }));
        assert!(err.to_string().contains("generate"));
    }

    #[test]
    fn decode_rejects_corruption() {
        let dict = sample();
        let mut bytes = Vec::new();
        write_to(&dict, &mut bytes).unwrap();
        assert!(decode(bytes.clone()).is_ok());

        let mut bad_magic = bytes.clone();
        bad_magic[0] = b'X';
        assert!(decode(bad_magic).is_err());

        let truncated = bytes[..bytes.len() - 1].to_vec();
        assert!(decode(truncated).unwrap_err().contains("truncated"));

        let mut trailing = bytes.clone();
        trailing.push(0);
        assert!(decode(trailing).unwrap_err().contains("trailing"));

        let mut bad_code = bytes.clone();
        let last = bad_code.len() - 1;
        bad_code[last] = 250;
        assert!(decode(bad_code).is_err());

        let mut bad_word = bytes;
        bad_word[HEADER_LEN] = b'#';
        assert!(decode(bad_word).unwrap_err().contains("word 0"));
    }

    #[test]
    fn decode_keeps_the_read_buffer() {
        let dict = sample();
        let mut bytes = Vec::new();
        write_to(&dict, &mut bytes).unwrap();
        let buffer = bytes.as_ptr();

        let decoded = decode(bytes).unwrap();
        assert_eq!(decoded.table().as_ptr(), buffer);
        assert_eq!(decoded, dict);
    }
}
