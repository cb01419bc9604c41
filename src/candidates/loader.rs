//! Candidate list loading
//!
//! Reads one equation per line. Unlike a word list, a candidate set must be
//! complete and exact, so the first invalid or repeated line fails the load.

use super::equation::{EquationError, validate_equation};
use crate::core::{Candidate, CandidateError};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a candidate list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: '{text}' is not a valid equation: {source}")]
    Invalid {
        line: usize,
        text: String,
        #[source]
        source: EquationError,
    },
    #[error("line {line}: '{text}' cannot be a candidate: {source}")]
    Unsupported {
        line: usize,
        text: String,
        #[source]
        source: CandidateError,
    },
    #[error("line {line}: '{text}' repeats line {first}")]
    Duplicate {
        line: usize,
        first: usize,
        text: String,
    },
}

/// Parse candidates from the contents of a list file
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Line numbers
/// in errors are 1-based.
///
/// # Errors
///
/// Returns `LoadError` for the first line that is not a valid equation of
/// `length` characters, or that repeats an earlier line.
///
/// # Examples
/// ```
/// use nerdle_two::candidates::loader::parse_candidates;
///
/// let candidates = parse_candidates("12+35=47\n\n9*76=684\n", 8).unwrap();
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[1].text(), "9*76=684");
/// ```
pub fn parse_candidates(content: &str, length: usize) -> Result<Vec<Candidate>, LoadError> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut candidates = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        validate_equation(text, length).map_err(|source| LoadError::Invalid {
            line,
            text: text.to_string(),
            source,
        })?;

        if let Some(&first) = seen.get(text) {
            return Err(LoadError::Duplicate {
                line,
                first,
                text: text.to_string(),
            });
        }
        seen.insert(text, line);

        let candidate = Candidate::new(text).map_err(|source| LoadError::Unsupported {
            line,
            text: text.to_string(),
            source,
        })?;
        candidates.push(candidate);
    }

    Ok(candidates)
}

/// Load candidates from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise see
/// [`parse_candidates`].
///
/// # Examples
/// ```no_run
/// use nerdle_two::candidates::loader::load_from_file;
///
/// let candidates = load_from_file("NerdleClassicRestricted.txt", 8).unwrap();
/// println!("Loaded {} candidates", candidates.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Candidate>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let candidates = parse_candidates(&content, length)?;
    log::debug!(
        "Read {} candidates of length {length} from {}",
        candidates.len(),
        path.display()
    );
    Ok(candidates)
}
