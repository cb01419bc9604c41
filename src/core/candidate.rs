//! Candidate representation
//!
//! A Candidate is one fixed-length string from the closed solution set. It acts
//! both as a possible guess and as a possible secret.

use std::fmt;
use thiserror::Error;

/// Longest candidate a [`Pattern`](super::Pattern) can encode (3^20 fits in a `u32`)
pub const MAX_LEN: usize = 20;

/// An immutable candidate string
///
/// Only printable ASCII is accepted so that each character is one byte and the
/// pattern calculation can index a fixed count table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    text: String,
}

/// Error type for strings that cannot be candidates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("Candidate must not be empty")]
    Empty,
    #[error("Candidate is {0} characters long, at most {max} are supported", max = MAX_LEN)]
    TooLong(usize),
    #[error("Candidate must contain only printable ASCII characters")]
    NonAscii,
}

impl Candidate {
    /// Create a new Candidate from a string
    ///
    /// # Errors
    /// Returns `CandidateError` if the string is empty, longer than [`MAX_LEN`],
    /// or contains anything other than printable ASCII.
    ///
    /// # Examples
    /// ```
    /// use nerdle_two::core::Candidate;
    ///
    /// let candidate = Candidate::new("12+35=47").unwrap();
    /// assert_eq!(candidate.len(), 8);
    ///
    /// assert!(Candidate::new("").is_err());
    /// assert!(Candidate::new("1 + 1 = 2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, CandidateError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(CandidateError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(CandidateError::NonAscii);
        }

        if text.len() > MAX_LEN {
            return Err(CandidateError::TooLong(text.len()));
        }

        Ok(Self { text })
    }

    /// Get the candidate as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the candidate as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, construction rejects empty strings
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each character, indexed by its ASCII code
    ///
    /// Used for pattern calculation with duplicate characters.
    #[inline]
    pub(crate) fn char_counts(&self) -> [u8; 128] {
        let mut counts = [0u8; 128];
        for &ch in self.chars() {
            counts[usize::from(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
