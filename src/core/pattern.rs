//! Nerdle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Black (character not in the solution, or already accounted for)
//! - 1 = Purple (character in the solution, wrong position)
//! - 2 = Green (character in correct position)
//!
//! The pattern is stored as a single `u32` where each position contributes
//! digit × 3^position, together with its length so that patterns of different
//! lengths never compare equal.

use super::Candidate;
use super::candidate::MAX_LEN;
use std::fmt;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    #[inline]
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Single-letter form used in tables and CSV output
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'P',
            Self::Absent => 'B',
        }
    }

    /// Emoji square as shown by the game
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟪',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a guess against one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    value: u32,
    len: u8,
}

/// Error returned when parsing a pattern string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternParseError {
    #[error("Pattern must have between 1 and {max} symbols, got {0}", max = MAX_LEN)]
    InvalidLength(usize),
    #[error("Invalid pattern symbol '{0}'")]
    InvalidSymbol(char),
}

impl Pattern {
    /// The all-green pattern of the given length
    ///
    /// # Panics
    /// Panics in debug mode if `len` is 0 or exceeds [`MAX_LEN`]
    #[must_use]
    pub fn winning(len: usize) -> Self {
        Self::from_feedback(&[Feedback::Correct; MAX_LEN][..len])
    }

    /// Build a pattern from per-position feedback
    ///
    /// # Panics
    /// Panics in debug mode if the slice is empty or longer than [`MAX_LEN`]
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        debug_assert!(
            (1..=MAX_LEN).contains(&feedback.len()),
            "Pattern length must be in 1..={MAX_LEN}"
        );

        let mut value = 0u32;
        let mut multiplier = 1u32;
        for &symbol in feedback {
            value += symbol.digit() * multiplier;
            multiplier *= 3;
        }

        Self {
            value,
            len: feedback.len() as u8,
        }
    }

    /// Get the raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false for patterns produced by this crate
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this is the winning pattern (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self.count_correct() == self.len()
    }

    /// Calculate the pattern when `guess` is played and `solution` is the secret
    ///
    /// Duplicate characters are credited the way the game does it.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (greens) and remove them from the
    ///    available pool
    /// 2. Second pass, left to right: mark purples while the pool still holds
    ///    the character, blacks otherwise
    /// 3. Encode as base-3 number
    ///
    /// Both candidates must have the same length.
    ///
    /// # Examples
    /// ```
    /// use nerdle_two::core::{Candidate, Pattern};
    ///
    /// let guess = Candidate::new("99-19=80").unwrap();
    /// let solution = Candidate::new("12+37=49").unwrap();
    ///
    /// // Only the leftmost 9 is credited, the solution has a single 9
    /// let pattern = Pattern::calculate(&guess, &solution);
    /// assert_eq!(pattern.to_string(), "PBBPBGBB");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Candidate, solution: &Candidate) -> Self {
        debug_assert_eq!(
            guess.len(),
            solution.len(),
            "guess and solution must have the same length"
        );

        let guess_chars = guess.chars();
        let solution_chars = solution.chars();
        let len = guess_chars.len();

        let mut result = [Feedback::Absent; MAX_LEN];
        let mut available = solution.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess_chars[i] == solution_chars[i] {
                result[i] = Feedback::Correct;
                available[usize::from(guess_chars[i])] -= 1;
            }
        }

        // Second pass: Mark purples, leftmost occurrences first
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if result[i] == Feedback::Absent {
                let count = &mut available[usize::from(guess_chars[i])];
                if *count > 0 {
                    result[i] = Feedback::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_feedback(&result[..len])
    }

    /// Per-position feedback, leftmost first
    #[must_use]
    pub fn feedback(self) -> Vec<Feedback> {
        let mut val = self.value;
        (0..self.len())
            .map(|_| {
                let symbol = Feedback::from_digit(val % 3);
                val /= 3;
                symbol
            })
            .collect()
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.feedback()
            .into_iter()
            .filter(|&f| f == Feedback::Correct)
            .count()
    }

    /// Count the number of purple squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.feedback()
            .into_iter()
            .filter(|&f| f == Feedback::Present)
            .count()
    }

    /// Convert pattern to emoji string such as "🟩🟪⬛"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().into_iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.feedback() {
            write!(f, "{}", symbol.letter())?;
        }
        Ok(())
    }
}

/// Parse a pattern from a string like "GPB-G" or "🟩🟪⬛⬛🟩"
///
/// Accepts:
/// - 'G'/'g'/🟩 for green
/// - 'P'/'p'/🟪 for purple
/// - 'B'/'b'/'-'/'_'/⬛ for black
impl std::str::FromStr for Pattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let feedback = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(Feedback::Correct),
                'P' | 'p' | '🟪' => Ok(Feedback::Present),
                'B' | 'b' | '-' | '_' | '⬛' => Ok(Feedback::Absent),
                other => Err(PatternParseError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !(1..=MAX_LEN).contains(&feedback.len()) {
            return Err(PatternParseError::InvalidLength(feedback.len()));
        }

        Ok(Self::from_feedback(&feedback))
    }
}
