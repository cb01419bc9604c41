//! Two-guess solve probability analysis
//!
//! Scores every candidate as a first guess against every candidate as the
//! secret. A guess that splits the solutions into many distinct feedback
//! patterns leaves, on average, fewer candidates for the second guess.

mod profile;
mod summary;

pub use profile::{GuessProfile, brute_force_probability, compute_profile, pattern_buckets};
pub use summary::{
    RankedGuess, ResultSummary, compute_all_profiles, compute_all_profiles_with_progress,
};

use thiserror::Error;

/// Invalid input to [`compute_all_profiles`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Candidate set is empty")]
    Empty,
    #[error("Candidate set has a single candidate, at least two are required")]
    SingleCandidate,
    #[error("Candidate {index} has length {found}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}
