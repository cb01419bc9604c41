//! Core domain types for Nerdle
//!
//! This module contains the candidate and feedback types together with the
//! pattern evaluator. Everything here is pure and deterministic.

mod candidate;
mod pattern;

pub use candidate::{Candidate, CandidateError, MAX_LEN};
pub use pattern::{Feedback, Pattern, PatternParseError};
