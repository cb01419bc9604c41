//! Nerdle Two-Guess Solver
//!
//! Computes, for every candidate first guess, the exact probability of solving
//! Nerdle in exactly two guesses when the second guess is picked uniformly from
//! the candidates consistent with the first feedback.
//!
//! That probability is the number of distinct non-winning feedback patterns the
//! guess produces, divided by the number of candidates N: a pattern shared by K
//! solutions is hit with probability K/N and then solved with probability 1/K.
//!
//! # Quick Start
//!
//! ```rust
//! use nerdle_two::analysis::compute_all_profiles;
//! use nerdle_two::candidates::parse_candidates;
//! use nerdle_two::core::{Candidate, Pattern};
//!
//! // Score one guess
//! let guess = Candidate::new("99-19=80").unwrap();
//! let solution = Candidate::new("12+37=49").unwrap();
//! println!("{}", Pattern::calculate(&guess, &solution).to_emoji());
//!
//! // Rank a candidate set
//! let candidates = parse_candidates("10+14=24\n16+69=85\n7*97=679\n", 8).unwrap();
//! let summary = compute_all_profiles(&candidates).unwrap();
//! println!("Best first guess: {}", summary.best().guess);
//! ```

// Core domain types
pub mod core;

// Pattern aggregation and ranking
pub mod analysis;

// Candidate list loading
pub mod candidates;

// Command implementations
pub mod commands;

// Terminal output and export
pub mod output;

// Logging setup
pub mod log;
