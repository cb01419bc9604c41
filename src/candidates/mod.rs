//! Candidate sets for Nerdle
//!
//! Loading and validation of the closed list of solution equations.

pub mod equation;
pub mod loader;

pub use equation::{EquationError, validate_equation};
pub use loader::{LoadError, load_from_file, parse_candidates};

/// Character count of a classic Nerdle equation
pub const CLASSIC_LENGTH: usize = 8;

/// Default candidate list file name
pub const DEFAULT_CANDIDATES_FILE: &str = "NerdleClassicRestricted.txt";
