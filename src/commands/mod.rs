//! Command implementations

pub mod analyze;
pub mod rank;
pub mod score;

pub use analyze::{GuessAnalysis, analyze_guess};
pub use rank::{RankConfig, RankReport, run_rank, sample_candidates};
pub use score::score_guess;
