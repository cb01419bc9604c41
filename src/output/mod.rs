//! Terminal output formatting and result export
//!
//! Display utilities for CLI results, pretty-printing and CSV files.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{print_guess_analysis, print_rank_report, print_score};
pub use export::{save_csv, write_csv};
