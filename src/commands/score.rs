//! Score a single guess against a single solution

use crate::core::{Candidate, Pattern};
use anyhow::{Context, Result, ensure};

/// Compute the feedback `guess` receives when `solution` is the secret
///
/// # Errors
///
/// Returns an error if either string cannot be a candidate or their lengths
/// differ.
pub fn score_guess(guess: &str, solution: &str) -> Result<Pattern> {
    let guess = Candidate::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let solution =
        Candidate::new(solution).with_context(|| format!("Invalid solution '{solution}'"))?;

    ensure!(
        guess.len() == solution.len(),
        "Guess has {} characters but solution has {}",
        guess.len(),
        solution.len()
    );

    Ok(Pattern::calculate(&guess, &solution))
}
