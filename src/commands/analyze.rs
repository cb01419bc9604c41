//! Single guess analysis command
//!
//! Breaks down how one first guess partitions the candidate set.

use crate::analysis::{brute_force_probability, compute_profile, pattern_buckets};
use crate::candidates::validate_equation;
use crate::core::{Candidate, Pattern};
use anyhow::{Context, Result, bail};

/// Result of analyzing one guess
pub struct GuessAnalysis {
    pub guess: String,
    pub total_candidates: usize,
    /// Whether the guess is itself one of the candidates
    pub in_candidate_set: bool,
    pub distinct_patterns: usize,
    pub probability: f64,
    /// The same probability computed bucket by bucket
    pub brute_force_probability: f64,
    /// Patterns that leave exactly one candidate
    pub singleton_patterns: usize,
    /// Largest buckets, biggest first
    pub largest_buckets: Vec<(Pattern, usize)>,
}

/// Analyze a first guess against the candidate set
///
/// The guess may be any valid equation of the candidates' length, it does not
/// have to be a candidate itself.
///
/// # Errors
///
/// Returns an error if the candidate set is empty or the guess is not a valid
/// equation of the right length.
pub fn analyze_guess(guess: &str, candidates: &[Candidate], show: usize) -> Result<GuessAnalysis> {
    let Some(first) = candidates.first() else {
        bail!("Candidate set is empty");
    };

    validate_equation(guess, first.len()).with_context(|| format!("Invalid guess '{guess}'"))?;
    let guess_candidate = Candidate::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    let total = candidates.len();
    let profile = compute_profile(&guess_candidate, candidates);
    let buckets = pattern_buckets(&guess_candidate, candidates);

    let mut largest: Vec<(Pattern, usize)> = buckets
        .iter()
        .filter(|(pattern, _)| !pattern.is_win())
        .map(|(&pattern, &count)| (pattern, count))
        .collect();
    largest.sort_by(|(pa, ca), (pb, cb)| cb.cmp(ca).then_with(|| pa.cmp(pb)));

    let singleton_patterns = largest.iter().filter(|(_, count)| *count == 1).count();
    largest.truncate(show);

    Ok(GuessAnalysis {
        guess: guess.to_string(),
        total_candidates: total,
        in_candidate_set: candidates.contains(&guess_candidate),
        distinct_patterns: profile.distinct_patterns(),
        probability: profile.probability(total),
        brute_force_probability: brute_force_probability(&guess_candidate, candidates),
        singleton_patterns,
        largest_buckets: largest,
    })
}
