//! Per-guess pattern profiles
//!
//! For one guess, every solution is scored and the distinct feedback patterns
//! are collected. The number of distinct non-winning patterns divided by N is
//! the probability of solving in exactly two guesses when the second guess is
//! picked uniformly among the candidates consistent with the feedback.

use crate::core::{Candidate, Pattern};
use rustc_hash::{FxHashMap, FxHashSet};

/// Patterns observed for one guess across the whole solution set
#[derive(Debug, Clone)]
pub struct GuessProfile<'a> {
    guess: &'a Candidate,
    patterns: FxHashSet<Pattern>,
    distinct_patterns: usize,
}

impl<'a> GuessProfile<'a> {
    /// The guess this profile belongs to
    #[must_use]
    pub const fn guess(&self) -> &'a Candidate {
        self.guess
    }

    /// Every distinct pattern observed, the winning pattern included
    #[must_use]
    pub const fn patterns(&self) -> &FxHashSet<Pattern> {
        &self.patterns
    }

    /// Number of distinct non-winning patterns
    #[must_use]
    pub const fn distinct_patterns(&self) -> usize {
        self.distinct_patterns
    }

    /// Probability of solving in exactly two guesses out of `total` solutions
    #[must_use]
    pub fn probability(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.distinct_patterns as f64 / total as f64
    }
}

/// Compute the pattern profile of `guess` against every solution
///
/// All solutions must have the same length as the guess.
///
/// # Examples
/// ```
/// use nerdle_two::analysis::compute_profile;
/// use nerdle_two::core::Candidate;
///
/// let solutions: Vec<Candidate> = ["AA", "AB", "BA", "BB"]
///     .into_iter()
///     .map(|s| Candidate::new(s).unwrap())
///     .collect();
///
/// let profile = compute_profile(&solutions[0], &solutions);
/// assert_eq!(profile.distinct_patterns(), 3);
/// assert_eq!(profile.probability(solutions.len()), 0.75);
/// ```
#[must_use]
pub fn compute_profile<'a>(guess: &'a Candidate, solutions: &[Candidate]) -> GuessProfile<'a> {
    let mut patterns = FxHashSet::default();
    for solution in solutions {
        patterns.insert(Pattern::calculate(guess, solution));
    }

    let win = Pattern::winning(guess.len());
    let distinct_patterns = patterns.len() - usize::from(patterns.contains(&win));

    GuessProfile {
        guess,
        patterns,
        distinct_patterns,
    }
}

/// Group solutions by the pattern they produce with the guess
///
/// Maps each pattern to the number of solutions in its bucket.
#[must_use]
pub fn pattern_buckets(guess: &Candidate, solutions: &[Candidate]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for solution in solutions {
        let pattern = Pattern::calculate(guess, solution);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Probability of solving in exactly two guesses, computed directly
///
/// P = (1/N) Σ 1/K(s) over every solution s whose pattern is not the win,
/// where K(s) is the size of the bucket s falls into. This always agrees with
/// [`GuessProfile::probability`] and exists to check that closed form.
#[must_use]
pub fn brute_force_probability(guess: &Candidate, solutions: &[Candidate]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    let buckets = pattern_buckets(guess, solutions);

    let total: f64 = solutions
        .iter()
        .map(|solution| Pattern::calculate(guess, solution))
        .filter(|pattern| !pattern.is_win())
        .map(|pattern| 1.0 / buckets[&pattern] as f64)
        .sum();

    total / solutions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().map(|&t| Candidate::new(t).unwrap()).collect()
    }

    const THREE_LETTER: &[&str] = &["AAB", "ABA", "BAA", "ABC", "CAB", "BBB"];

    #[test]
    fn two_letter_profiles() {
        let set = candidates(&["AA", "AB", "BA", "BB"]);

        for guess in &set {
            let profile = compute_profile(guess, &set);
            assert_eq!(profile.distinct_patterns(), 3, "guess {guess}");
            assert_eq!(profile.patterns().len(), 4);
            assert!((profile.probability(set.len()) - 0.75).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn two_letter_profile_patterns() {
        let set = candidates(&["AA", "AB", "BA", "BB"]);
        let profile = compute_profile(&set[1], &set);

        let mut observed: Vec<String> = profile.patterns().iter().map(ToString::to_string).collect();
        observed.sort();
        assert_eq!(observed, ["BG", "GB", "GG", "PP"]);
    }

    #[test]
    fn three_letter_profiles() {
        let set = candidates(THREE_LETTER);
        let counts: Vec<usize> = set
            .iter()
            .map(|guess| compute_profile(guess, &set).distinct_patterns())
            .collect();

        assert_eq!(counts, [5, 5, 5, 5, 5, 3]);
    }

    #[test]
    fn repeated_pattern_counts_once() {
        // BBB sees BBG and BGB twice each
        let set = candidates(THREE_LETTER);
        let bbb = &set[5];

        let buckets = pattern_buckets(bbb, &set);
        assert_eq!(buckets[&"BBG".parse::<Pattern>().unwrap()], 2);
        assert_eq!(buckets[&"BGB".parse::<Pattern>().unwrap()], 2);
        assert_eq!(buckets[&"GBB".parse::<Pattern>().unwrap()], 1);
        assert_eq!(compute_profile(bbb, &set).distinct_patterns(), 3);
    }

    #[test]
    fn distinct_count_in_range() {
        let set = candidates(THREE_LETTER);
        for guess in &set {
            let count = compute_profile(guess, &set).distinct_patterns();
            assert!((1..set.len()).contains(&count), "guess {guess}: {count}");
        }
    }

    #[test]
    fn non_winning_buckets_cover_all_other_solutions() {
        let set = candidates(THREE_LETTER);
        for guess in &set {
            let buckets = pattern_buckets(guess, &set);
            let win = Pattern::winning(guess.len());

            assert_eq!(buckets.get(&win), Some(&1));
            let non_winning: usize = buckets
                .iter()
                .filter(|(pattern, _)| !pattern.is_win())
                .map(|(_, &count)| count)
                .sum();
            assert_eq!(non_winning, set.len() - 1);
        }
    }

    #[test]
    fn closed_form_matches_brute_force() {
        for texts in [&["AA", "AB", "BA", "BB"][..], THREE_LETTER] {
            let set = candidates(texts);
            for guess in &set {
                let closed = compute_profile(guess, &set).probability(set.len());
                let direct = brute_force_probability(guess, &set);
                assert!((closed - direct).abs() < 1e-12, "guess {guess}");
            }
        }
    }

    #[test]
    fn guess_outside_solution_set_has_no_win() {
        let set = candidates(&["AB", "BA"]);
        let outsider = Candidate::new("AA").unwrap();
        let profile = compute_profile(&outsider, &set);

        // GB and BG, neither is the win
        assert_eq!(profile.distinct_patterns(), 2);
    }

    #[test]
    fn empty_solution_set() {
        let guess = Candidate::new("AB").unwrap();
        let profile = compute_profile(&guess, &[]);

        assert_eq!(profile.distinct_patterns(), 0);
        assert!(profile.probability(0).abs() < f64::EPSILON);
        assert!(brute_force_probability(&guess, &[]).abs() < f64::EPSILON);
    }
}
