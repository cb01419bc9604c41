//! All-pairs aggregation and ranking
//!
//! Runs [`compute_profile`] once per candidate acting as the guess, then reduces
//! the per-guess counts to summary statistics and a full ranking.

use super::AnalysisError;
use super::profile::compute_profile;
use crate::core::Candidate;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::Instant;

/// One row of the ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    /// 1-based position, best first
    pub rank: usize,
    pub guess: String,
    pub distinct_patterns: usize,
    /// P(solve in exactly 2 | guess)
    pub probability: f64,
}

/// Aggregate over every guess profile
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    total: usize,
    ranking: Vec<RankedGuess>,
    min: usize,
    max: usize,
    mean: f64,
    median: f64,
}

impl ResultSummary {
    /// Build the summary from per-guess distinct pattern counts
    ///
    /// `counts[i]` belongs to `candidates[i]`. The ranking is sorted by count,
    /// highest first, with ties broken by ascending candidate text.
    fn from_counts(candidates: &[Candidate], counts: &[usize]) -> Self {
        debug_assert_eq!(candidates.len(), counts.len());
        debug_assert!(!counts.is_empty());

        let total = candidates.len();

        let mut order: Vec<usize> = (0..total).collect();
        order.sort_by(|&a, &b| {
            counts[b]
                .cmp(&counts[a])
                .then_with(|| candidates[a].cmp(&candidates[b]))
        });

        let ranking = order
            .into_iter()
            .enumerate()
            .map(|(position, idx)| RankedGuess {
                rank: position + 1,
                guess: candidates[idx].text().to_string(),
                distinct_patterns: counts[idx],
                probability: counts[idx] as f64 / total as f64,
            })
            .collect();

        let mut sorted = counts.to_vec();
        sorted.sort_unstable();

        let mid = total / 2;
        let median = if total % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
        } else {
            sorted[mid] as f64
        };

        Self {
            total,
            ranking,
            min: sorted[0],
            max: sorted[total - 1],
            mean: counts.iter().sum::<usize>() as f64 / total as f64,
            median,
        }
    }

    /// Number of candidates (N)
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Every guess, best first
    #[must_use]
    pub fn ranking(&self) -> &[RankedGuess] {
        &self.ranking
    }

    /// Guess with the most distinct patterns
    ///
    /// # Panics
    /// Will not panic - a summary always holds at least two guesses.
    #[must_use]
    pub fn best(&self) -> &RankedGuess {
        &self.ranking[0]
    }

    /// Guess with the fewest distinct patterns, ties broken by ascending text
    #[must_use]
    pub fn worst(&self) -> &RankedGuess {
        self.bottom(1)[0]
    }

    /// The `n` best guesses
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedGuess] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// The `n` worst guesses, worst first
    #[must_use]
    pub fn bottom(&self, n: usize) -> Vec<&RankedGuess> {
        let mut rows: Vec<&RankedGuess> = self.ranking.iter().collect();
        rows.sort_by(|a, b| worst_first(a, b));
        rows.truncate(n);
        rows
    }

    /// Smallest distinct pattern count
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Largest distinct pattern count
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Mean distinct pattern count
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Median distinct pattern count
    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }

    /// P(solve in 1), identical for every guess
    #[must_use]
    pub fn solve_in_one_probability(&self) -> f64 {
        1.0 / self.total as f64
    }

    /// Expected P(solve in exactly 2) for a uniformly random first guess
    #[must_use]
    pub fn random_guess_probability(&self) -> f64 {
        self.mean / self.total as f64
    }

    /// Median P(solve in exactly 2) across all first guesses
    #[must_use]
    pub fn median_probability(&self) -> f64 {
        self.median / self.total as f64
    }
}

fn worst_first(a: &RankedGuess, b: &RankedGuess) -> Ordering {
    a.distinct_patterns
        .cmp(&b.distinct_patterns)
        .then_with(|| a.guess.cmp(&b.guess))
}

/// Check the candidate set before the N² pass
///
/// Returns the common candidate length.
fn validate(candidates: &[Candidate]) -> Result<usize, AnalysisError> {
    let first = match candidates {
        [] => return Err(AnalysisError::Empty),
        [_] => return Err(AnalysisError::SingleCandidate),
        [first, ..] => first,
    };

    let expected = first.len();
    if let Some((index, candidate)) = candidates
        .iter()
        .enumerate()
        .find(|(_, c)| c.len() != expected)
    {
        return Err(AnalysisError::LengthMismatch {
            index,
            expected,
            found: candidate.len(),
        });
    }

    Ok(expected)
}

/// Profile every candidate as a guess against every candidate as a solution
///
/// # Errors
/// Returns `AnalysisError` if the set is empty, has a single candidate, or
/// mixes candidate lengths. Nothing is evaluated in that case.
///
/// # Examples
/// ```
/// use nerdle_two::analysis::compute_all_profiles;
/// use nerdle_two::core::Candidate;
///
/// let candidates: Vec<Candidate> = ["AA", "AB", "BA", "BB"]
///     .into_iter()
///     .map(|s| Candidate::new(s).unwrap())
///     .collect();
///
/// let summary = compute_all_profiles(&candidates).unwrap();
/// assert_eq!(summary.best().guess, "AA");
/// assert_eq!(summary.best().distinct_patterns, 3);
/// ```
pub fn compute_all_profiles(candidates: &[Candidate]) -> Result<ResultSummary, AnalysisError> {
    compute_all_profiles_with_progress(candidates, || {})
}

/// Same as [`compute_all_profiles`], calling `on_guess_done` after each guess
///
/// Guesses are processed in parallel, so the callback may run on any worker
/// thread and in any order.
///
/// # Errors
/// See [`compute_all_profiles`].
pub fn compute_all_profiles_with_progress<F>(
    candidates: &[Candidate],
    on_guess_done: F,
) -> Result<ResultSummary, AnalysisError>
where
    F: Fn() + Sync,
{
    let len = validate(candidates)?;
    let n = candidates.len();

    log::debug!(
        "Profiling {n} candidates of length {len} ({} pairs)",
        n * n
    );
    let start = Instant::now();

    let counts: Vec<usize> = candidates
        .par_iter()
        .map(|guess| {
            let count = compute_profile(guess, candidates).distinct_patterns();
            on_guess_done();
            count
        })
        .collect();

    log::debug!("Profiled {n} guesses in {:.2?}", start.elapsed());

    Ok(ResultSummary::from_counts(candidates, &counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn candidates(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().map(|&t| Candidate::new(t).unwrap()).collect()
    }

    #[test]
    fn two_letter_summary() {
        let set = candidates(&["BB", "AB", "BA", "AA"]);
        let summary = compute_all_profiles(&set).unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.min(), 3);
        assert_eq!(summary.max(), 3);
        assert!((summary.mean() - 3.0).abs() < f64::EPSILON);
        assert!((summary.median() - 3.0).abs() < f64::EPSILON);
        assert!((summary.random_guess_probability() - 0.75).abs() < f64::EPSILON);
        assert!((summary.solve_in_one_probability() - 0.25).abs() < f64::EPSILON);

        // All tied, so ranking falls back to text order
        let order: Vec<&str> = summary.ranking().iter().map(|r| r.guess.as_str()).collect();
        assert_eq!(order, ["AA", "AB", "BA", "BB"]);
        assert_eq!(summary.best().guess, "AA");
        assert_eq!(summary.worst().guess, "AA");
    }

    #[test]
    fn three_letter_summary() {
        let set = candidates(&["AAB", "ABA", "BAA", "ABC", "CAB", "BBB"]);
        let summary = compute_all_profiles(&set).unwrap();

        let rows: Vec<(usize, &str, usize)> = summary
            .ranking()
            .iter()
            .map(|r| (r.rank, r.guess.as_str(), r.distinct_patterns))
            .collect();
        assert_eq!(
            rows,
            [
                (1, "AAB", 5),
                (2, "ABA", 5),
                (3, "ABC", 5),
                (4, "BAA", 5),
                (5, "CAB", 5),
                (6, "BBB", 3),
            ]
        );

        assert_eq!(summary.worst().guess, "BBB");
        assert_eq!(summary.min(), 3);
        assert_eq!(summary.max(), 5);
        assert!((summary.mean() - 28.0 / 6.0).abs() < 1e-12);
        assert!((summary.median() - 5.0).abs() < f64::EPSILON);
        assert!((summary.best().probability - 5.0 / 6.0).abs() < 1e-12);
        assert!((summary.median_probability() - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn top_and_bottom() {
        let set = candidates(&["AAB", "ABA", "BAA", "ABC", "CAB", "BBB"]);
        let summary = compute_all_profiles(&set).unwrap();

        let top: Vec<&str> = summary.top(2).iter().map(|r| r.guess.as_str()).collect();
        assert_eq!(top, ["AAB", "ABA"]);
        assert_eq!(summary.top(100).len(), 6);

        let bottom: Vec<&str> = summary.bottom(3).iter().map(|r| r.guess.as_str()).collect();
        assert_eq!(bottom, ["BBB", "AAB", "ABA"]);
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let summary = ResultSummary::from_counts(&candidates(&["A", "B", "C", "D"]), &[1, 2, 3, 3]);
        assert!((summary.median() - 2.5).abs() < f64::EPSILON);
        assert!((summary.mean() - 2.25).abs() < f64::EPSILON);
        assert_eq!(summary.best().guess, "C");
        assert_eq!(summary.worst().guess, "A");
    }

    #[test]
    fn deterministic_across_runs() {
        let set = candidates(&["AAB", "ABA", "BAA", "ABC", "CAB", "BBB"]);
        let first = compute_all_profiles(&set).unwrap();
        let second = compute_all_profiles(&set).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn progress_called_once_per_guess() {
        let set = candidates(&["AAB", "ABA", "BAA", "ABC", "CAB", "BBB"]);
        let ticks = AtomicUsize::new(0);

        compute_all_profiles_with_progress(&set, || {
            ticks.fetch_add(1, AtomicOrdering::Relaxed);
        })
        .unwrap();

        assert_eq!(ticks.load(AtomicOrdering::Relaxed), set.len());
    }

    #[test]
    fn rejects_empty_set() {
        assert_eq!(compute_all_profiles(&[]), Err(AnalysisError::Empty));
    }

    #[test]
    fn rejects_single_candidate() {
        let set = candidates(&["12+35=47"]);
        assert_eq!(compute_all_profiles(&set), Err(AnalysisError::SingleCandidate));
    }

    #[test]
    fn rejects_mixed_lengths_before_evaluating() {
        let set = candidates(&["AB", "BA", "ABC", "BB"]);
        let ticks = AtomicUsize::new(0);

        let result = compute_all_profiles_with_progress(&set, || {
            ticks.fetch_add(1, AtomicOrdering::Relaxed);
        });

        assert_eq!(
            result,
            Err(AnalysisError::LengthMismatch {
                index: 2,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(ticks.load(AtomicOrdering::Relaxed), 0);
    }
}
