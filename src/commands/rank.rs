//! Rank every first guess
//!
//! Runs the full all-pairs pass over the candidate set and reports the
//! two-guess solve probability of every candidate as a first guess.

use crate::analysis::{AnalysisError, ResultSummary, compute_all_profiles_with_progress};
use crate::core::Candidate;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for a ranking run
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Analyze a random subset of this many candidates instead of the whole set
    pub sample: Option<usize>,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            sample: None,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Result of a ranking run
#[derive(Debug)]
pub struct RankReport {
    pub summary: ResultSummary,
    pub duration: Duration,
    /// Candidate count before sampling
    pub loaded: usize,
}

impl RankReport {
    /// Number of guess/solution pairs evaluated
    #[must_use]
    pub const fn pairs(&self) -> usize {
        self.summary.total() * self.summary.total()
    }

    /// Evaluation throughput
    #[must_use]
    pub fn pairs_per_second(&self) -> f64 {
        self.pairs() as f64 / self.duration.as_secs_f64().max(f64::MIN_POSITIVE)
    }
}

/// Pick `size` candidates at random, keeping their original order
///
/// The same seed always picks the same subset. A size at or above the set
/// size returns the whole set.
#[must_use]
pub fn sample_candidates(candidates: &[Candidate], size: usize, seed: u64) -> Vec<Candidate> {
    if size >= candidates.len() {
        return candidates.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = rand::seq::index::sample(&mut rng, candidates.len(), size).into_vec();
    picked.sort_unstable();

    picked.into_iter().map(|i| candidates[i].clone()).collect()
}

/// Rank all candidates (or a sample of them) as first guesses
///
/// # Errors
///
/// Returns `AnalysisError` if the (sampled) candidate set is empty, has a
/// single candidate, or mixes lengths.
pub fn run_rank(candidates: &[Candidate], config: RankConfig) -> Result<RankReport, AnalysisError> {
    let loaded = candidates.len();
    let sampled;
    let candidates = match config.sample {
        Some(size) => {
            sampled = sample_candidates(candidates, size, config.seed);
            log::info!(
                "Sampled {} of {loaded} candidates (seed {})",
                sampled.len(),
                config.seed
            );
            &sampled[..]
        }
        None => candidates,
    };

    let n = candidates.len();
    log::info!("Computing feedback for {} guess/solution pairs", n * n);

    let pb = if config.show_progress {
        ProgressBar::new(n as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} guesses ({percent}%) | ETA {eta}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let result = compute_all_profiles_with_progress(candidates, || pb.inc(1));
    pb.finish_and_clear();
    let summary = result?;
    let duration = start.elapsed();

    log::info!(
        "Done in {:.1}s, best first guess {} ({} patterns)",
        duration.as_secs_f64(),
        summary.best().guess,
        summary.best().distinct_patterns
    );

    Ok(RankReport {
        summary,
        duration,
        loaded,
    })
}
