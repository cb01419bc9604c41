//! Nerdle Two-Guess Solver - CLI
//!
//! Ranks every Nerdle first guess by its probability of solving the puzzle in
//! exactly two guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nerdle_two::{
    candidates::{CLASSIC_LENGTH, DEFAULT_CANDIDATES_FILE, load_from_file},
    commands::{RankConfig, analyze_guess, run_rank, score_guess},
    core::Candidate,
    output::{print_guess_analysis, print_rank_report, print_score, save_csv},
};

#[derive(Parser)]
#[command(
    name = "nerdle_two",
    about = "Probability of solving Nerdle in exactly two guesses, for every first guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Candidate list, one equation per line
    #[arg(short, long, global = true, default_value = DEFAULT_CANDIDATES_FILE)]
    candidates: String,

    /// Equation length
    #[arg(short, long, global = true, default_value_t = CLASSIC_LENGTH)]
    length: usize,

    /// Worker threads (default: all cores)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every first guess (default)
    Rank {
        /// Rows in the best-guesses table
        #[arg(long, default_value_t = 20)]
        top: usize,

        /// Rows in the worst-guesses list
        #[arg(long, default_value_t = 5)]
        bottom: usize,

        /// Write the full ranking to a CSV file
        #[arg(long)]
        csv: Option<String>,

        /// Only analyze a random subset of this many candidates
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show how one first guess splits the candidates
    Analyze {
        /// The guess to analyze
        guess: String,

        /// Number of largest buckets to list
        #[arg(long, default_value_t = 10)]
        buckets: usize,
    },

    /// Show the feedback a guess receives against a solution
    Score {
        /// The guess
        guess: String,
        /// The secret solution
        solution: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    nerdle_two::log::init_logger(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
        log::debug!("Using {threads} worker threads");
    }

    let command = cli.command.unwrap_or(Commands::Rank {
        top: 20,
        bottom: 5,
        csv: None,
        sample: None,
        seed: 42,
        quiet: false,
    });

    match command {
        Commands::Rank {
            top,
            bottom,
            csv,
            sample,
            seed,
            quiet,
        } => {
            let candidates = load_candidates(&cli.candidates, cli.length)?;
            let config = RankConfig {
                sample,
                seed,
                show_progress: !quiet,
            };
            run_rank_command(&candidates, config, top, bottom, csv.as_deref())
        }
        Commands::Analyze { guess, buckets } => {
            let candidates = load_candidates(&cli.candidates, cli.length)?;
            let result = analyze_guess(&guess, &candidates, buckets)?;
            print_guess_analysis(&result);
            Ok(())
        }
        Commands::Score { guess, solution } => {
            let pattern = score_guess(&guess, &solution)?;
            print_score(&guess, &solution, pattern);
            Ok(())
        }
    }
}

fn load_candidates(path: &str, length: usize) -> Result<Vec<Candidate>> {
    let candidates = load_from_file(path, length).with_context(|| {
        format!(
            "Could not load candidates from {path}. Download NerdleClassicRestricted.txt \
             from https://github.com/pedrokkrause/Nerdle-Equations"
        )
    })?;
    log::info!("Loaded {} candidates from {path}", candidates.len());
    Ok(candidates)
}

fn run_rank_command(
    candidates: &[Candidate],
    config: RankConfig,
    top: usize,
    bottom: usize,
    csv: Option<&str>,
) -> Result<()> {
    let report = run_rank(candidates, config)?;
    print_rank_report(&report, top, bottom);

    if let Some(path) = csv {
        save_csv(&report.summary, path).with_context(|| format!("Failed to write {path}"))?;
        println!("\nFull ranked results saved to {path}");
    }

    Ok(())
}
