use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolation::PercolationStats;

/// Percolation - Monte Carlo estimate of the site percolation threshold
///
/// Opens random sites on an n-by-n grid until the top row connects to the
/// bottom row, repeats for the requested number of trials, and prints the
/// mean, standard deviation and 95% confidence interval of the threshold
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension n (the grid has n*n sites)
    #[clap(value_name = "GRID_SIZE", value_parser = clap::value_parser!(u64).range(1..))]
    grid_size: u64,

    /// Number of independent trials
    #[clap(value_name = "TRIALS", value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Seed for the random number generator (random if not given)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Quiet mode (warnings and errors only)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let n = usize::try_from(args.grid_size).context("grid size does not fit in memory")?;
    let trials = usize::try_from(args.trials).context("trial count does not fit in memory")?;

    let stats = PercolationStats::run(n, trials, &mut rng)
        .with_context(|| format!("failed to run {trials} trials on a {n}x{n} grid"))?;

    print!("{}", stats.report());
    Ok(())
}
