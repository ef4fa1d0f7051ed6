/// Monte Carlo estimation of the percolation threshold
///
/// Each trial opens uniformly random sites on a fresh grid until it
/// percolates; the fraction of open sites at that moment is one sample of
/// the threshold. Samples are summarized by their mean, sample standard
/// deviation and a normal-approximation 95% confidence interval.
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;

/// z-statistic for a 95% confidence level
pub const CONFIDENCE_95: f64 = 1.96;

/// Run one trial on an n-by-n grid and return its threshold estimate
///
/// Random picks that land on an already-open site are simply repeated; the
/// loop ends because every grid percolates once all of its sites are open.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = PercolationGrid::new(n)?;
    let side = n as i64;

    while !grid.percolates()? {
        let row = rng.gen_range(0..side);
        let col = rng.gen_range(0..side);
        grid.open(row, col)?;
    }

    Ok(grid.open_site_count() as f64 / grid.site_count() as f64)
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
    elapsed: Duration,
}

impl PercolationStats {
    /// Perform `trials` independent trials on an n-by-n grid
    pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid dimension must be positive".to_string(),
            ));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trial count must be positive".to_string(),
            ));
        }

        info!("Running {trials} trials on a {n}x{n} grid");

        let start = Instant::now();
        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(n, rng)?;
            debug!("Trial {}: threshold {threshold:.6}", trial + 1);
            thresholds.push(threshold);
        }
        let elapsed = start.elapsed();

        info!(
            "Completed {trials} trials in {:.3}s",
            elapsed.as_secs_f64()
        );

        Ok(PercolationStats {
            n,
            thresholds,
            elapsed,
        })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial threshold samples in run order
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation (n-1 denominator); NaN for a single trial
    pub fn stddev(&self) -> f64 {
        sample_stddev(&self.thresholds)
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval
    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval
    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    pub fn report(&self) -> Report<'_> {
        Report { stats: self }
    }
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn sample_stddev(samples: &[f64]) -> f64 {
    let mu = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - mu) * (x - mu)).sum();
    (sum_sq / (samples.len() as f64 - 1.0)).sqrt()
}

/// Five labeled lines: mean, stddev, interval ends, elapsed seconds
pub struct Report<'a> {
    stats: &'a PercolationStats,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "{:>20}{:.6}", "Mean: ", s.mean())?;
        writeln!(f, "{:>20}{:.6}", "StdDev: ", s.stddev())?;
        writeln!(f, "{:>20}{:.6}", "ConfidenceLow: ", s.confidence_low())?;
        writeln!(f, "{:>20}{:.6}", "ConfidenceHigh: ", s.confidence_high())?;
        writeln!(f, "{:>20}{:.3}", "Elapsed Time: ", s.elapsed.as_secs_f64())
    }
}
