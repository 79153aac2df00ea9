//! Benchmark orchestration.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::BenchConfig;
use super::error::Result;
use super::generator::{generate_sample_array, sorted_copy};
use super::report::BenchReport;
use super::simulator::{simulate, SearchKind};

/// Aggregated measurements for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStats {
    /// Algorithm measured.
    pub kind: SearchKind,
    /// Number of simulated searches.
    pub searches: usize,
    /// Length of the array searched.
    pub array_size: usize,
    /// Sum of comparisons across every search.
    pub total_comparisons: u64,
    /// Wall-clock time of the whole search loop.
    pub elapsed: Duration,
}

impl PhaseStats {
    /// Mean comparisons per search, `0.0` if nothing ran.
    pub fn avg_comparisons(&self) -> f64 {
        if self.searches == 0 {
            return 0.0;
        }

        self.total_comparisons as f64 / self.searches as f64
    }

    /// Mean wall-clock time per search in fractional milliseconds, `0.0` if
    /// nothing ran.
    pub fn avg_time_ms(&self) -> f64 {
        if self.searches == 0 {
            return 0.0;
        }

        self.elapsed.as_secs_f64() * 1_000.0 / self.searches as f64
    }
}

/// Runs both algorithms against the same generated data.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Creates a runner for `config`.
    pub const fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner was built with.
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Generates one sample array plus its sorted copy, then times
    /// [`BenchConfig::searches`] simulations per algorithm.
    ///
    /// # Errors
    ///
    /// Propagates [`BenchError::InvalidRange`](super::error::BenchError::InvalidRange)
    /// from validation and generation.
    pub fn run<R>(&self, rng: &mut R) -> Result<BenchReport>
    where
        R: Rng + ?Sized,
    {
        self.config.validate()?;

        let BenchConfig {
            array_size,
            value_range,
        } = self.config;

        let unsorted = generate_sample_array(rng, array_size, value_range)?;
        let sorted = sorted_copy(&unsorted);

        let phases = SearchKind::ALL
            .into_iter()
            .map(|kind| {
                let arr = if kind.requires_sorted() {
                    &sorted
                } else {
                    &unsorted
                };
                self.run_phase(rng, kind, arr)
            })
            .collect();

        Ok(BenchReport::new(phases))
    }

    fn run_phase<R>(&self, rng: &mut R, kind: SearchKind, arr: &[usize]) -> PhaseStats
    where
        R: Rng + ?Sized,
    {
        let searches = self.config.searches();
        let range = self.config.value_range;

        info!(%kind, searches, array_size = arr.len(), "starting search phase");

        let (total_comparisons, elapsed) = measure(|| {
            (0..searches)
                .map(|_| simulate(rng, kind, range, arr) as u64)
                .sum::<u64>()
        });

        let stats = PhaseStats {
            kind,
            searches,
            array_size: arr.len(),
            total_comparisons,
            elapsed,
        };

        info!(
            %kind,
            total_comparisons,
            elapsed_us = elapsed.as_micros() as u64,
            avg_comparisons = stats.avg_comparisons(),
            "finished search phase"
        );

        stats
    }
}

/// Measure wall-clock time for a synchronous operation.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Runs the benchmark for an `array_size`-element array with values in
/// `[1, array_size]`, using an entropy-seeded generator.
pub fn run(array_size: usize) -> Result<BenchReport> {
    let mut rng = StdRng::from_entropy();
    BenchmarkRunner::new(BenchConfig::with_array_size(array_size)).run(&mut rng)
}
