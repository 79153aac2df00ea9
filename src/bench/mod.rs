//! Search Benchmark Harness.
//!
//! Generates a sample array, runs repeated simulated searches with each
//! algorithm and aggregates comparison counts and wall-clock time.

pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod runner;
pub mod simulator;

pub use config::{BenchConfig, ARRAY_SIZE};
pub use error::{BenchError, Result};
pub use report::BenchReport;
pub use runner::{run, BenchmarkRunner, PhaseStats};
pub use simulator::{simulate, SearchKind};
