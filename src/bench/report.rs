//! Fixed-width report table.

use core::fmt;

use super::runner::PhaseStats;
use super::simulator::SearchKind;

const SEPARATOR_WIDTH: usize = 79;

/// Results of a benchmark run, one entry per algorithm in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    phases: Vec<PhaseStats>,
}

impl BenchReport {
    /// Wraps the measured phases.
    pub fn new(phases: Vec<PhaseStats>) -> Self {
        Self { phases }
    }

    /// All measured phases.
    pub fn phases(&self) -> &[PhaseStats] {
        &self.phases
    }

    /// The phase measuring `kind`, if it ran.
    pub fn phase(&self, kind: SearchKind) -> Option<&PhaseStats> {
        self.phases.iter().find(|p| p.kind == kind)
    }
}

/// Renders the table: a header, a line of dashes, then one row per phase.
///
/// Columns are left-justified at widths 12/12/12/20/20, iterations use two
/// decimal places and times six.
impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:<12} {:<12} {:<20} {:<20}",
            "Search Type", "# Searches", "Array Size", "Avg. Iterations", "Average Time (ms)"
        )?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        for phase in &self.phases {
            writeln!(
                f,
                "{:<12} {:<12} {:<12} {:<20.2} {:<20.6}",
                phase.kind,
                phase.searches,
                phase.array_size,
                phase.avg_comparisons(),
                phase.avg_time_ms()
            )?;
        }

        Ok(())
    }
}
