//! Aggregate scheduling metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |

use serde::{Deserialize, Serialize};

use super::ProcessOutcome;

/// Averages over every process in one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean response time (ticks).
    pub avg_response: f64,
}

impl Metrics {
    /// Folds per-process outcomes into averages.
    ///
    /// An empty slice yields all zeros. Schedulers reject empty batches
    /// before getting here, so this only matters for hand-built schedules.
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        let mut acc = MetricsAccumulator::default();
        for outcome in outcomes {
            acc.add(outcome);
        }
        acc.finish()
    }
}

/// Running sums for [`Metrics`].
///
/// Totals are `i128`: each term fits in `i64`, the sum over a batch may not.
#[derive(Debug, Clone, Copy, Default)]
struct MetricsAccumulator {
    count: usize,
    total_turnaround: i128,
    total_waiting: i128,
    total_response: i128,
}

impl MetricsAccumulator {
    fn add(&mut self, outcome: &ProcessOutcome) {
        self.count += 1;
        self.total_turnaround += i128::from(outcome.turnaround());
        self.total_waiting += i128::from(outcome.waiting());
        self.total_response += i128::from(outcome.response());
    }

    fn finish(self) -> Metrics {
        if self.count == 0 {
            return Metrics::default();
        }
        let n = self.count as f64;
        Metrics {
            avg_turnaround: self.total_turnaround as f64 / n,
            avg_waiting: self.total_waiting as f64 / n,
            avg_response: self.total_response as f64 / n,
        }
    }
}
