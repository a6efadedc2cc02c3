//! Seeded random workload generation.
//!
//! Produces process batches for experiments and tests. Arrivals follow
//! a random walk with gaps in `0..=max_gap`, bursts are uniform in
//! `min_burst..=max_burst`. The same seed always yields the same batch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessDescriptor;

/// Builder for random process batches.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    max_gap: i64,
    min_burst: i64,
    max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator with 10 processes, gaps up to 3, bursts 1..=10.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 10,
            max_gap: 3,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the largest gap between consecutive arrivals (clamped at 0).
    pub fn with_max_gap(mut self, max_gap: i64) -> Self {
        self.max_gap = max_gap.max(0);
        self
    }

    /// Sets the burst range. Bounds are clamped to at least 1 and swapped
    /// if given in the wrong order.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        let (lo, hi) = if min_burst <= max_burst {
            (min_burst, max_burst)
        } else {
            (max_burst, min_burst)
        };
        self.min_burst = lo.max(1);
        self.max_burst = hi.max(1);
        self
    }

    /// Generates the batch in non-decreasing arrival order.
    pub fn generate(&self) -> Vec<ProcessDescriptor> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival: i64 = 0;

        (0..self.count)
            .map(|i| {
                if i > 0 {
                    arrival = arrival.saturating_add(rng.random_range(0..=self.max_gap));
                }
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessDescriptor::new(arrival, burst)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_same_seed_same_batch() {
        let a = WorkloadGenerator::new(42).with_count(30).generate();
        let b = WorkloadGenerator::new(42).with_count(30).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_batch_is_valid() {
        let batch = WorkloadGenerator::new(1)
            .with_count(100)
            .with_max_gap(5)
            .with_burst_range(2, 6)
            .generate();
        assert_eq!(batch.len(), 100);
        assert!(validate_batch(&batch).is_ok());
        assert_eq!(batch[0].arrival_time, 0);
        for pair in batch.windows(2) {
            let gap = pair[1].arrival_time - pair[0].arrival_time;
            assert!((0..=5).contains(&gap));
        }
        assert!(batch.iter().all(|p| (2..=6).contains(&p.burst_time)));
    }

    #[test]
    fn test_burst_range_normalized() {
        let batch = WorkloadGenerator::new(9)
            .with_burst_range(4, -3)
            .generate();
        assert!(batch.iter().all(|p| (1..=4).contains(&p.burst_time)));
    }

    #[test]
    fn test_huge_gap_saturates() {
        let batch = WorkloadGenerator::new(3)
            .with_count(50)
            .with_max_gap(i64::MAX)
            .generate();
        assert_eq!(batch.len(), 50);
        assert!(batch.iter().all(|p| p.arrival_time >= 0));
        for pair in batch.windows(2) {
            assert!(pair[0].arrival_time <= pair[1].arrival_time);
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(WorkloadGenerator::new(0).with_count(0).generate().is_empty());
    }
}
