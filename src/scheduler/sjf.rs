//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point:
//! 1. Among unfinished processes that have arrived, pick the one with the
//!    smallest burst. Ties go to the lowest input index.
//! 2. If nothing has arrived, jump the clock to the earliest pending
//!    arrival (lowest index on ties) and decide again.
//! 3. Run the pick to completion.
//!
//! # Complexity
//! O(n) scan per decision, O(n²) overall.
//!
//! # Reference
//! Smith (1956): SPT minimizes mean flow time on a single machine.

use super::{finish_schedule, CpuScheduler};
use crate::error::Result;
use crate::models::{Policy, ProcessDescriptor, ProcessRun, Schedule, Slice};
use crate::validation::check_arguments;

/// Non-preemptive SJF.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Result<Schedule> {
        check_arguments(processes, None)?;
        tracing::debug!(policy = self.name(), processes = processes.len(), "simulating");

        let mut runs = ProcessRun::from_batch(processes);
        let mut slices = Vec::with_capacity(runs.len());
        let mut current_time = 0;
        let mut completed = 0;

        while completed < runs.len() {
            let Some(idx) = shortest_ready(&runs, current_time) else {
                match earliest_pending(&runs) {
                    Some(next) => current_time = runs[next].arrival_time,
                    None => break,
                }
                continue;
            };

            let run = &mut runs[idx];
            let start = current_time;
            let end = start + run.burst_time;

            run.start_time = Some(start);
            run.completion_time = Some(end);
            current_time = end;
            completed += 1;

            tracing::trace!(process = idx, start, end, "dispatch");
            slices.push(Slice::new(idx, start, end));
        }

        Ok(finish_schedule(self.policy(), &runs, slices))
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}

/// Arrived, unfinished process with the smallest burst.
///
/// `min_by_key` keeps the first minimum, so the lowest index wins ties.
fn shortest_ready(runs: &[ProcessRun], now: i64) -> Option<usize> {
    runs.iter()
        .filter(|r| !r.is_finished() && r.arrival_time <= now)
        .min_by_key(|r| r.burst_time)
        .map(|r| r.index)
}

/// Unfinished process with the earliest arrival, lowest index on ties.
fn earliest_pending(runs: &[ProcessRun]) -> Option<usize> {
    runs.iter()
        .filter(|r| !r.is_finished())
        .min_by_key(|r| r.arrival_time)
        .map(|r| r.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedError;
    use crate::validation::ValidationErrorKind;

    fn batch(pairs: &[(i64, i64)]) -> Vec<ProcessDescriptor> {
        pairs.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_sjf_reference_batch() {
        let m = SjfScheduler::new()
            .metrics(&batch(&[(0, 5), (1, 3), (2, 1)]))
            .unwrap();
        // P0 0-5, P2 5-6, P1 6-9
        assert!((m.avg_turnaround - 17.0 / 3.0).abs() < 1e-9);
        assert!((m.avg_waiting - 8.0 / 3.0).abs() < 1e-9);
        assert!((m.avg_response - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sjf_single_process() {
        let m = SjfScheduler::new().metrics(&batch(&[(0, 4)])).unwrap();
        assert!((m.avg_turnaround - 4.0).abs() < 1e-10);
        assert!(m.avg_waiting.abs() < 1e-10);
        assert!(m.avg_response.abs() < 1e-10);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // A shorter job arriving mid-run must wait for the long one
        let schedule = SjfScheduler::new()
            .schedule(&batch(&[(0, 10), (1, 1)]))
            .unwrap();
        assert_eq!(schedule.outcome(0).unwrap().completion_time, 10);
        assert_eq!(schedule.outcome(1).unwrap().start_time, 10);
    }

    #[test]
    fn test_sjf_equal_burst_lowest_index_wins() {
        let schedule = SjfScheduler::new()
            .schedule(&batch(&[(0, 3), (1, 2), (1, 2), (0, 2)]))
            .unwrap();
        // At t=0: P0(3), P3(2) → P3. At t=2: P0, P1, P2 → P1 then P2, then P0.
        let order: Vec<usize> = schedule.slices.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_sjf_idle_jump() {
        let schedule = SjfScheduler::new()
            .schedule(&batch(&[(5, 4), (5, 2), (20, 1)]))
            .unwrap();
        let order: Vec<usize> = schedule.slices.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![1, 0, 2]);
        assert_eq!(schedule.slices[0].start, 5);
        assert_eq!(schedule.slices[2].start, 20);
    }

    #[test]
    fn test_sjf_rejects_timeline_overflow() {
        let err = SjfScheduler::new()
            .metrics(&batch(&[(0, i64::MAX / 2), (0, i64::MAX / 2), (0, 10)]))
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::HorizonOverflow
        );
    }

    #[test]
    fn test_sjf_large_bursts_within_limit() {
        let third = i64::MAX / 3;
        let m = SjfScheduler::new()
            .metrics(&batch(&[(0, third), (0, third), (0, third)]))
            .unwrap();
        // Turnaround sum is 6 * third, beyond i64 but averaged without overflow
        assert!((m.avg_turnaround / (2.0 * third as f64) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sjf_rejects_bad_burst() {
        let err = SjfScheduler::new().metrics(&batch(&[(0, 0)])).unwrap_err();
        assert!(matches!(err, SchedError::InvalidArgument(_)));
    }
}
