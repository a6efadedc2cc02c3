//! Round-Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable on ties) and admit everything
//!    that has arrived at t=0 into a FIFO ready queue.
//! 2. Dequeue the front process and run it for
//!    `min(remaining, time_quantum)` ticks.
//! 3. Admit every process that arrived during that slice, in arrival
//!    order, *then* put the preempted process at the back.
//! 4. If the queue empties while work remains, jump the clock to the next
//!    arrival and admit everything arriving at that tick.
//!
//! The ready queue is a growable `VecDeque`; it never holds more than
//! `n` entries since each process is queued at most once at a time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.4

use std::collections::VecDeque;

use super::ordering::arrival_order;
use super::{finish_schedule, CpuScheduler};
use crate::error::Result;
use crate::models::{Policy, ProcessDescriptor, ProcessRun, Schedule, Slice};
use crate::validation::check_arguments;

/// Preemptive Round-Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    time_quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is validated when scheduling, not here.
    pub fn new(time_quantum: i64) -> Self {
        Self { time_quantum }
    }

    /// Maximum ticks per dispatch.
    pub fn time_quantum(&self) -> i64 {
        self.time_quantum
    }
}

/// Arrival cursor over the arrival-ordered batch.
struct Arrivals {
    order: Vec<usize>,
    next: usize,
}

impl Arrivals {
    fn new(processes: &[ProcessDescriptor]) -> Self {
        Self {
            order: arrival_order(processes),
            next: 0,
        }
    }

    /// Enqueues, in arrival order, every not-yet-admitted process that
    /// has arrived by `now`.
    fn admit(&mut self, runs: &[ProcessRun], now: i64, queue: &mut VecDeque<usize>) {
        while let Some(&idx) = self.order.get(self.next) {
            if runs[idx].arrival_time > now {
                break;
            }
            queue.push_back(idx);
            self.next += 1;
        }
    }

    /// Arrival tick of the next process not yet admitted.
    fn peek_time(&self, runs: &[ProcessRun]) -> Option<i64> {
        self.order.get(self.next).map(|&idx| runs[idx].arrival_time)
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn policy(&self) -> Policy {
        Policy::RoundRobin {
            time_quantum: self.time_quantum,
        }
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Result<Schedule> {
        check_arguments(processes, Some(self.time_quantum))?;
        tracing::debug!(
            policy = self.name(),
            processes = processes.len(),
            time_quantum = self.time_quantum,
            "simulating"
        );

        let mut runs = ProcessRun::from_batch(processes);
        let mut arrivals = Arrivals::new(processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(runs.len());
        let mut slices = Vec::new();
        let mut current_time = 0;
        let mut completed = 0;

        arrivals.admit(&runs, current_time, &mut queue);

        while completed < runs.len() {
            let Some(idx) = queue.pop_front() else {
                // CPU idle until the next arrival
                match arrivals.peek_time(&runs) {
                    Some(t) => {
                        current_time = t;
                        arrivals.admit(&runs, current_time, &mut queue);
                    }
                    None => break,
                }
                continue;
            };

            let run = &mut runs[idx];
            let start = current_time;
            if run.start_time.is_none() {
                run.start_time = Some(start);
            }

            let exec = run.remaining_time.min(self.time_quantum);
            run.remaining_time -= exec;
            current_time += exec;

            let finished = run.remaining_time == 0;
            if finished {
                run.completion_time = Some(current_time);
                completed += 1;
            }

            tracing::trace!(process = idx, start, end = current_time, finished, "dispatch");
            slices.push(Slice::new(idx, start, current_time));

            // New arrivals queue ahead of the preempted process.
            arrivals.admit(&runs, current_time, &mut queue);
            if !finished {
                queue.push_back(idx);
            }
        }

        Ok(finish_schedule(self.policy(), &runs, slices))
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
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
    fn test_rr_reference_batch() {
        let schedule = RoundRobinScheduler::new(2)
            .schedule(&batch(&[(0, 5), (1, 3), (2, 1)]))
            .unwrap();
        // P0 0-2, P1 2-4, P2 4-5, P0 5-7, P1 7-8, P0 8-9
        let order: Vec<usize> = schedule.slices.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![0, 1, 2, 0, 1, 0]);

        let m = schedule.metrics();
        assert!((m.avg_turnaround - 19.0 / 3.0).abs() < 1e-9);
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-9);
        assert!((m.avg_response - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rr_single_process() {
        let m = RoundRobinScheduler::new(3).metrics(&batch(&[(0, 4)])).unwrap();
        assert!((m.avg_turnaround - 4.0).abs() < 1e-10);
        assert!(m.avg_waiting.abs() < 1e-10);
        assert!(m.avg_response.abs() < 1e-10);
    }

    #[test]
    fn test_rr_new_arrival_before_requeue() {
        // P1 arrives at 2, exactly when P0's first slice ends: P1 goes first.
        let schedule = RoundRobinScheduler::new(2)
            .schedule(&batch(&[(0, 4), (2, 2)]))
            .unwrap();
        let order: Vec<usize> = schedule.slices.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![0, 1, 0]);
    }

    #[test]
    fn test_rr_idle_jump_admits_simultaneous_arrivals() {
        let schedule = RoundRobinScheduler::new(1)
            .schedule(&batch(&[(0, 1), (5, 2), (5, 1)]))
            .unwrap();
        // P0 0-1, idle 1-5, then P1 and P2 both admitted at 5
        let order: Vec<usize> = schedule.slices.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![0, 1, 2, 1]);
        assert_eq!(schedule.slices[1].start, 5);
        assert_eq!(schedule.outcome(2).unwrap().response(), 1);
    }

    #[test]
    fn test_rr_work_conservation() {
        let processes = batch(&[(0, 7), (1, 4), (3, 9), (3, 1), (20, 5)]);
        let schedule = RoundRobinScheduler::new(3).schedule(&processes).unwrap();
        for (index, p) in processes.iter().enumerate() {
            assert_eq!(schedule.executed_ticks(index), p.burst_time);
            for slice in schedule.slices_for_process(index) {
                assert!(slice.duration() > 0 && slice.duration() <= 3);
            }
        }
    }

    #[test]
    fn test_rr_large_batch_has_no_queue_ceiling() {
        // Far more enqueue operations than a fixed 100-slot queue would hold
        let processes: Vec<ProcessDescriptor> =
            (0..250).map(|i| ProcessDescriptor::new(0, 3 + i % 4)).collect();
        let schedule = RoundRobinScheduler::new(1).schedule(&processes).unwrap();
        assert_eq!(schedule.process_count(), 250);
        let total: i64 = processes.iter().map(|p| p.burst_time).sum();
        assert_eq!(schedule.makespan(), total);
    }

    #[test]
    fn test_rr_quantum_larger_than_bursts_matches_fcfs() {
        let processes = batch(&[(0, 5), (1, 3), (2, 1)]);
        let rr = RoundRobinScheduler::new(100).metrics(&processes).unwrap();
        let fcfs = crate::scheduler::fcfs_metrics(&processes).unwrap();
        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_rr_rejects_timeline_overflow() {
        let err = RoundRobinScheduler::new(4)
            .metrics(&batch(&[(i64::MAX - 1, 5), (0, 3)]))
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::HorizonOverflow
        );
    }

    #[test]
    fn test_rr_large_bursts_within_limit() {
        let third = i64::MAX / 3;
        let schedule = RoundRobinScheduler::new(third / 2 + 1)
            .schedule(&batch(&[(0, third), (0, third), (0, third)]))
            .unwrap();
        assert_eq!(schedule.makespan(), 3 * third);
        assert!(schedule.metrics().avg_turnaround > third as f64);
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        let err = RoundRobinScheduler::new(0)
            .metrics(&batch(&[(0, 1)]))
            .unwrap_err();
        assert!(matches!(err, SchedError::InvalidArgument(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveQuantum
        );
    }
}
