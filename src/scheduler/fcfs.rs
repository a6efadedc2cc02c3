//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable on ties).
//! 2. Run each to completion, back to back. If the CPU goes idle, the
//!    clock jumps to the next arrival.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use super::ordering::arrival_order;
use super::{finish_schedule, CpuScheduler};
use crate::error::Result;
use crate::models::{Policy, ProcessDescriptor, ProcessRun, Schedule, Slice};
use crate::validation::check_arguments;

/// Non-preemptive FCFS.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Result<Schedule> {
        check_arguments(processes, None)?;
        tracing::debug!(policy = self.name(), processes = processes.len(), "simulating");

        let mut runs = ProcessRun::from_batch(processes);
        let mut slices = Vec::with_capacity(runs.len());
        let mut current_time = 0;

        for idx in arrival_order(processes) {
            let run = &mut runs[idx];
            let start = current_time.max(run.arrival_time);
            let end = start + run.burst_time;

            run.start_time = Some(start);
            run.completion_time = Some(end);
            current_time = end;

            tracing::trace!(process = idx, start, end, "dispatch");
            slices.push(Slice::new(idx, start, end));
        }

        Ok(finish_schedule(self.policy(), &runs, slices))
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
