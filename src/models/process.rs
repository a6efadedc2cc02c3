//! Process model.
//!
//! A process is a single CPU burst that becomes ready at its arrival
//! tick. Schedulers never touch the caller's descriptors: each call
//! builds its own [`ProcessRun`] working copies and hands back immutable
//! [`ProcessOutcome`] snapshots once the timeline is complete.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process submitted to a scheduler.
///
/// Times are signed so that malformed input (negative arrival, zero or
/// negative burst) can be represented and rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
}

impl ProcessDescriptor {
    /// Creates a descriptor.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
        }
    }
}

impl From<(i64, i64)> for ProcessDescriptor {
    fn from((arrival_time, burst_time): (i64, i64)) -> Self {
        Self::new(arrival_time, burst_time)
    }
}

/// Per-call working state for one process.
///
/// Lives only for the duration of a scheduling call.
#[derive(Debug, Clone)]
pub(crate) struct ProcessRun {
    pub index: usize,
    pub arrival_time: i64,
    pub burst_time: i64,
    /// First dispatch tick. `None` until the process first runs.
    pub start_time: Option<i64>,
    pub completion_time: Option<i64>,
    /// Only Round-Robin decrements this; FCFS and SJF run to completion.
    pub remaining_time: i64,
}

impl ProcessRun {
    pub fn new(index: usize, descriptor: &ProcessDescriptor) -> Self {
        Self {
            index,
            arrival_time: descriptor.arrival_time,
            burst_time: descriptor.burst_time,
            start_time: None,
            completion_time: None,
            remaining_time: descriptor.burst_time,
        }
    }

    /// Builds working copies for a whole batch, in input order.
    pub fn from_batch(processes: &[ProcessDescriptor]) -> Vec<Self> {
        processes
            .iter()
            .enumerate()
            .map(|(index, p)| Self::new(index, p))
            .collect()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Freezes a finished run into its outcome.
    ///
    /// Returns `None` if the process was never dispatched or has not completed.
    pub fn outcome(&self) -> Option<ProcessOutcome> {
        Some(ProcessOutcome {
            index: self.index,
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            start_time: self.start_time?,
            completion_time: self.completion_time?,
        })
    }
}

/// The finished timeline of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Position of the process in the caller's batch.
    pub index: usize,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Burst length in ticks.
    pub burst_time: i64,
    /// Tick of first dispatch.
    pub start_time: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
}

impl ProcessOutcome {
    /// `completion - arrival`.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion_time - self.arrival_time
    }

    /// `turnaround - burst`: time spent ready but not running.
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst_time
    }

    /// `start - arrival`.
    #[inline]
    pub fn response(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}
