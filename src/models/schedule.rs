//! Schedule (timeline) model.
//!
//! A schedule is the complete single-CPU timeline a policy produced for a
//! batch: the CPU slices in dispatch order plus one finished outcome per
//! process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::{Metrics, Policy, ProcessOutcome};

/// A finished simulation of one policy over one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Policy that produced this timeline.
    pub policy: Policy,
    /// Per-process outcomes, in the caller's input order.
    pub outcomes: Vec<ProcessOutcome>,
    /// CPU slices in dispatch order.
    pub slices: Vec<Slice>,
}

/// One contiguous CPU interval `[start, end)` granted to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Input index of the process that ran.
    pub process: usize,
    /// First tick of the slice.
    pub start: i64,
    /// Tick after the last executed unit.
    pub end: i64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(process: usize, start: i64, end: i64) -> Self {
        Self {
            process,
            start,
            end,
        }
    }

    /// Executed ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule for `policy`.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            outcomes: Vec::new(),
            slices: Vec::new(),
        }
    }

    /// Aggregate metrics over all outcomes.
    pub fn metrics(&self) -> Metrics {
        Metrics::from_outcomes(&self.outcomes)
    }

    /// Latest completion tick (0 for an empty schedule).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU spent executing.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// CPU utilization over `[0, makespan)`.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Outcome for the process at input position `index`.
    pub fn outcome(&self, index: usize) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.index == index)
    }

    /// All slices of one process, in dispatch order.
    pub fn slices_for_process(&self, index: usize) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process == index).collect()
    }

    /// Sum of executed ticks of one process across all its slices.
    pub fn executed_ticks(&self, index: usize) -> i64 {
        self.slices_for_process(index)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.outcomes.len()
    }
}
