//! CPU schedulers and timeline evaluation.
//!
//! Provides the three single-CPU policies, a common trait over them, and
//! schedule quality metrics.
//!
//! # Algorithms
//!
//! | Policy | Preemptive | Decision |
//! |--------|-----------|----------|
//! | FCFS | no | earliest arrival, input order on ties |
//! | SJF | no | smallest burst among arrived, lowest index on ties |
//! | RR | yes | FIFO ready queue, one quantum per turn |
//!
//! Every call validates its input, simulates on private working copies,
//! and returns an immutable [`Schedule`]. No state is shared between
//! calls, so schedulers may run concurrently over the same batch.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod compare;
mod fcfs;
mod kpi;
mod ordering;
mod round_robin;
mod sjf;

pub use compare::{compare_policies, PolicyReport};
pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Metrics, Policy, ProcessDescriptor, ProcessRun, Schedule, Slice};

/// A single-CPU scheduling policy.
///
/// Implementations must not mutate the caller's batch and must keep no
/// state between calls: identical input yields identical output.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// The policy this scheduler simulates, including its parameters.
    fn policy(&self) -> Policy;

    /// Simulates the batch and returns the full timeline.
    ///
    /// Fails with `InvalidArgument` before any simulation if the batch is
    /// empty or contains invalid times.
    fn schedule(&self, processes: &[ProcessDescriptor]) -> Result<Schedule>;

    /// Simulates the batch and returns only the averages.
    fn metrics(&self, processes: &[ProcessDescriptor]) -> Result<Metrics> {
        self.schedule(processes).map(|s| s.metrics())
    }

    /// Human-readable description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Builds the scheduler for a policy.
pub fn scheduler_for(policy: &Policy) -> Box<dyn CpuScheduler> {
    match *policy {
        Policy::Fcfs => Box::new(FcfsScheduler::new()),
        Policy::Sjf => Box::new(SjfScheduler::new()),
        Policy::RoundRobin { time_quantum } => Box::new(RoundRobinScheduler::new(time_quantum)),
    }
}

/// FCFS timeline.
pub fn fcfs_schedule(processes: &[ProcessDescriptor]) -> Result<Schedule> {
    FcfsScheduler::new().schedule(processes)
}

/// SJF timeline.
pub fn sjf_schedule(processes: &[ProcessDescriptor]) -> Result<Schedule> {
    SjfScheduler::new().schedule(processes)
}

/// Round-Robin timeline.
pub fn rr_schedule(processes: &[ProcessDescriptor], time_quantum: i64) -> Result<Schedule> {
    RoundRobinScheduler::new(time_quantum).schedule(processes)
}

/// FCFS averages.
pub fn fcfs_metrics(processes: &[ProcessDescriptor]) -> Result<Metrics> {
    FcfsScheduler::new().metrics(processes)
}

/// SJF averages.
pub fn sjf_metrics(processes: &[ProcessDescriptor]) -> Result<Metrics> {
    SjfScheduler::new().metrics(processes)
}

/// Round-Robin averages.
pub fn rr_metrics(processes: &[ProcessDescriptor], time_quantum: i64) -> Result<Metrics> {
    RoundRobinScheduler::new(time_quantum).metrics(processes)
}

/// Freezes finished working copies into a schedule, outcomes in input order.
fn finish_schedule(policy: Policy, runs: &[ProcessRun], slices: Vec<Slice>) -> Schedule {
    debug_assert!(runs.iter().all(ProcessRun::is_finished));
    Schedule {
        policy,
        outcomes: runs.iter().filter_map(ProcessRun::outcome).collect(),
        slices,
    }
}
