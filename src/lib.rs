//! CPU-scheduling simulator for the U-Engine ecosystem.
//!
//! Models the single-CPU timeline that First-Come-First-Served,
//! Shortest-Job-First and Round-Robin would produce for a fixed batch of
//! processes, and reports average turnaround, waiting and response time.
//! Nothing is executed: every call is a pure, deterministic simulation
//! over a private copy of the input.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ProcessOutcome`,
//!   `Slice`, `Schedule`, `Metrics`, `Policy`
//! - **`scheduler`**: `FcfsScheduler`, `SjfScheduler`, `RoundRobinScheduler`,
//!   the `CpuScheduler` trait, `ScheduleKpi`, and policy comparison
//! - **`validation`**: Input checks (empty batch, bad burst/arrival/quantum)
//! - **`workload`**: Seeded random batch generation
//! - **`config`**: JSON simulation input
//!
//! # Example
//!
//! ```
//! use u_procsched::{fcfs_metrics, rr_metrics, sjf_metrics, ProcessDescriptor};
//!
//! let batch: Vec<ProcessDescriptor> = vec![(0, 5).into(), (1, 3).into(), (2, 1).into()];
//!
//! let sjf = sjf_metrics(&batch).unwrap();
//! assert!((sjf.avg_turnaround - 17.0 / 3.0).abs() < 1e-9);
//!
//! let rr = rr_metrics(&batch, 2).unwrap();
//! assert!((rr.avg_response - 1.0).abs() < 1e-9);
//!
//! assert!(fcfs_metrics(&[]).is_err());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedError};
pub use models::{Metrics, Policy, ProcessDescriptor, ProcessOutcome, Schedule, Slice};
pub use scheduler::{
    compare_policies, fcfs_metrics, fcfs_schedule, rr_metrics, rr_schedule, scheduler_for,
    sjf_metrics, sjf_schedule, CpuScheduler, PolicyReport, ScheduleKpi,
};
