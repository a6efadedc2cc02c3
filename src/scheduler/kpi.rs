//! Timeline quality metrics beyond the three averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion tick |
//! | Busy Time | Sum of slice lengths |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Max Waiting | Largest single waiting time |
//! | Max Response | Largest single response time |
//! | Dispatches | Number of slices |
//! | Context Switches | Slices whose process differs from the previous slice |

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion tick.
    pub makespan: i64,
    /// Ticks the CPU spent executing.
    pub busy_time: i64,
    /// Busy fraction of `[0, makespan)` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Largest waiting time of any single process.
    pub max_waiting: i64,
    /// Largest response time of any single process.
    pub max_response: i64,
    /// Number of CPU slices.
    pub dispatches: usize,
    /// Dispatches that switched to a different process.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();
        let busy_time = schedule.busy_time();
        let cpu_utilization = schedule.utilization().unwrap_or(0.0);
        let throughput = if makespan <= 0 {
            0.0
        } else {
            schedule.process_count() as f64 / makespan as f64
        };

        let max_waiting = schedule
            .outcomes
            .iter()
            .map(|o| o.waiting())
            .max()
            .unwrap_or(0);
        let max_response = schedule
            .outcomes
            .iter()
            .map(|o| o.response())
            .max()
            .unwrap_or(0);

        let context_switches = schedule
            .slices
            .windows(2)
            .filter(|pair| pair[0].process != pair[1].process)
            .count();

        Self {
            makespan,
            busy_time,
            cpu_utilization,
            throughput,
            max_waiting,
            max_response,
            dispatches: schedule.slices.len(),
            context_switches,
        }
    }
}
