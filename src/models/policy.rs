//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which scheduling discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks per dispatch.
        time_quantum: i64,
    },
}

impl Policy {
    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    /// FCFS, SJF and RR with the given quantum.
    pub fn all(time_quantum: i64) -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::RoundRobin { time_quantum },
        ]
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { time_quantum } => write!(f, "RR(q={time_quantum})"),
            other => f.write_str(other.name()),
        }
    }
}
