//! Side-by-side evaluation of several policies on one batch.

use serde::{Deserialize, Serialize};

use super::{scheduler_for, ScheduleKpi};
use crate::error::Result;
use crate::models::{Metrics, Policy, ProcessDescriptor, Schedule};

/// Results of one policy on one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Evaluated policy.
    pub policy: Policy,
    /// Turnaround, waiting, response averages.
    pub metrics: Metrics,
    /// Timeline indicators.
    pub kpi: ScheduleKpi,
    /// The timeline both of the above were computed from.
    pub schedule: Schedule,
}

/// Evaluates every policy against the same batch.
///
/// Policies share nothing but the read-only batch, so each runs on its
/// own scoped thread. Reports come back in the order of `policies`.
/// The first invalid-argument error (in policy order) is returned.
pub fn compare_policies(
    processes: &[ProcessDescriptor],
    policies: &[Policy],
) -> Result<Vec<PolicyReport>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = policies
            .iter()
            .map(|policy| scope.spawn(move || evaluate(processes, policy)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

fn evaluate(processes: &[ProcessDescriptor], policy: &Policy) -> Result<PolicyReport> {
    let schedule = scheduler_for(policy).schedule(processes)?;
    Ok(PolicyReport {
        policy: *policy,
        metrics: schedule.metrics(),
        kpi: ScheduleKpi::calculate(&schedule),
        schedule,
    })
}
