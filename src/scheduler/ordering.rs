//! Arrival ordering shared by FCFS and Round-Robin.

use crate::models::ProcessDescriptor;

/// Returns input indices ordered by arrival time, earliest first.
///
/// The sort is stable: processes with equal arrival times keep their
/// input order, so the earlier-submitted process always wins a tie.
pub(crate) fn arrival_order(processes: &[ProcessDescriptor]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
