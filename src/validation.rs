//! Input validation for scheduling calls.
//!
//! Every scheduler validates its arguments once, at the call boundary,
//! before any working state is built. Detects:
//! - Empty batches (averages would divide by zero)
//! - Zero or negative burst times
//! - Negative arrival times
//! - Zero or negative Round-Robin time quanta
//! - Batches whose timeline could run past `i64::MAX`
//!
//! All problems are collected, not just the first one.

use crate::error::{Result, SchedError};
use crate::models::ProcessDescriptor;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no processes.
    EmptyBatch,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// Round-Robin quantum is `<= 0`.
    NonPositiveQuantum,
    /// `max(arrival) + sum(burst)` does not fit in `i64`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. At least one process
/// 2. Every `burst_time > 0`
/// 3. Every `arrival_time >= 0`
/// 4. `max(arrival) + sum(burst)` fits in `i64`. No completion tick can
///    exceed that bound, so the simulation arithmetic cannot overflow.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Batch must contain at least one process",
        ));
    }

    for (index, p) in processes.iter().enumerate() {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {index} has non-positive burst time {}",
                    p.burst_time
                ),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {index} has negative arrival time {}",
                    p.arrival_time
                ),
            ));
        }
    }

    if timeline_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time exceeds the representable timeline",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion tick: `max(arrival) + sum(burst)`.
///
/// Negative values are ignored; they are reported separately.
fn timeline_horizon(processes: &[ProcessDescriptor]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time.max(0)))?;
    latest_arrival.checked_add(total_burst)
}

/// Validates a Round-Robin time quantum.
pub fn validate_time_quantum(time_quantum: i64) -> ValidationResult {
    if time_quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {time_quantum}"),
        )]);
    }
    Ok(())
}

/// Validates a batch and, when given, a quantum, merging all problems
/// into a single `InvalidArgument`.
pub(crate) fn check_arguments(
    processes: &[ProcessDescriptor],
    time_quantum: Option<i64>,
) -> Result<()> {
    let mut errors = validate_batch(processes).err().unwrap_or_default();
    if let Some(q) = time_quantum {
        errors.extend(validate_time_quantum(q).err().unwrap_or_default());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::warn!(problems = errors.len(), "rejecting scheduling request");
        Err(SchedError::InvalidArgument(errors))
    }
}
