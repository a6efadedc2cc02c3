//! Simulation input configuration.
//!
//! A JSON document describing one batch and the policies to run on it:
//!
//! ```json
//! {
//!   "time_quantum": 2,
//!   "policies": [{ "kind": "fcfs" }, { "kind": "round_robin", "time_quantum": 4 }],
//!   "processes": [{ "arrival_time": 0, "burst_time": 5 }]
//! }
//! ```
//!
//! `time_quantum` and `policies` are optional. When `policies` is absent,
//! FCFS, SJF and RR (with `time_quantum`) are all run.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::models::{Policy, ProcessDescriptor};

/// Round-Robin quantum used when none is configured.
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

fn default_time_quantum() -> i64 {
    DEFAULT_TIME_QUANTUM
}

/// A batch plus the policies to evaluate on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Quantum for the default RR policy.
    #[serde(default = "default_time_quantum")]
    pub time_quantum: i64,
    /// Explicit policy list. `None` means all three.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<Policy>>,
    /// The process batch.
    pub processes: Vec<ProcessDescriptor>,
}

impl SimulationConfig {
    /// Creates a config with the default quantum and all policies.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            policies: None,
            processes,
        }
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded simulation config");
        Self::from_json_str(&contents)
    }

    /// Overrides the RR quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Restricts the run to the given policies.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Policies to run, expanding the default.
    pub fn effective_policies(&self) -> Vec<Policy> {
        self.policies
            .clone()
            .unwrap_or_else(|| Policy::all(self.time_quantum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedError;

    #[test]
    fn test_parse_minimal() {
        let cfg = SimulationConfig::from_json_str(
            r#"{ "processes": [{ "arrival_time": 0, "burst_time": 5 }, { "arrival_time": 1, "burst_time": 3 }] }"#,
        )
        .unwrap();
        assert_eq!(cfg.time_quantum, DEFAULT_TIME_QUANTUM);
        assert_eq!(cfg.processes.len(), 2);
        assert_eq!(cfg.processes[1], ProcessDescriptor::new(1, 3));
        assert_eq!(cfg.effective_policies(), Policy::all(DEFAULT_TIME_QUANTUM));
    }

    #[test]
    fn test_parse_explicit_policies() {
        let cfg = SimulationConfig::from_json_str(
            r#"{
                "time_quantum": 8,
                "policies": [{ "kind": "sjf" }, { "kind": "round_robin", "time_quantum": 3 }],
                "processes": [{ "arrival_time": 0, "burst_time": 1 }]
            }"#,
        )
        .unwrap();
        assert_eq!(
            cfg.effective_policies(),
            vec![Policy::Sjf, Policy::RoundRobin { time_quantum: 3 }]
        );
    }

    #[test]
    fn test_builder_overrides() {
        let cfg = SimulationConfig::new(vec![ProcessDescriptor::new(0, 1)]).with_time_quantum(5);
        assert_eq!(cfg.effective_policies()[2], Policy::RoundRobin { time_quantum: 5 });

        let cfg = cfg.with_policies(vec![Policy::Fcfs]);
        assert_eq!(cfg.effective_policies(), vec![Policy::Fcfs]);
    }

    #[test]
    fn test_malformed_json() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SchedError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_path("/nonexistent/u-procsched/batch.json").unwrap_err();
        assert!(matches!(err, SchedError::Io(_)));
    }

    #[test]
    fn test_serde_roundtrip_omits_default_policies() {
        let cfg = SimulationConfig::new(vec![ProcessDescriptor::new(2, 4)]);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("policies"));
        assert_eq!(SimulationConfig::from_json_str(&json).unwrap(), cfg);
    }
}
