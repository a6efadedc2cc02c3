//! CPU-scheduling domain models.
//!
//! Provides the data types shared by every policy: the input process
//! descriptors, the finished timeline, and the aggregate metrics.
//!
//! # Lifecycle
//!
//! | Type | Owner | Visible to caller |
//! |------|-------|-------------------|
//! | `ProcessDescriptor` | caller | yes (read-only to schedulers) |
//! | `ProcessRun` | one scheduler call | no |
//! | `ProcessOutcome`, `Slice`, `Schedule` | caller | yes |
//! | `Metrics` | caller | yes |

mod metrics;
mod policy;
mod process;
mod schedule;

pub use metrics::Metrics;
pub use policy::Policy;
pub(crate) use process::ProcessRun;
pub use process::{ProcessDescriptor, ProcessOutcome};
pub use schedule::{Schedule, Slice};
