//! Equity analytics: risk ratio computation over a student roster and a
//! behavioral incident log.
//!
//! The risk ratio compares the incidence rate of an event type between a
//! target demographic subgroup and the complement of that subgroup within
//! the same population. A ratio above 1.0 indicates over-representation of
//! the target group among affected students relative to its population
//! share.
//!
//! The computation is stateless and side-effect-free; concurrent calls over
//! shared input snapshots need no coordination.

pub mod config;
pub mod errors;
pub mod risk_ratio;
pub mod types;

pub use config::{EquityConfig, DEFAULT_EVENT_TYPE};
pub use errors::ConfigError;
pub use risk_ratio::{compute, compute_report, RiskRatioCalculator};
pub use types::{Incident, IncidentId, RiskRatio, RiskRatioReport, Student, StudentId};
