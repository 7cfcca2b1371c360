//! Risk ratio — incidence rate of a behavioral event in a target demographic
//! subgroup relative to all other students.
//!
//! Two-pass structure: filter the incident log into a distinct
//! affected-student set, then partition the roster in one scan with O(1)
//! membership tests against that set.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::config::EquityConfig;
use crate::types::{Incident, RiskRatio, RiskRatioReport, Student, StudentId};

/// Compute the risk ratio for the subgroup where `group_attribute` equals
/// `target_value`, counting students with at least one incident of
/// `event_type`. The statistic is per-student, not per-incident: multiple
/// qualifying incidents for one student count once.
///
/// The comparison group is the complement of the target group within the
/// same roster, not a second named category. Swapping which value plays the
/// target role does not simply invert the ratio unless the two definitions
/// are true complements of each other.
///
/// Purely functional: no mutation, no I/O, never errors. Incidents
/// referencing students absent from the roster contribute to neither group;
/// a `group_attribute` absent from a record is a non-match for that record.
pub fn compute(
    roster: &[Student],
    incidents: &[Incident],
    group_attribute: &str,
    target_value: &str,
    event_type: &str,
) -> RiskRatio {
    compute_report(roster, incidents, group_attribute, target_value, event_type).ratio
}

/// Same scan as [`compute`], returning the full per-group breakdown.
pub fn compute_report(
    roster: &[Student],
    incidents: &[Incident],
    group_attribute: &str,
    target_value: &str,
    event_type: &str,
) -> RiskRatioReport {
    // Pass 1: distinct students with at least one qualifying incident.
    let affected: FxHashSet<&StudentId> = incidents
        .iter()
        .filter(|incident| incident.behavior_type == event_type)
        .map(|incident| &incident.student_id)
        .collect();

    // Pass 2: partition the roster and count affected members per side.
    let mut target_population = 0usize;
    let mut comparison_population = 0usize;
    let mut target_affected = 0usize;
    let mut comparison_affected = 0usize;

    for student in roster {
        let hit = affected.contains(&student.id);
        if student.matches(group_attribute, target_value) {
            target_population += 1;
            if hit {
                target_affected += 1;
            }
        } else {
            comparison_population += 1;
            if hit {
                comparison_affected += 1;
            }
        }
    }

    let ratio = ratio_from_counts(
        target_population,
        comparison_population,
        target_affected,
        comparison_affected,
    );

    debug!(
        target_population,
        comparison_population,
        target_affected,
        comparison_affected,
        %ratio,
        "computed risk ratio"
    );

    RiskRatioReport {
        group_attribute: group_attribute.to_string(),
        target_value: target_value.to_string(),
        event_type: event_type.to_string(),
        target_population,
        comparison_population,
        target_affected,
        comparison_affected,
        ratio,
    }
}

/// Outcome policy: an empty partition is undefined; a zero comparison risk
/// is positive infinity, including the case where no one in either group has
/// the incident; everything else is the finite rate ratio.
fn ratio_from_counts(
    target_population: usize,
    comparison_population: usize,
    target_affected: usize,
    comparison_affected: usize,
) -> RiskRatio {
    if target_population == 0 || comparison_population == 0 {
        return RiskRatio::Undefined;
    }

    let target_risk = target_affected as f64 / target_population as f64;
    let comparison_risk = comparison_affected as f64 / comparison_population as f64;

    if comparison_risk == 0.0 {
        return RiskRatio::Infinite;
    }

    RiskRatio::Finite(target_risk / comparison_risk)
}

/// Entry point carrying configuration. Falls back to the configured default
/// event type when the caller does not name one.
#[derive(Debug, Clone, Default)]
pub struct RiskRatioCalculator {
    config: EquityConfig,
}

impl RiskRatioCalculator {
    pub fn new(config: EquityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// [`compute`] with the configured default event type when `event_type`
    /// is `None`.
    pub fn compute(
        &self,
        roster: &[Student],
        incidents: &[Incident],
        group_attribute: &str,
        target_value: &str,
        event_type: Option<&str>,
    ) -> RiskRatio {
        self.compute_report(roster, incidents, group_attribute, target_value, event_type)
            .ratio
    }

    /// [`compute_report`] with the configured default event type when
    /// `event_type` is `None`.
    pub fn compute_report(
        &self,
        roster: &[Student],
        incidents: &[Incident],
        group_attribute: &str,
        target_value: &str,
        event_type: Option<&str>,
    ) -> RiskRatioReport {
        let event_type = event_type.unwrap_or_else(|| self.config.effective_default_event_type());
        compute_report(roster, incidents, group_attribute, target_value, event_type)
    }
}
