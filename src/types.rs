//! Core types: roster records, incident records, and the risk ratio outcome.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Opaque student identifier. Compared for equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque incident identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(String);

impl IncidentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IncidentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for IncidentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roster record: one student with demographic attributes.
///
/// `id` is unique within a roster; the computation treats the roster as a
/// set of records, order irrelevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// Demographic attribute name → category value (e.g. "Ethnicity" → "GroupA").
    #[serde(default)]
    pub attributes: FxHashMap<String, String>,
}

impl Student {
    pub fn new(id: impl Into<StudentId>) -> Self {
        Self {
            id: id.into(),
            attributes: FxHashMap::default(),
        }
    }

    /// Builder-style attribute assignment for fixtures and callers.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Category value for a demographic attribute, if the record carries it.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether this record belongs to `value` under `attribute`.
    /// A missing attribute is a non-match, never an error.
    pub fn matches(&self, attribute: &str, value: &str) -> bool {
        self.attribute(attribute) == Some(value)
    }
}

/// An incident log record. `student_id` need not be unique across the log —
/// a student may have multiple incidents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub student_id: StudentId,
    /// Behavior category label (e.g. "Suspension", "Tardy").
    pub behavior_type: String,
}

impl Incident {
    pub fn new(
        id: impl Into<IncidentId>,
        student_id: impl Into<StudentId>,
        behavior_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            behavior_type: behavior_type.into(),
        }
    }
}

/// Outcome of a risk ratio computation.
///
/// Abnormal conditions are encoded in the outcome domain rather than raised
/// as errors: callers must branch on the variant before using the value
/// arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskRatio {
    /// Either the target or the comparison partition has zero members.
    /// The only case distinguishable from a genuine zero ratio.
    Undefined,
    /// The comparison group's risk is exactly zero — including the case
    /// where the target group's risk is also zero.
    Infinite,
    /// target_risk / comparison_risk. May be below, at, or above 1.0.
    Finite(f64),
}

impl RiskRatio {
    /// The numeric ratio, when one exists.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Undefined | Self::Infinite => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// A ratio above 1.0 indicates over-representation of the target group
    /// among affected students relative to its population share.
    pub fn signals_overrepresentation(&self) -> bool {
        match self {
            Self::Infinite => true,
            Self::Finite(v) => *v > 1.0,
            Self::Undefined => false,
        }
    }
}

impl fmt::Display for RiskRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Infinite => f.write_str("inf"),
            Self::Finite(v) => write!(f, "{v}"),
        }
    }
}

/// Full breakdown behind a risk ratio: partition sizes, affected counts per
/// side, and the outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRatioReport {
    pub group_attribute: String,
    pub target_value: String,
    pub event_type: String,
    pub target_population: usize,
    pub comparison_population: usize,
    /// Target-group students with at least one qualifying incident.
    pub target_affected: usize,
    /// Comparison-group students with at least one qualifying incident.
    pub comparison_affected: usize,
    pub ratio: RiskRatio,
}

impl RiskRatioReport {
    /// Fraction of the target group with at least one qualifying incident.
    /// `None` when the group is empty.
    pub fn target_risk(&self) -> Option<f64> {
        risk(self.target_affected, self.target_population)
    }

    /// Fraction of the comparison group with at least one qualifying
    /// incident. `None` when the group is empty.
    pub fn comparison_risk(&self) -> Option<f64> {
        risk(self.comparison_affected, self.comparison_population)
    }
}

fn risk(affected: usize, population: usize) -> Option<f64> {
    if population == 0 {
        None
    } else {
        Some(affected as f64 / population as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_is_non_match() {
        let student = Student::new("S1").with_attribute("Ethnicity", "GroupA");
        assert!(student.matches("Ethnicity", "GroupA"));
        assert!(!student.matches("Ethnicity", "GroupB"));
        assert!(!student.matches("SEN_Status", "Yes"));
    }

    #[test]
    fn test_overrepresentation_signal() {
        assert!(RiskRatio::Infinite.signals_overrepresentation());
        assert!(RiskRatio::Finite(3.0).signals_overrepresentation());
        assert!(!RiskRatio::Finite(1.0).signals_overrepresentation());
        assert!(!RiskRatio::Finite(0.5).signals_overrepresentation());
        assert!(!RiskRatio::Undefined.signals_overrepresentation());
    }

    #[test]
    fn test_outcome_serialization_shape() {
        let json = serde_json::to_value(RiskRatio::Finite(3.0)).unwrap();
        assert_eq!(json["kind"], "finite");
        assert_eq!(json["value"], 3.0);

        let json = serde_json::to_value(RiskRatio::Undefined).unwrap();
        assert_eq!(json["kind"], "undefined");

        let back: RiskRatio = serde_json::from_value(json).unwrap();
        assert_eq!(back, RiskRatio::Undefined);
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskRatio::Undefined.to_string(), "undefined");
        assert_eq!(RiskRatio::Infinite.to_string(), "inf");
        assert_eq!(RiskRatio::Finite(1.5).to_string(), "1.5");
    }
}
