use serde::{Deserialize, Serialize};

/// Categorized, normalized tokens extracted from a clinical report.
///
/// Every token is trimmed, lowercased, deduplicated and sorted within its
/// category. A category with no matches is `None`, never `Some(vec![])`;
/// the serialized form omits absent categories entirely, mirroring the
/// shape the recommendation engine contracts on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnoses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functional_impact: Option<Vec<String>>,
}

impl EntitySet {
    /// Symptom tokens, with an absent category read as empty.
    pub fn symptoms(&self) -> &[String] {
        self.symptoms.as_deref().unwrap_or_default()
    }

    /// Diagnosis tokens, with an absent category read as empty.
    pub fn diagnoses(&self) -> &[String] {
        self.diagnoses.as_deref().unwrap_or_default()
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_none()
            && self.diagnoses.is_none()
            && self.tests.is_none()
            && self.medications.is_none()
            && self.vitals.is_none()
            && self.severity.is_none()
            && self.urgency.is_none()
            && self.functional_impact.is_none()
    }

    /// Total token count across all present categories.
    pub fn token_count(&self) -> usize {
        [
            &self.symptoms,
            &self.diagnoses,
            &self.tests,
            &self.medications,
            &self.vitals,
            &self.severity,
            &self.urgency,
            &self.functional_impact,
        ]
        .iter()
        .filter_map(|category| category.as_ref().map(Vec::len))
        .sum()
    }
}
