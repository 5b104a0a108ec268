use serde::{Deserialize, Serialize};

use crate::rules::Urgency;

/// Confidence assigned when at least one required symptom matches.
///
/// The two-point confidence policy (0.95 / 0.1) is an accept/suppress
/// gate, not a graded ranking; see the confidence threshold below.
pub const MATCH_CONFIDENCE: f64 = 0.95;

/// Confidence assigned when no symptom matches or a contraindication fires.
pub const SUPPRESSED_CONFIDENCE: f64 = 0.1;

/// Recommendations below this confidence never reach the caller.
pub const MIN_CONFIDENCE: f64 = 0.5;

/// A scored, explained suggestion to perform one diagnostic test.
///
/// Transient output value; persistence, if any, belongs to the audit
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub test: String,
    /// Why the rule fired: matched symptoms or the contraindication found.
    pub reason: String,
    /// Contraindicating diagnoses present in the entity set, in the
    /// rule's declared order.
    pub contraindications: Vec<String>,
    /// In [0, 1]; binary under the current policy.
    pub confidence: f64,
    pub urgency: Urgency,
    /// Patient-facing sentence, attached by the orchestration layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_per_boundary_contract() {
        let rec = Recommendation {
            test: "MRI".into(),
            reason: "Matched symptoms: pain".into(),
            contraindications: vec![],
            confidence: MATCH_CONFIDENCE,
            urgency: Urgency::Urgent,
            explanation: Some("Recommended MRI because: Matched symptoms: pain.".into()),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["test"], "MRI");
        assert_eq!(json["confidence"], 0.95);
        assert_eq!(json["urgency"], "urgent");
        assert!(json["explanation"].is_string());
    }

    #[test]
    fn explanation_is_omitted_until_attached() {
        let rec = Recommendation {
            test: "MRI".into(),
            reason: "Matched symptoms: pain".into(),
            contraindications: vec![],
            confidence: MATCH_CONFIDENCE,
            urgency: Urgency::Urgent,
            explanation: None,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("explanation"));
    }
}
