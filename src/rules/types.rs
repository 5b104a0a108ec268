use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Urgency level declared by a clinical rule.
///
/// The four known levels form a closed set; anything else coming from an
/// external rule source is carried through `Other` unchanged so that a
/// newer rule file never gets its labels rewritten by an older binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    Routine,
    Urgent,
    Emergent,
    NotRecommended,
    /// Unrecognized level from the rule source, passed through as-is.
    Other(String),
}

impl Urgency {
    /// Wire token used in serialized recommendations and rule files.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
            Self::Emergent => "emergent",
            Self::NotRecommended => "not_recommended",
            Self::Other(label) => label,
        }
    }

    /// Titlecased form used in patient-facing explanation sentences.
    pub fn display_label(&self) -> &str {
        match self {
            Self::Routine => "Routine",
            Self::Urgent => "Urgent",
            Self::Emergent => "Emergent",
            Self::NotRecommended => "Not Recommended",
            Self::Other(label) => label,
        }
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Self::Routine
    }
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "routine" => Self::Routine,
            "urgent" => Self::Urgent,
            "emergent" => Self::Emergent,
            // Legacy rule files spell this with a space.
            "not_recommended" | "not recommended" => Self::NotRecommended,
            _ => Self::Other(value),
        }
    }
}

impl From<Urgency> for String {
    fn from(value: Urgency) -> Self {
        value.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// Matching criteria for one diagnostic test.
///
/// Tokens keep their source casing; matchers lowercase them before
/// comparison (matching is case-insensitive by contract, not by storage).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// Symptoms that argue for this test, in declared order.
    pub symptoms: Vec<String>,
    /// Diagnosed conditions that suppress this test, in declared order.
    pub contraindications: Vec<String>,
    pub urgency: Urgency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_tokens_round_trip() {
        for token in ["routine", "urgent", "emergent", "not_recommended"] {
            let urgency = Urgency::from(token.to_string());
            assert_eq!(urgency.as_str(), token);
        }
    }

    #[test]
    fn urgency_unknown_passes_through() {
        let urgency = Urgency::from("stat".to_string());
        assert_eq!(urgency, Urgency::Other("stat".into()));
        assert_eq!(urgency.as_str(), "stat");
        assert_eq!(urgency.display_label(), "stat");
    }

    #[test]
    fn urgency_legacy_spelling_maps_to_not_recommended() {
        let urgency = Urgency::from("not recommended".to_string());
        assert_eq!(urgency, Urgency::NotRecommended);
        assert_eq!(urgency.as_str(), "not_recommended");
    }

    #[test]
    fn urgency_display_labels() {
        assert_eq!(Urgency::Routine.display_label(), "Routine");
        assert_eq!(Urgency::Urgent.display_label(), "Urgent");
        assert_eq!(Urgency::Emergent.display_label(), "Emergent");
        assert_eq!(Urgency::NotRecommended.display_label(), "Not Recommended");
    }

    #[test]
    fn urgency_serializes_as_token() {
        let json = serde_json::to_string(&Urgency::NotRecommended).unwrap();
        assert_eq!(json, "\"not_recommended\"");
        let json = serde_json::to_string(&Urgency::Other("triage".into())).unwrap();
        assert_eq!(json, "\"triage\"");
    }

    #[test]
    fn rule_missing_keys_default() {
        let rule: Rule = serde_json::from_str("{}").unwrap();
        assert!(rule.symptoms.is_empty());
        assert!(rule.contraindications.is_empty());
        assert_eq!(rule.urgency, Urgency::Routine);
    }

    #[test]
    fn rule_deserializes_full_shape() {
        let rule: Rule = serde_json::from_str(
            r#"{"symptoms": ["Pain", "swelling"], "contraindications": ["pacemaker"], "urgency": "urgent"}"#,
        )
        .unwrap();
        assert_eq!(rule.symptoms, vec!["Pain", "swelling"]);
        assert_eq!(rule.contraindications, vec!["pacemaker"]);
        assert_eq!(rule.urgency, Urgency::Urgent);
    }
}
