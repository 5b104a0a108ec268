use std::collections::BTreeSet;

use super::patterns::{
    DIAGNOSIS_PATTERN, FUNCTIONAL_IMPACT_PATTERN, MEDICATION_PATTERN, SEVERITY_PATTERN,
    SYMPTOM_PATTERN, TEST_PATTERN, URGENCY_PATTERN, VITAL_PATTERN,
};
use super::types::EntitySet;

/// Extract a categorized entity set from sanitized report text.
///
/// Pure function over the text: tokens are normalized, deduplicated and
/// sorted per category, and categories with no matches stay absent.
pub fn extract_entities(text: &str) -> EntitySet {
    let symptoms = collect_matches(&SYMPTOM_PATTERN, text);
    let diagnoses = collect_matches(&DIAGNOSIS_PATTERN, text);
    let tests = collect_matches(&TEST_PATTERN, text);
    let medications = collect_matches(&MEDICATION_PATTERN, text);
    let vitals = collect_matches(&VITAL_PATTERN, text);
    let urgency = collect_matches(&URGENCY_PATTERN, text);
    let functional_impact = collect_matches(&FUNCTIONAL_IMPACT_PATTERN, text);

    // Severity phrases re-join the qualifier and its context word.
    let mut severity = BTreeSet::new();
    for caps in SEVERITY_PATTERN.captures_iter(text) {
        severity.insert(format!(
            "{} {}",
            normalize_token(&caps[1]),
            normalize_token(&caps[2])
        ));
    }

    EntitySet {
        symptoms: into_category(symptoms),
        diagnoses: into_category(diagnoses),
        tests: into_category(tests),
        medications: into_category(medications),
        vitals: into_category(vitals),
        severity: into_category(severity),
        urgency: into_category(urgency),
        functional_impact: into_category(functional_impact),
    }
}

fn collect_matches(pattern: &regex::Regex, text: &str) -> BTreeSet<String> {
    pattern
        .find_iter(text)
        .map(|m| normalize_token(m.as_str()))
        .collect()
}

fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn into_category(tokens: BTreeSet<String>) -> Option<Vec<String>> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
Patient presents with severe pain and swelling of the right knee.\n\
History: hypertension, managed with lisinopril. Prior MRI unremarkable.\n\
BP: 140/90 mmHg. Patient reports limited mobility since the fall.\n\
Urgent follow-up advised.";

    #[test]
    fn extracts_all_matching_categories() {
        let entities = extract_entities(SAMPLE_REPORT);
        assert_eq!(
            entities.symptoms,
            Some(vec!["pain".into(), "swelling".into()])
        );
        assert_eq!(entities.diagnoses, Some(vec!["hypertension".into()]));
        assert_eq!(entities.tests, Some(vec!["mri".into()]));
        assert_eq!(entities.medications, Some(vec!["lisinopril".into()]));
        assert_eq!(entities.severity, Some(vec!["severe pain".into()]));
        assert_eq!(entities.urgency, Some(vec!["urgent".into()]));
        assert_eq!(
            entities.functional_impact,
            Some(vec!["limited mobility".into()])
        );
    }

    #[test]
    fn unmatched_categories_stay_absent() {
        let entities = extract_entities("Routine checkup, no findings.");
        assert!(entities.symptoms.is_none());
        assert!(entities.diagnoses.is_none());
        assert!(entities.medications.is_none());
        // "routine" is an urgency token.
        assert_eq!(entities.urgency, Some(vec!["routine".into()]));
    }

    #[test]
    fn empty_text_yields_empty_entity_set() {
        assert!(extract_entities("").is_empty());
    }

    #[test]
    fn tokens_are_lowercased_and_deduplicated() {
        let entities = extract_entities("PAIN, pain, Pain everywhere");
        assert_eq!(entities.symptoms, Some(vec!["pain".into()]));
    }

    #[test]
    fn tokens_are_sorted_within_a_category() {
        let entities = extract_entities("swelling, then fever, then cough");
        assert_eq!(
            entities.symptoms,
            Some(vec!["cough".into(), "fever".into(), "swelling".into()])
        );
    }

    #[test]
    fn vitals_capture_reading_lines() {
        let entities = extract_entities("BP: 120/80 mmHg recorded at triage");
        let vitals = entities.vitals.expect("vitals should be present");
        assert!(vitals[0].starts_with("bp: 120/80"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = extract_entities(SAMPLE_REPORT);
        let second = extract_entities(SAMPLE_REPORT);
        assert_eq!(first, second);
    }
}
