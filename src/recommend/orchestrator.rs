use crate::pipeline::entities::EntitySet;
use crate::rules::RuleStore;

use super::engine::evaluate;
use super::types::{Recommendation, MIN_CONFIDENCE};

/// Evaluate the rule table and produce the final recommendation list.
///
/// On top of `evaluate` this applies the boundary contract: low-confidence
/// records (including contraindication suppressions) are dropped, and
/// every surviving recommendation gets its explanation sentence.
pub fn recommend_tests(entities: &EntitySet, rules: &RuleStore) -> Vec<Recommendation> {
    evaluate(entities, rules)
        .into_iter()
        .filter(|rec| rec.confidence >= MIN_CONFIDENCE)
        .map(|mut rec| {
            rec.explanation = Some(explain(&rec));
            rec
        })
        .collect()
}

fn explain(rec: &Recommendation) -> String {
    let contraindications = if rec.contraindications.is_empty() {
        "None".to_string()
    } else {
        rec.contraindications.join(", ")
    };
    format!(
        "Recommended {} because: {}. Contraindications: {}. Confidence: {}. Urgency: {}.",
        rec.test,
        rec.reason,
        contraindications,
        rec.confidence,
        rec.urgency.display_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mri_store() -> RuleStore {
        RuleStore::from_json(
            r#"{"MRI": {"symptoms": ["pain", "swelling"], "contraindications": ["pacemaker"], "urgency": "urgent"}}"#,
        )
        .unwrap()
    }

    fn entities(symptoms: &[&str], diagnoses: &[&str]) -> EntitySet {
        EntitySet {
            symptoms: if symptoms.is_empty() {
                None
            } else {
                Some(symptoms.iter().map(|s| s.to_string()).collect())
            },
            diagnoses: if diagnoses.is_empty() {
                None
            } else {
                Some(diagnoses.iter().map(|d| d.to_string()).collect())
            },
            ..Default::default()
        }
    }

    #[test]
    fn accepted_recommendation_carries_full_explanation() {
        let recs = recommend_tests(&entities(&["pain"], &[]), &mri_store());
        assert_eq!(recs.len(), 1);
        assert_eq!(
            recs[0].explanation.as_deref(),
            Some(
                "Recommended MRI because: Matched symptoms: pain. \
                 Contraindications: None. Confidence: 0.95. Urgency: Urgent."
            )
        );
    }

    #[test]
    fn low_confidence_records_never_reach_the_caller() {
        // The contraindication record exists at the engine layer with
        // confidence 0.1; the boundary filter removes it.
        let recs = recommend_tests(&entities(&["pain"], &["pacemaker"]), &mri_store());
        assert!(recs.is_empty());
    }

    #[test]
    fn confidence_gate_holds_across_the_default_table() {
        let store = RuleStore::defaults();
        let recs = recommend_tests(
            &entities(&["pain", "headache", "fracture"], &["pregnancy", "pacemaker"]),
            &store,
        );
        assert!(recs.iter().all(|rec| rec.confidence >= MIN_CONFIDENCE));
        // MRI (pacemaker) and CT scan (pregnancy) are both suppressed;
        // only X-ray survives.
        let tests: Vec<&str> = recs.iter().map(|r| r.test.as_str()).collect();
        assert_eq!(tests, vec!["X-ray"]);
    }

    #[test]
    fn empty_result_is_a_normal_outcome() {
        let recs = recommend_tests(&EntitySet::default(), &RuleStore::defaults());
        assert!(recs.is_empty());
    }

    #[test]
    fn explanation_passes_unknown_urgency_through() {
        let store = RuleStore::from_json(
            r#"{"ECG": {"symptoms": ["pain"], "urgency": "triage"}}"#,
        )
        .unwrap();
        let recs = recommend_tests(&entities(&["pain"], &[]), &store);
        assert_eq!(recs.len(), 1);
        assert!(recs[0]
            .explanation
            .as_deref()
            .unwrap()
            .ends_with("Urgency: triage."));
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let store = RuleStore::defaults();
        let input = entities(&["swelling"], &[]);
        let first = serde_json::to_string(&recommend_tests(&input, &store)).unwrap();
        let second = serde_json::to_string(&recommend_tests(&input, &store)).unwrap();
        assert_eq!(first, second);
    }
}
