use std::collections::HashSet;

use crate::pipeline::entities::EntitySet;
use crate::rules::{RuleStore, Urgency};

use super::types::{Recommendation, MATCH_CONFIDENCE, MIN_CONFIDENCE, SUPPRESSED_CONFIDENCE};

/// Evaluate every rule against an entity set.
///
/// Pure function: no hidden state, no randomness, no time-dependence.
/// Rules are visited in store order and each contributes at most one
/// recommendation:
///
/// - symptoms matched, no contraindication: the rule's declared urgency;
/// - any contraindication present in the diagnoses: urgency forced to
///   `not_recommended` with suppressed confidence, even when symptoms
///   also matched;
/// - neither: silence, not a zero-confidence record.
///
/// Matching is case-insensitive; matched token lists keep the rule's
/// declared order.
pub fn evaluate(entities: &EntitySet, rules: &RuleStore) -> Vec<Recommendation> {
    let symptoms = normalized_set(entities.symptoms());
    let diagnoses = normalized_set(entities.diagnoses());

    let mut recommendations = Vec::new();
    for (test, rule) in rules.iter() {
        let matched_symptoms = overlap(&rule.symptoms, &symptoms);
        let contraindicated = overlap(&rule.contraindications, &diagnoses);
        let confidence = if matched_symptoms.is_empty() {
            SUPPRESSED_CONFIDENCE
        } else {
            MATCH_CONFIDENCE
        };

        if !matched_symptoms.is_empty() && contraindicated.is_empty() && confidence >= MIN_CONFIDENCE
        {
            recommendations.push(Recommendation {
                test: test.to_string(),
                reason: format!("Matched symptoms: {}", matched_symptoms.join(", ")),
                contraindications: contraindicated,
                confidence,
                urgency: rule.urgency.clone(),
                explanation: None,
            });
        } else if !contraindicated.is_empty() {
            // Contraindication always overrides a symptom match.
            recommendations.push(Recommendation {
                test: test.to_string(),
                reason: format!("Contraindication present: {}", contraindicated.join(", ")),
                contraindications: contraindicated,
                confidence: SUPPRESSED_CONFIDENCE,
                urgency: Urgency::NotRecommended,
                explanation: None,
            });
        }
    }
    recommendations
}

fn normalized_set(tokens: &[String]) -> HashSet<String> {
    tokens
        .iter()
        .map(|token| token.trim().to_lowercase())
        .collect()
}

/// Rule tokens present in the entity set, in the rule's declared order.
fn overlap(rule_tokens: &[String], entity_tokens: &HashSet<String>) -> Vec<String> {
    rule_tokens
        .iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| entity_tokens.contains(token))
        .collect()
}
