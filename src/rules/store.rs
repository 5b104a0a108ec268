use std::collections::HashMap;
use std::path::Path;

use super::types::{Rule, Urgency};
use super::ConfigurationError;

/// Immutable, ordered table of clinical rules keyed by test name.
///
/// Iteration order is the insertion order of the loaded rule source, which
/// makes engine output deterministic and caller-controllable: reordering
/// the rule file reorders the recommendations. Hot reload is an atomic
/// swap done by the caller (build a fresh store, swap the `Arc`); the
/// store itself is never mutated after load.
#[derive(Debug)]
pub struct RuleStore {
    entries: Vec<(String, Rule)>,
    index: HashMap<String, usize>,
}

impl RuleStore {
    /// Load rules from an optional external source.
    ///
    /// An absent or unreadable source falls back to the built-in default
    /// table so the engine is never left without rules. A source that is
    /// found and readable but malformed is a hard `ConfigurationError`;
    /// the caller decides whether to fall back or abort.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let Some(path) = path else {
            return Ok(Self::defaults());
        };
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Rule source unreadable, using default rule table"
                );
                return Ok(Self::defaults());
            }
        };
        let store = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            rules = store.len(),
            "Loaded clinical rule table"
        );
        Ok(store)
    }

    /// Parse a rule table from a JSON document keyed by test name.
    pub fn from_json(raw: &str) -> Result<Self, ConfigurationError> {
        let doc: serde_json::Value = serde_json::from_str(raw)
            .map_err(|err| ConfigurationError::InvalidJson(err.to_string()))?;
        let serde_json::Value::Object(map) = doc else {
            return Err(ConfigurationError::NotAnObject);
        };
        let mut entries = Vec::with_capacity(map.len());
        for (test, value) in map {
            let rule: Rule = serde_json::from_value(value).map_err(|err| {
                ConfigurationError::InvalidRule {
                    test: test.clone(),
                    message: err.to_string(),
                }
            })?;
            entries.push((test, rule));
        }
        Ok(Self::from_entries(entries))
    }

    /// Built-in fallback table used when no external source is configured.
    pub fn defaults() -> Self {
        Self::from_entries(vec![
            (
                "MRI".into(),
                Rule {
                    symptoms: vec!["pain".into(), "swelling".into()],
                    contraindications: vec!["pacemaker".into()],
                    urgency: Urgency::Urgent,
                },
            ),
            (
                "CT scan".into(),
                Rule {
                    symptoms: vec!["headache".into(), "stroke".into()],
                    contraindications: vec!["pregnancy".into()],
                    urgency: Urgency::Routine,
                },
            ),
            (
                "X-ray".into(),
                Rule {
                    symptoms: vec!["fracture".into(), "swelling".into()],
                    contraindications: vec![],
                    urgency: Urgency::Routine,
                },
            ),
        ])
    }

    fn from_entries(entries: Vec<(String, Rule)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (test, _))| (test.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Look up a rule by its case-sensitive test name.
    pub fn get(&self, test: &str) -> Option<&Rule> {
        self.index.get(test).map(|&i| &self.entries[i].1)
    }

    /// Iterate rules in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(test, rule)| (test.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
