use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome of a single access check for one verb on one resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessOutcome {
    #[serde(rename = "allowed")]
    Allowed,
    #[serde(rename = "denied")]
    Denied,
    #[default]
    #[serde(rename = "n/a")]
    NotApplicable,
    #[serde(rename = "err")]
    RequestError,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub name: String,
    #[serde(default)]
    pub access: HashMap<String, AccessOutcome>,
}

impl ResultRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: HashMap::new(),
        }
    }

    pub fn with(mut self, outcome: AccessOutcome, verbs: &[&str]) -> Self {
        for verb in verbs {
            self.access.insert(verb.to_string(), outcome);
        }
        self
    }

    /// Outcome recorded for `verb`, `NotApplicable` when it was never checked.
    pub fn outcome(&self, verb: &str) -> AccessOutcome {
        self.access.get(verb).copied().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullResult {
    pub items: Vec<ResultRow>,
}

impl FullResult {
    /// Keeps only the rows allowed for at least one of `verbs`.
    pub fn hide_forbidden(&mut self, verbs: &[String]) {
        self.items.retain(|row| {
            verbs
                .iter()
                .any(|v| row.outcome(v) == AccessOutcome::Allowed)
        });
    }
}
