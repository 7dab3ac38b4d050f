//! Decision records produced by the decision engine

use serde::{Deserialize, Serialize};

use crate::types::Truth;

/// Resolved judgment for one proposition
///
/// Immutable: created fresh on every `decide` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// The proposition this judgment is about
    pub proposition: String,
    /// Four-valued truth outcome
    pub truth: Truth,
    /// Calibrated certainty: 0.0-1.0
    pub confidence: f64,
    /// Human-readable justification
    pub reasoning: String,
}

impl Decision {
    /// Create a new decision
    pub fn new(proposition: &str, truth: Truth, confidence: f64, reasoning: String) -> Self {
        Self {
            proposition: proposition.to_string(),
            truth,
            confidence,
            reasoning,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (conf={:.2})",
            self.proposition, self.truth, self.confidence
        )
    }
}

/// The four user-state decisions the scorer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionSet {
    pub stressed: Decision,
    pub likes_hiking: Decision,
    pub dislikes_crowds: Decision,
    pub prefers_outdoors: Decision,
}

impl DecisionSet {
    /// Iterate decisions in evaluation order, with their role names
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Decision)> {
        [
            ("stressed", &self.stressed),
            ("likes_hiking", &self.likes_hiking),
            ("dislikes_crowds", &self.dislikes_crowds),
            ("prefers_outdoors", &self.prefers_outdoors),
        ]
        .into_iter()
    }
}
