//! Evidence records and the proposition → evidence lookup table

use serde::{Deserialize, Serialize};

use crate::types::Truth;

/// One piece of weighted evidence about a proposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    /// Where this evidence came from (sensor, survey, history, ...)
    pub source: String,
    /// What the source claims
    pub belief: Truth,
    /// How much the source counts: 0.0-1.0
    pub weight: f64,
}

impl Evidence {
    /// Create new evidence
    pub fn new(source: &str, belief: Truth, weight: f64) -> Self {
        Self {
            source: source.to_string(),
            belief,
            weight,
        }
    }
}

/// All evidence recorded for one named proposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropositionEvidence {
    /// Proposition name, e.g. "Stressed(User)"
    pub proposition: String,
    /// Evidence in insertion order (significant for display only)
    pub evidence: Vec<Evidence>,
}

/// Static proposition → evidence lookup table
///
/// Loaded once, never mutated afterwards. Entry order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceStore {
    entries: Vec<PropositionEvidence>,
}

impl EvidenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a proposition with its evidence list (build-time only)
    pub fn insert(&mut self, proposition: &str, evidence: Vec<Evidence>) {
        self.entries.push(PropositionEvidence {
            proposition: proposition.to_string(),
            evidence,
        });
    }

    /// Look up the evidence for a proposition
    pub fn get(&self, proposition: &str) -> Option<&[Evidence]> {
        self.entries
            .iter()
            .find(|e| e.proposition == proposition)
            .map(|e| e.evidence.as_slice())
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PropositionEvidence> {
        self.entries.iter()
    }

    /// Number of propositions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
