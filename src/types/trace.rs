//! Reasoning trace and final recommendation records

use serde::{Deserialize, Serialize};

use crate::types::{ActivityMetadata, EvidenceFactor, FilteredActivity};

/// Reported user stress level
///
/// The derivation rule only ever emits High or Moderate; Low stays in the
/// closed set because the template table has a variant for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    High,
    Moderate,
    Low,
}

impl StressLevel {
    /// Template-key suffix for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::High => "high",
            StressLevel::Moderate => "moderate",
            StressLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the inferred user state at recommendation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserState {
    pub stress_level: StressLevel,
    /// Confidence of the stressed decision: 0.0-1.0
    pub confidence: f64,
    /// Evidence sources backing the stress judgment
    pub sources: Vec<String>,
}

/// One surfaced evidence contradiction and how it was resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contradiction {
    pub factor: String,
    pub resolution: String,
}

/// Everything the explanation generator needs for one ranked item
///
/// Ephemeral: built once per output item and discarded after rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningTrace {
    /// Decision label, "Recommend <activity>"
    pub decision: String,
    /// Display-only normalized confidence: min(score/2, 1)
    pub confidence: f64,
    /// Inferred user state; omitted when nothing is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_state: Option<UserState>,
    /// Applied scoring bonuses in evaluation order
    pub factors: Vec<EvidenceFactor>,
    /// Surfaced contradictions
    pub contradictions: Vec<Contradiction>,
    /// Activities the crowd filter excluded (shared across ranked items)
    pub filtered_out: Vec<FilteredActivity>,
}

/// Final output record for one ranked activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub activity: String,
    pub score: f64,
    pub metadata: ActivityMetadata,
    /// 1-based rank
    pub rank: u32,
    /// Full prose explanation
    pub explanation: String,
    /// One-line summary for quick display
    pub summary: String,
    /// Machine-readable reasoning trace
    pub trace: ReasoningTrace,
}
