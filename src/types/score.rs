//! Scoring result records with itemized factor breakdown

use serde::{Deserialize, Serialize};

use crate::types::ActivityMetadata;

/// One scoring bonus that was actually applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceFactor {
    /// Human-readable factor label, e.g. "stress relief potential"
    pub factor: String,
    /// The activity attribute that drove the bonus
    pub value: f64,
    /// Static weight of this factor in the scoring model
    pub weight: f64,
    /// Actual score contribution
    pub contribution: f64,
}

impl EvidenceFactor {
    /// Create a new factor record
    pub fn new(factor: &str, value: f64, weight: f64, contribution: f64) -> Self {
        Self {
            factor: factor.to_string(),
            value,
            weight,
            contribution,
        }
    }
}

/// An activity that passed the crowd filter, with its score breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredActivity {
    pub activity: String,
    pub score: f64,
    pub metadata: ActivityMetadata,
    /// Applied bonuses in evaluation order
    pub factors: Vec<EvidenceFactor>,
}

/// An activity the crowd filter excluded, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredActivity {
    pub activity: String,
    pub reason: String,
}
