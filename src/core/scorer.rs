//! Activity filtering and additive scoring
//!
//! Filter: crowdiness > adaptive threshold → excluded, never scored.
//! Score: 0.5 base + independent bonuses, each recorded as a factor:
//! - stress relief (0.4) when stressed is True above 0.7 confidence
//! - outdoor (0.3) when prefers_outdoors is True
//! - physical (0.2) when likes_hiking is True and physical > 0.5,
//!   or a flat 0.05 when hiking evidence is contradictory

use std::cmp::Ordering;

use crate::types::{
    ActivityStore, DecisionSet, EvidenceFactor, FilteredActivity, ScoredActivity, Truth,
};
use crate::{
    BASE_SCORE, CONTRADICTION_FALLBACK_BONUS, CROWD_BASE_THRESHOLD, CROWD_CONFIDENCE_SPAN,
    OUTDOOR_WEIGHT, PHYSICAL_ACTIVITY_THRESHOLD, PHYSICAL_WEIGHT, STRESS_BONUS_MIN_CONFIDENCE,
    STRESS_RELIEF_WEIGHT,
};

/// Filter-and-score stage of the pipeline
#[derive(Debug, Default)]
pub struct ActivityFilterScorer;

impl ActivityFilterScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Adaptive crowd threshold: narrows from 0.5 toward 0.2 as the
    /// crowd-dislike confidence approaches 1
    pub fn crowd_threshold(&self, dislike_confidence: f64) -> f64 {
        CROWD_BASE_THRESHOLD - dislike_confidence * CROWD_CONFIDENCE_SPAN
    }

    /// Filter all activities against the crowd threshold and score the
    /// survivors. Returns (survivors sorted by score descending, excluded).
    pub fn filter_and_score(
        &self,
        decisions: &DecisionSet,
        activities: &ActivityStore,
    ) -> (Vec<ScoredActivity>, Vec<FilteredActivity>) {
        let threshold = self.crowd_threshold(decisions.dislikes_crowds.confidence);

        let mut scored = Vec::new();
        let mut filtered_out = Vec::new();

        for entry in activities.iter() {
            let metadata = entry.metadata;

            if metadata.crowdiness > threshold {
                filtered_out.push(FilteredActivity {
                    activity: entry.name.clone(),
                    reason: format!(
                        "crowdiness level ({:.1}) exceeds tolerance threshold ({:.2})",
                        metadata.crowdiness, threshold
                    ),
                });
                continue;
            }

            let mut score = BASE_SCORE;
            let mut factors = Vec::new();

            // 1. Stress-relief bonus
            let stressed = &decisions.stressed;
            if stressed.truth == Truth::True && stressed.confidence > STRESS_BONUS_MIN_CONFIDENCE {
                let bonus = metadata.stress_relief * stressed.confidence * STRESS_RELIEF_WEIGHT;
                score += bonus;
                factors.push(EvidenceFactor::new(
                    "stress relief potential",
                    metadata.stress_relief,
                    STRESS_RELIEF_WEIGHT,
                    bonus,
                ));
            }

            // 2. Outdoor bonus (any confidence)
            let outdoors = &decisions.prefers_outdoors;
            if outdoors.truth == Truth::True {
                let bonus = metadata.outdoor * outdoors.confidence * OUTDOOR_WEIGHT;
                score += bonus;
                factors.push(EvidenceFactor::new(
                    "outdoor preference alignment",
                    metadata.outdoor,
                    OUTDOOR_WEIGHT,
                    bonus,
                ));
            }

            // 3. Hiking/physical bonus, contradiction-conservative fallback
            let hiking = &decisions.likes_hiking;
            if hiking.truth == Truth::True && metadata.physical > PHYSICAL_ACTIVITY_THRESHOLD {
                let bonus = metadata.physical * hiking.confidence * PHYSICAL_WEIGHT;
                score += bonus;
                factors.push(EvidenceFactor::new(
                    "physical activity alignment",
                    metadata.physical,
                    PHYSICAL_WEIGHT,
                    bonus,
                ));
            } else if hiking.truth == Truth::Both {
                score += CONTRADICTION_FALLBACK_BONUS;
                factors.push(EvidenceFactor::new(
                    "physical activity (conservative)",
                    metadata.physical,
                    CONTRADICTION_FALLBACK_BONUS,
                    CONTRADICTION_FALLBACK_BONUS,
                ));
            }

            scored.push(ScoredActivity {
                activity: entry.name.clone(),
                score,
                metadata,
                factors,
            });
        }

        // Stable sort: ties keep ActivityStore insertion order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        (scored, filtered_out)
    }
}

// =============================================================================
// TESTS
// =============================================================================
