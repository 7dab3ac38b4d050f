//! Rosetta: explainable activity recommendation engine
//!
//! Pipeline: EvidenceStore → DecisionEngine → ActivityFilterScorer →
//! ReasoningTrace → ExplanationGenerator → ranked Recommendations

pub mod core;
pub mod types;

// =============================================================================
// CONFIDENCE CALIBRATION
// =============================================================================

/// Steepness of the logistic confidence curve
pub const CONFIDENCE_STEEPNESS: f64 = 4.0;

/// Midpoint offset: net/total == 0.1 maps to confidence 0.5
pub const CONFIDENCE_MIDPOINT: f64 = 0.1;

// =============================================================================
// FILTERING & SCORING WEIGHTS
// =============================================================================

/// Crowd threshold before any confidence adjustment
pub const CROWD_BASE_THRESHOLD: f64 = 0.5;

/// How far crowd-dislike confidence can narrow the threshold (0.5 → 0.2)
pub const CROWD_CONFIDENCE_SPAN: f64 = 0.3;

/// Every surviving activity starts from this score
pub const BASE_SCORE: f64 = 0.5;

/// Stress-relief bonus weight (highest - applied first)
pub const STRESS_RELIEF_WEIGHT: f64 = 0.4;

/// Outdoor preference bonus weight
pub const OUTDOOR_WEIGHT: f64 = 0.3;

/// Physical activity bonus weight
pub const PHYSICAL_WEIGHT: f64 = 0.2;

/// Flat bonus when hiking evidence is contradictory (Both)
pub const CONTRADICTION_FALLBACK_BONUS: f64 = 0.05;

/// Stress-relief bonus requires stressed confidence above this
pub const STRESS_BONUS_MIN_CONFIDENCE: f64 = 0.7;

/// Physical bonus requires activity physical rating above this
pub const PHYSICAL_ACTIVITY_THRESHOLD: f64 = 0.5;

/// Stress level reported as "high" above this stressed confidence
pub const HIGH_STRESS_MIN_CONFIDENCE: f64 = 0.8;

// =============================================================================
// OUTPUT CAPS
// =============================================================================

/// At most this many ranked recommendations per run
pub const MAX_RECOMMENDATIONS: usize = 3;

/// At most this many contradictions rendered in an explanation
pub const MAX_LISTED_CONTRADICTIONS: usize = 2;

/// At most this many filtered-out activities rendered in an explanation
pub const MAX_LISTED_FILTERED: usize = 2;

/// At most this many evidence sources rendered in the context fragment
pub const MAX_LISTED_SOURCES: usize = 3;

// =============================================================================
// CONFIDENCE BANDS (integer percent, truncated)
// =============================================================================

/// Percent at or above which confidence reads as "high"
pub const CONFIDENCE_HIGH_PERCENT: i64 = 80;

/// Percent at or above which confidence reads as "medium"
pub const CONFIDENCE_MEDIUM_PERCENT: i64 = 60;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
