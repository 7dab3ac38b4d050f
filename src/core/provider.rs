//! Store providers: JSON file loading and the builtin demo tables
//!
//! The engine has no opinion on where stores come from; these helpers cover
//! the two cases the CLI needs. File format is an entry array, so insertion
//! order survives the round trip.

use std::fs;

use crate::types::{ActivityMetadata, ActivityStore, Evidence, EvidenceStore, Truth};

/// Store loading failure
#[derive(Debug)]
pub enum ProviderError {
    /// File could not be read
    Io(String),
    /// File contents are not a valid store
    Parse(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Io(msg) => write!(f, "store read failed: {}", msg),
            ProviderError::Parse(msg) => write!(f, "store parse failed: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Load an evidence store from a JSON entry-array file
pub fn load_evidence_store(path: &str) -> Result<EvidenceStore, ProviderError> {
    let contents = fs::read_to_string(path).map_err(|e| ProviderError::Io(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Load an activity store from a JSON entry-array file
pub fn load_activity_store(path: &str) -> Result<ActivityStore, ProviderError> {
    let contents = fs::read_to_string(path).map_err(|e| ProviderError::Io(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Builtin demo evidence: the four user-state propositions
pub fn builtin_evidence() -> EvidenceStore {
    let mut store = EvidenceStore::new();

    store.insert(
        "Stressed(User)",
        vec![
            Evidence::new("HeartRateMonitor", Truth::True, 0.85),
            Evidence::new("JournalEntry", Truth::True, 0.75),
            Evidence::new("SleepPattern", Truth::True, 0.60),
        ],
    );
    store.insert(
        "Likes(Hiking)",
        vec![
            Evidence::new("UserSurvey", Truth::True, 0.80),
            Evidence::new("PastBookings", Truth::True, 0.70),
            Evidence::new("FriendComment", Truth::False, 0.30),
            Evidence::new("WeatherPreference", Truth::True, 0.50),
        ],
    );
    store.insert(
        "Dislikes(Crowds)",
        vec![
            Evidence::new("UserSurvey", Truth::True, 0.85),
            Evidence::new("LocationHistory", Truth::True, 0.75),
            Evidence::new("SocialMedia", Truth::True, 0.65),
            Evidence::new("EventAttendance", Truth::False, 0.40),
        ],
    );
    store.insert(
        "Prefers(Outdoors)",
        vec![
            Evidence::new("ActivityHistory", Truth::True, 0.90),
            Evidence::new("PhotoAnalysis", Truth::True, 0.70),
            Evidence::new("WeatherCorrelation", Truth::True, 0.60),
        ],
    );

    store
}

/// Builtin demo activities: six candidates across the crowdiness range
pub fn builtin_activities() -> ActivityStore {
    let mut store = ActivityStore::new();

    store.insert(
        "MeditationRetreat",
        ActivityMetadata {
            crowdiness: 0.1,
            outdoor: 0.3,
            physical: 0.2,
            stress_relief: 0.9,
        },
    );
    store.insert(
        "MountainHike",
        ActivityMetadata {
            crowdiness: 0.3,
            outdoor: 1.0,
            physical: 0.8,
            stress_relief: 0.7,
        },
    );
    store.insert(
        "ShortHike",
        ActivityMetadata {
            crowdiness: 0.6,
            outdoor: 0.9,
            physical: 0.5,
            stress_relief: 0.6,
        },
    );
    store.insert(
        "UrbanWalk",
        ActivityMetadata {
            crowdiness: 0.7,
            outdoor: 0.6,
            physical: 0.4,
            stress_relief: 0.4,
        },
    );
    store.insert(
        "MallShopping",
        ActivityMetadata {
            crowdiness: 0.9,
            outdoor: 0.0,
            physical: 0.3,
            stress_relief: 0.1,
        },
    );
    store.insert(
        "BeachWalk",
        ActivityMetadata {
            crowdiness: 0.4,
            outdoor: 1.0,
            physical: 0.4,
            stress_relief: 0.8,
        },
    );

    store
}

// =============================================================================
// TESTS
// =============================================================================
