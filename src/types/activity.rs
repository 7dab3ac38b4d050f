//! Activity metadata and the activity lookup table

use serde::{Deserialize, Serialize};

/// Attribute ratings for one activity, all 0.0-1.0
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityMetadata {
    /// How crowded the activity usually is
    pub crowdiness: f64,
    /// How outdoor the activity is
    pub outdoor: f64,
    /// Physical effort required
    pub physical: f64,
    /// Stress-relief potential
    pub stress_relief: f64,
}

/// One named activity with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub name: String,
    pub metadata: ActivityMetadata,
}

/// Static activity name → metadata lookup table
///
/// Loaded once, never mutated afterwards. Entry order is preserved and
/// breaks score ties during ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityStore {
    entries: Vec<ActivityEntry>,
}

impl ActivityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an activity (build-time only)
    pub fn insert(&mut self, name: &str, metadata: ActivityMetadata) {
        self.entries.push(ActivityEntry {
            name: name.to_string(),
            metadata,
        });
    }

    /// Look up one activity's metadata
    pub fn get(&self, name: &str) -> Option<&ActivityMetadata> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.metadata)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Number of activities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
