//! Report envelope for driver/CLI output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Recommendation, ToneStyle};

/// One pipeline run, wrapped for JSON output
///
/// The timestamp lives here, outside the core path, so recommendations
/// themselves stay byte-identical across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When this report was generated
    pub generated_at: DateTime<Utc>,
    /// Tone the explanations were rendered in
    pub tone: ToneStyle,
    /// Ranked recommendations
    pub recommendations: Vec<Recommendation>,
}

impl RunReport {
    /// Wrap a pipeline result
    pub fn new(tone: ToneStyle, recommendations: Vec<Recommendation>) -> Self {
        Self {
            generated_at: Utc::now(),
            tone,
            recommendations,
        }
    }
}
