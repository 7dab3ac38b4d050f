//! Core types for Rosetta

mod activity;
mod decision;
mod evidence;
mod report;
mod score;
mod tone;
mod trace;
mod truth;

pub use activity::{ActivityEntry, ActivityMetadata, ActivityStore};
pub use decision::{Decision, DecisionSet};
pub use evidence::{Evidence, EvidenceStore, PropositionEvidence};
pub use report::RunReport;
pub use score::{EvidenceFactor, FilteredActivity, ScoredActivity};
pub use tone::{ParseToneError, ToneStyle};
pub use trace::{Contradiction, Recommendation, ReasoningTrace, StressLevel, UserState};
pub use truth::Truth;
