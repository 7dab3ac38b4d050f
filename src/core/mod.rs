//! Core modules for Rosetta

pub mod engine;
pub mod explain;
pub mod pipeline;
pub mod provider;
pub mod scorer;

pub use engine::{logistic_confidence, DecisionEngine, StdoutSink, TraceSink, VecSink};
pub use explain::{ExplanationGenerator, TemplateKey, SUMMARY_FALLBACK};
pub use pipeline::{PropositionBindings, RecommendationPipeline};
pub use provider::{
    builtin_activities, builtin_evidence, load_activity_store, load_evidence_store, ProviderError,
};
pub use scorer::ActivityFilterScorer;
