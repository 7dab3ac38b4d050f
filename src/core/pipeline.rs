//! Recommendation pipeline: decisions → filter/score → traces → prose
//!
//! Pure function of the two stores: given identical store contents, every
//! run produces byte-identical recommendations. Verbose decision traces go
//! to a side channel and never feed back into the result.

use crate::core::{
    ActivityFilterScorer, DecisionEngine, ExplanationGenerator, StdoutSink, TraceSink,
};
use crate::types::{
    ActivityStore, Contradiction, DecisionSet, EvidenceStore, Recommendation, ReasoningTrace,
    StressLevel, ToneStyle, Truth, UserState,
};
use crate::{HIGH_STRESS_MIN_CONFIDENCE, MAX_LISTED_SOURCES, MAX_RECOMMENDATIONS};

/// Contradiction entry surfaced when hiking evidence conflicts
const HIKING_CONTRADICTION_FACTOR: &str = "mixed feelings about hiking activities";
const HIKING_CONTRADICTION_RESOLUTION: &str =
    "conservative approach taken due to other strong factors";

/// Proposition names the pipeline evaluates, by role
#[derive(Debug, Clone)]
pub struct PropositionBindings {
    pub stressed: String,
    pub likes_hiking: String,
    pub dislikes_crowds: String,
    pub prefers_outdoors: String,
}

impl Default for PropositionBindings {
    fn default() -> Self {
        Self {
            stressed: "Stressed(User)".to_string(),
            likes_hiking: "Likes(Hiking)".to_string(),
            dislikes_crowds: "Dislikes(Crowds)".to_string(),
            prefers_outdoors: "Prefers(Outdoors)".to_string(),
        }
    }
}

/// End-to-end recommendation pipeline over a static store pair
pub struct RecommendationPipeline {
    evidence: EvidenceStore,
    activities: ActivityStore,
    bindings: PropositionBindings,
    tone: ToneStyle,
    verbose: bool,
}

impl RecommendationPipeline {
    /// Create a pipeline with default proposition bindings
    pub fn new(evidence: EvidenceStore, activities: ActivityStore, tone: ToneStyle) -> Self {
        Self {
            evidence,
            activities,
            bindings: PropositionBindings::default(),
            tone,
            verbose: false,
        }
    }

    /// Override the proposition bindings
    pub fn with_bindings(mut self, bindings: PropositionBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Emit verbose decision traces to stdout during runs
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full pipeline and return ranked, explained recommendations
    pub fn recommend(&self) -> Vec<Recommendation> {
        if self.verbose {
            self.recommend_with_sink(Box::new(StdoutSink))
        } else {
            let decisions = self.decide_all(DecisionEngine::new(&self.evidence));
            self.rank_and_explain(&decisions)
        }
    }

    /// Run the pipeline, sending decision traces to the given sink
    pub fn recommend_with_sink(&self, mut sink: Box<dyn TraceSink + '_>) -> Vec<Recommendation> {
        let decisions =
            self.decide_all(DecisionEngine::with_sink(&self.evidence, Box::new(&mut *sink)));

        sink.emit("Decisions summary:");
        for (role, decision) in decisions.iter() {
            sink.emit(&format!(
                "  {}: {} (conf={:.2})",
                role, decision.truth, decision.confidence
            ));
        }

        self.rank_and_explain(&decisions)
    }

    /// Evaluate the bound propositions
    fn decide_all(&self, mut engine: DecisionEngine<'_>) -> DecisionSet {
        DecisionSet {
            stressed: engine.decide(&self.bindings.stressed),
            likes_hiking: engine.decide(&self.bindings.likes_hiking),
            dislikes_crowds: engine.decide(&self.bindings.dislikes_crowds),
            prefers_outdoors: engine.decide(&self.bindings.prefers_outdoors),
        }
    }

    /// Score, rank, build traces and render prose for the top activities
    fn rank_and_explain(&self, decisions: &DecisionSet) -> Vec<Recommendation> {
        let scorer = ActivityFilterScorer::new();
        let (scored, filtered_out) = scorer.filter_and_score(decisions, &self.activities);

        let generator = ExplanationGenerator::new(self.tone);
        let user_state = self.build_user_state(decisions);
        let contradictions = self.build_contradictions(decisions);

        scored
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .enumerate()
            .map(|(i, item)| {
                let trace = ReasoningTrace {
                    decision: format!("Recommend {}", item.activity),
                    // Display-only normalization, not a calibrated probability
                    confidence: (item.score / 2.0).min(1.0),
                    user_state: Some(user_state.clone()),
                    factors: item.factors,
                    contradictions: contradictions.clone(),
                    // Shared across all ranked items, not per-activity
                    filtered_out: filtered_out.clone(),
                };

                Recommendation {
                    activity: item.activity,
                    score: item.score,
                    metadata: item.metadata,
                    rank: (i + 1) as u32,
                    explanation: generator.generate_explanation(&trace),
                    summary: generator.generate_summary(&trace),
                    trace,
                }
            })
            .collect()
    }

    /// Stress snapshot: "high" only above 0.8 stressed confidence, else
    /// "moderate". "low" is unreachable from this rule, by design of the
    /// original system; the template variant for it stays in the table.
    fn build_user_state(&self, decisions: &DecisionSet) -> UserState {
        let stressed = &decisions.stressed;
        let stress_level = if stressed.truth == Truth::True
            && stressed.confidence > HIGH_STRESS_MIN_CONFIDENCE
        {
            StressLevel::High
        } else {
            StressLevel::Moderate
        };

        let sources = self
            .evidence
            .get(&self.bindings.stressed)
            .map(|evs| {
                evs.iter()
                    .take(MAX_LISTED_SOURCES)
                    .map(|e| e.source.clone())
                    .collect()
            })
            .unwrap_or_default();

        UserState {
            stress_level,
            confidence: stressed.confidence,
            sources,
        }
    }

    /// One fixed contradiction entry iff hiking evidence conflicts
    fn build_contradictions(&self, decisions: &DecisionSet) -> Vec<Contradiction> {
        if decisions.likes_hiking.truth == Truth::Both {
            vec![Contradiction {
                factor: HIKING_CONTRADICTION_FACTOR.to_string(),
                resolution: HIKING_CONTRADICTION_RESOLUTION.to_string(),
            }]
        } else {
            Vec::new()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
