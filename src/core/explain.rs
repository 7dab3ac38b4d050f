//! Tone-parameterized explanation generator
//!
//! Renders a ReasoningTrace into prose by filling fixed templates and
//! joining the non-empty fragments in order: context, recommendation,
//! confidence, contradictions, filtered. Each tone owns a parallel set of
//! templates over the same keys; the trace never changes, only the voice.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::types::{Contradiction, EvidenceFactor, FilteredActivity, ReasoningTrace, ToneStyle, UserState};
use crate::{
    CONFIDENCE_HIGH_PERCENT, CONFIDENCE_MEDIUM_PERCENT, MAX_LISTED_CONTRADICTIONS,
    MAX_LISTED_FILTERED, MAX_LISTED_SOURCES,
};

/// Summary fallback when a trace carries no evidence factors
pub const SUMMARY_FALLBACK: &str = "Recommended activity";

/// Decision-label prefix stripped to recover the option name
const RECOMMEND_PREFIX: &str = "Recommend ";

/// The closed set of template keys every tone provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    ContextStressHigh,
    ContextStressMedium,
    ContextStressLow,
    Recommendation,
    ConfidenceHigh,
    ConfidenceMedium,
    ConfidenceLow,
    Contradiction,
    Filtered,
    Summary,
}

impl TemplateKey {
    /// All keys, for table-completeness checks
    pub const ALL: [TemplateKey; 10] = [
        TemplateKey::ContextStressHigh,
        TemplateKey::ContextStressMedium,
        TemplateKey::ContextStressLow,
        TemplateKey::Recommendation,
        TemplateKey::ConfidenceHigh,
        TemplateKey::ConfidenceMedium,
        TemplateKey::ConfidenceLow,
        TemplateKey::Contradiction,
        TemplateKey::Filtered,
        TemplateKey::Summary,
    ];

    /// Context key for a stress-level suffix; None for unknown suffixes
    ///
    /// The key suffix is "medium" while the pipeline reports "moderate", so
    /// the moderate context renders empty. Intentionally kept: the original
    /// system behaves this way and downstream text depends on it.
    fn for_stress_level(level: &str) -> Option<TemplateKey> {
        match level {
            "high" => Some(TemplateKey::ContextStressHigh),
            "medium" => Some(TemplateKey::ContextStressMedium),
            "low" => Some(TemplateKey::ContextStressLow),
            _ => None,
        }
    }
}

lazy_static! {
    /// Placeholder markers of the form {name}
    static ref RE_PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();

    /// Two-level tone → template-key table, built once, never mutated
    static ref TEMPLATES: HashMap<(ToneStyle, TemplateKey), &'static str> = {
        use TemplateKey::*;
        use ToneStyle::*;
        let mut t = HashMap::new();

        // ---------------------------------------------------------------------
        // CASUAL
        // ---------------------------------------------------------------------
        t.insert((Casual, ContextStressHigh),
            "You seem pretty stressed right now (I'm {confidence}% confident based on {sources}).");
        t.insert((Casual, ContextStressMedium),
            "You're showing some signs of stress (confidence: {confidence}%).");
        t.insert((Casual, ContextStressLow),
            "You appear relatively calm right now.");
        t.insert((Casual, Recommendation),
            "I picked **{option}** because it's great for {primary_reason}. {secondary_reasons}");
        t.insert((Casual, ConfidenceHigh),
            "I'm quite confident about this choice.");
        t.insert((Casual, ConfidenceMedium),
            "I'm moderately confident in this recommendation.");
        t.insert((Casual, ConfidenceLow),
            "I'm somewhat uncertain, but this seems like the best option.");
        t.insert((Casual, Contradiction),
            "I know you have {factor}, but {resolution}.");
        t.insert((Casual, Filtered),
            "I ruled out **{option}** since {reason}.");
        t.insert((Casual, Summary),
            "Perfect for {key_benefit}!");

        // ---------------------------------------------------------------------
        // EXPERT
        // ---------------------------------------------------------------------
        t.insert((Expert, ContextStressHigh),
            "Elevated stress indicators detected (confidence: {confidence}%, sources: {sources}).");
        t.insert((Expert, ContextStressMedium),
            "Moderate stress signals observed (confidence: {confidence}%).");
        t.insert((Expert, ContextStressLow),
            "Baseline stress levels detected.");
        t.insert((Expert, Recommendation),
            "**{option}** selected for optimal {primary_reason}. {secondary_reasons}");
        t.insert((Expert, ConfidenceHigh),
            "High confidence recommendation.");
        t.insert((Expert, ConfidenceMedium),
            "Moderate confidence level.");
        t.insert((Expert, ConfidenceLow),
            "Lower confidence due to limited data.");
        t.insert((Expert, Contradiction),
            "Conflicting evidence for {factor} resolved via {resolution}.");
        t.insert((Expert, Filtered),
            "**{option}** eliminated: {reason}.");
        t.insert((Expert, Summary),
            "Optimized for {key_benefit}.");

        // ---------------------------------------------------------------------
        // EMPATHETIC
        // ---------------------------------------------------------------------
        t.insert((Empathetic, ContextStressHigh),
            "I can see you're going through a stressful time right now (I'm {confidence}% confident based on {sources}).");
        t.insert((Empathetic, ContextStressMedium),
            "You might be feeling a bit overwhelmed lately (confidence: {confidence}%).");
        t.insert((Empathetic, ContextStressLow),
            "You seem to be in a good headspace right now.");
        t.insert((Empathetic, Recommendation),
            "I think **{option}** would be really good for you because it excels at {primary_reason}. {secondary_reasons}");
        t.insert((Empathetic, ConfidenceHigh),
            "I feel quite sure this is a great choice for you.");
        t.insert((Empathetic, ConfidenceMedium),
            "This seems like a solid option for your situation.");
        t.insert((Empathetic, ConfidenceLow),
            "I'm not entirely sure, but I think this might help you.");
        t.insert((Empathetic, Contradiction),
            "I understand you have {factor}, but I believe {resolution}.");
        t.insert((Empathetic, Filtered),
            "I didn't suggest **{option}** because {reason}, and I want to respect your preferences.");
        t.insert((Empathetic, Summary),
            "Thoughtfully chosen for {key_benefit}.");

        // ---------------------------------------------------------------------
        // NEUTRAL
        // ---------------------------------------------------------------------
        t.insert((Neutral, ContextStressHigh),
            "Current stress level: high (confidence: {confidence}%, sources: {sources}).");
        t.insert((Neutral, ContextStressMedium),
            "Current stress level: moderate (confidence: {confidence}%).");
        t.insert((Neutral, ContextStressLow),
            "Current stress level: low.");
        t.insert((Neutral, Recommendation),
            "**{option}** recommended for {primary_reason}. {secondary_reasons}");
        t.insert((Neutral, ConfidenceHigh),
            "High confidence.");
        t.insert((Neutral, ConfidenceMedium),
            "Moderate confidence.");
        t.insert((Neutral, ConfidenceLow),
            "Low confidence.");
        t.insert((Neutral, Contradiction),
            "Contradiction in {factor} resolved: {resolution}.");
        t.insert((Neutral, Filtered),
            "Filtered: **{option}** - {reason}.");
        t.insert((Neutral, Summary),
            "Selected for {key_benefit}.");

        t
    };
}

/// Tone-parameterized template renderer
///
/// Stateless beyond the tone choice; safe to construct per run.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationGenerator {
    tone: ToneStyle,
}

impl ExplanationGenerator {
    /// Create a generator for one tone
    pub fn new(tone: ToneStyle) -> Self {
        Self { tone }
    }

    /// Tone this generator renders in
    pub fn tone(&self) -> ToneStyle {
        self.tone
    }

    /// Render the full prose explanation for one trace
    pub fn generate_explanation(&self, trace: &ReasoningTrace) -> String {
        let mut components = Vec::new();

        if let Some(user_state) = &trace.user_state {
            let context = self.render_context(user_state);
            if !context.is_empty() {
                components.push(context);
            }
        }

        components.push(self.render_recommendation(trace));
        components.push(self.render_confidence(trace.confidence));

        let contradictions = self.render_contradictions(&trace.contradictions);
        if !contradictions.is_empty() {
            components.push(contradictions);
        }

        let filtered = self.render_filtered(&trace.filtered_out);
        if !filtered.is_empty() {
            components.push(filtered);
        }

        components.join(" ")
    }

    /// Render the one-line summary for quick display
    pub fn generate_summary(&self, trace: &ReasoningTrace) -> String {
        let primary = match max_weight_factor(&trace.factors) {
            Some((_, factor)) => factor,
            None => return SUMMARY_FALLBACK.to_string(),
        };

        self.fill(
            TemplateKey::Summary,
            &[("key_benefit", primary.factor.as_str())],
        )
    }

    /// Context fragment keyed by stress level; empty for unknown levels
    fn render_context(&self, user_state: &UserState) -> String {
        let key = match TemplateKey::for_stress_level(user_state.stress_level.as_str()) {
            Some(key) => key,
            None => return String::new(),
        };

        let confidence = percent(user_state.confidence).to_string();
        let sources = user_state
            .sources
            .iter()
            .take(MAX_LISTED_SOURCES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        self.fill(key, &[("confidence", &confidence), ("sources", &sources)])
    }

    /// Main recommendation fragment, always present
    fn render_recommendation(&self, trace: &ReasoningTrace) -> String {
        let option = trace
            .decision
            .strip_prefix(RECOMMEND_PREFIX)
            .unwrap_or(&trace.decision);

        let (primary_index, primary) = match max_weight_factor(&trace.factors) {
            Some(found) => found,
            // Same tone-independent fallback the template would collapse to
            None => return format!("**{}** recommended.", option),
        };

        let secondary: Vec<&str> = trace
            .factors
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != primary_index)
            .take(2)
            .map(|(_, f)| f.factor.as_str())
            .collect();

        // Empty string, not omission: the template keeps its slot
        let secondary_text = if secondary.is_empty() {
            String::new()
        } else {
            format!("Also beneficial for {}.", secondary.join(" and "))
        };

        self.fill(
            TemplateKey::Recommendation,
            &[
                ("option", option),
                ("primary_reason", &primary.factor),
                ("secondary_reasons", &secondary_text),
            ],
        )
    }

    /// Confidence fragment banded by truncated integer percent
    fn render_confidence(&self, confidence: f64) -> String {
        let pct = percent(confidence);
        let key = if pct >= CONFIDENCE_HIGH_PERCENT {
            TemplateKey::ConfidenceHigh
        } else if pct >= CONFIDENCE_MEDIUM_PERCENT {
            TemplateKey::ConfidenceMedium
        } else {
            TemplateKey::ConfidenceLow
        };
        self.fill(key, &[])
    }

    /// Up to 2 contradiction fragments joined with a space
    fn render_contradictions(&self, contradictions: &[Contradiction]) -> String {
        contradictions
            .iter()
            .take(MAX_LISTED_CONTRADICTIONS)
            .map(|c| {
                self.fill(
                    TemplateKey::Contradiction,
                    &[("factor", c.factor.as_str()), ("resolution", c.resolution.as_str())],
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Up to 2 filtered-out fragments joined with a space
    fn render_filtered(&self, filtered_out: &[FilteredActivity]) -> String {
        filtered_out
            .iter()
            .take(MAX_LISTED_FILTERED)
            .map(|f| {
                self.fill(
                    TemplateKey::Filtered,
                    &[("option", f.activity.as_str()), ("reason", f.reason.as_str())],
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Fill a template's {name} placeholders from the given values
    ///
    /// Unknown template key → empty fragment; unresolved placeholder names
    /// substitute the empty string, so no marker survives rendering.
    fn fill(&self, key: TemplateKey, values: &[(&str, &str)]) -> String {
        let template = match TEMPLATES.get(&(self.tone, key)) {
            Some(template) => *template,
            None => return String::new(),
        };

        RE_PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                values
                    .iter()
                    .find(|(name, _)| *name == &caps[1])
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_default()
            })
            .into_owned()
            .trim_end()
            .to_string()
    }
}

/// Integer percent by truncation, matching the banding rule
fn percent(confidence: f64) -> i64 {
    (confidence * 100.0) as i64
}

/// Max-weight factor, first-encountered on ties (strictly-greater scan)
fn max_weight_factor(factors: &[EvidenceFactor]) -> Option<(usize, &EvidenceFactor)> {
    let mut best: Option<(usize, &EvidenceFactor)> = None;
    for (i, factor) in factors.iter().enumerate() {
        match best {
            Some((_, current)) if factor.weight > current.weight => best = Some((i, factor)),
            None => best = Some((i, factor)),
            _ => {}
        }
    }
    best
}

// =============================================================================
// TESTS
// =============================================================================
