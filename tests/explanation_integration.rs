//! Integration tests for the explanation stage
//!
//! Tests the path: full ReasoningTrace → ExplanationGenerator → prose

use pretty_assertions::assert_eq;

use rosetta::core::ExplanationGenerator;
use rosetta::types::{
    Contradiction, EvidenceFactor, FilteredActivity, ReasoningTrace, StressLevel, ToneStyle,
    UserState,
};

fn full_trace() -> ReasoningTrace {
    ReasoningTrace {
        decision: "Recommend MeditationRetreat".to_string(),
        confidence: 0.494,
        user_state: Some(UserState {
            stress_level: StressLevel::High,
            confidence: 0.9734,
            sources: vec![
                "HeartRateMonitor".to_string(),
                "JournalEntry".to_string(),
                "SleepPattern".to_string(),
            ],
        }),
        factors: vec![
            EvidenceFactor::new("stress relief potential", 0.9, 0.4, 0.3504),
            EvidenceFactor::new("outdoor preference alignment", 0.3, 0.3, 0.0876),
            EvidenceFactor::new("physical activity (conservative)", 0.2, 0.05, 0.05),
        ],
        contradictions: vec![Contradiction {
            factor: "mixed feelings about hiking activities".to_string(),
            resolution: "conservative approach taken due to other strong factors".to_string(),
        }],
        filtered_out: vec![
            FilteredActivity {
                activity: "MountainHike".to_string(),
                reason: "crowdiness level (0.3) exceeds tolerance threshold (0.23)".to_string(),
            },
            FilteredActivity {
                activity: "ShortHike".to_string(),
                reason: "crowdiness level (0.6) exceeds tolerance threshold (0.23)".to_string(),
            },
        ],
    }
}

#[test]
fn test_neutral_explanation_full_assembly() {
    let generator = ExplanationGenerator::new(ToneStyle::Neutral);
    let explanation = generator.generate_explanation(&full_trace());

    assert_eq!(
        explanation,
        "Current stress level: high (confidence: 97%, sources: HeartRateMonitor, JournalEntry, SleepPattern). \
         **MeditationRetreat** recommended for stress relief potential. \
         Also beneficial for outdoor preference alignment and physical activity (conservative). \
         Low confidence. \
         Contradiction in mixed feelings about hiking activities resolved: conservative approach taken due to other strong factors. \
         Filtered: **MountainHike** - crowdiness level (0.3) exceeds tolerance threshold (0.23). \
         Filtered: **ShortHike** - crowdiness level (0.6) exceeds tolerance threshold (0.23)."
    );
}

#[test]
fn test_neutral_summary() {
    let generator = ExplanationGenerator::new(ToneStyle::Neutral);
    assert_eq!(
        generator.generate_summary(&full_trace()),
        "Selected for stress relief potential."
    );
}

#[test]
fn test_every_tone_renders_same_trace() {
    let trace = full_trace();
    for tone in ToneStyle::ALL {
        let generator = ExplanationGenerator::new(tone);
        let explanation = generator.generate_explanation(&trace);

        // Same facts in every voice
        assert!(explanation.contains("**MeditationRetreat**"), "{}", tone);
        assert!(explanation.contains("stress relief potential"), "{}", tone);
        assert!(explanation.contains("mixed feelings about hiking activities"), "{}", tone);
        assert!(explanation.contains("**MountainHike**"), "{}", tone);
        assert!(!explanation.contains('{'), "{}: unresolved marker", tone);
        assert!(!explanation.contains('}'), "{}: unresolved marker", tone);
    }
}

#[test]
fn test_tones_differ_in_voice() {
    let trace = full_trace();
    let casual = ExplanationGenerator::new(ToneStyle::Casual).generate_explanation(&trace);
    let expert = ExplanationGenerator::new(ToneStyle::Expert).generate_explanation(&trace);

    assert_ne!(casual, expert);
    assert!(casual.contains("I picked"));
    assert!(expert.contains("selected for optimal"));
}

#[test]
fn test_rendering_is_deterministic() {
    let trace = full_trace();
    for tone in ToneStyle::ALL {
        let generator = ExplanationGenerator::new(tone);
        assert_eq!(
            generator.generate_explanation(&trace),
            generator.generate_explanation(&trace)
        );
        assert_eq!(generator.generate_summary(&trace), generator.generate_summary(&trace));
    }
}

#[test]
fn test_empty_factor_summary_is_fixed_literal() {
    let mut trace = full_trace();
    trace.factors.clear();
    for tone in ToneStyle::ALL {
        assert_eq!(
            ExplanationGenerator::new(tone).generate_summary(&trace),
            "Recommended activity"
        );
    }
}

#[test]
fn test_empty_lists_drop_their_fragments() {
    let mut trace = full_trace();
    trace.contradictions.clear();
    trace.filtered_out.clear();
    trace.user_state = None;

    let explanation = ExplanationGenerator::new(ToneStyle::Neutral).generate_explanation(&trace);
    assert_eq!(
        explanation,
        "**MeditationRetreat** recommended for stress relief potential. \
         Also beneficial for outdoor preference alignment and physical activity (conservative). \
         Low confidence."
    );
}
