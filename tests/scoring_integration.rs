//! Integration tests for the filter-and-score stage
//!
//! Tests the path: builtin stores → DecisionEngine → ActivityFilterScorer

use rosetta::core::{builtin_activities, builtin_evidence, ActivityFilterScorer, DecisionEngine};
use rosetta::types::DecisionSet;

fn builtin_decisions() -> DecisionSet {
    let store = builtin_evidence();
    let mut engine = DecisionEngine::new(&store);
    DecisionSet {
        stressed: engine.decide("Stressed(User)"),
        likes_hiking: engine.decide("Likes(Hiking)"),
        dislikes_crowds: engine.decide("Dislikes(Crowds)"),
        prefers_outdoors: engine.decide("Prefers(Outdoors)"),
    }
}

#[test]
fn test_confident_crowd_dislike_narrows_threshold() {
    let scorer = ActivityFilterScorer::new();
    let decisions = builtin_decisions();
    let threshold = scorer.crowd_threshold(decisions.dislikes_crowds.confidence);
    // 0.5 - 0.9163 * 0.3 ≈ 0.2251
    assert!((threshold - 0.2251).abs() < 1e-3, "got {}", threshold);
}

#[test]
fn test_only_quietest_activity_survives_builtin_tables() {
    let scorer = ActivityFilterScorer::new();
    let (scored, filtered) =
        scorer.filter_and_score(&builtin_decisions(), &builtin_activities());

    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].activity, "MeditationRetreat");
    assert_eq!(filtered.len(), 5);

    let names: Vec<&str> = filtered.iter().map(|f| f.activity.as_str()).collect();
    assert_eq!(
        names,
        vec!["MountainHike", "ShortHike", "UrbanWalk", "MallShopping", "BeachWalk"]
    );
}

#[test]
fn test_no_survivor_exceeds_threshold() {
    let scorer = ActivityFilterScorer::new();
    let decisions = builtin_decisions();
    let threshold = scorer.crowd_threshold(decisions.dislikes_crowds.confidence);
    let (scored, _) = scorer.filter_and_score(&decisions, &builtin_activities());

    for s in &scored {
        assert!(
            s.metadata.crowdiness <= threshold,
            "{} passed with crowdiness {} over threshold {}",
            s.activity,
            s.metadata.crowdiness,
            threshold
        );
    }
}

#[test]
fn test_filter_reason_embeds_both_numbers() {
    let scorer = ActivityFilterScorer::new();
    let (_, filtered) = scorer.filter_and_score(&builtin_decisions(), &builtin_activities());

    let mall = filtered.iter().find(|f| f.activity == "MallShopping").unwrap();
    assert_eq!(
        mall.reason,
        "crowdiness level (0.9) exceeds tolerance threshold (0.23)"
    );
}

#[test]
fn test_survivor_score_breakdown() {
    let scorer = ActivityFilterScorer::new();
    let (scored, _) = scorer.filter_and_score(&builtin_decisions(), &builtin_activities());

    let retreat = &scored[0];
    // base 0.5 + stress 0.9*0.9734*0.4 + outdoor 0.3*0.9734*0.3 + hiking fallback 0.05
    assert!((retreat.score - 0.9880).abs() < 1e-3, "got {}", retreat.score);

    let labels: Vec<&str> = retreat.factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "stress relief potential",
            "outdoor preference alignment",
            "physical activity (conservative)"
        ]
    );

    // Contributions sum back to the score minus the base
    let contributions: f64 = retreat.factors.iter().map(|f| f.contribution).sum();
    assert!((retreat.score - 0.5 - contributions).abs() < 1e-12);
}
