//! Decision engine: resolves weighted evidence into four-valued judgments
//!
//! Truth selection order (first match wins):
//! - T>0 AND F>0 → Both (covers the exact tie T==F>0)
//! - T>F → True
//! - F>T → False
//! - otherwise → Neither

use crate::types::{Decision, Evidence, EvidenceStore, Truth};
use crate::{CONFIDENCE_MIDPOINT, CONFIDENCE_STEEPNESS};

/// Observational consumer of verbose decision traces
///
/// Emission never alters the returned Decision; the sink may be dropped or
/// redirected without changing results.
pub trait TraceSink {
    fn emit(&mut self, line: &str);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// Sink that prints trace lines to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Sink that buffers trace lines, for tests and embedding
#[derive(Debug, Default)]
pub struct VecSink {
    pub lines: Vec<String>,
}

impl TraceSink for VecSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Evidence-aggregation engine over a read-only store
pub struct DecisionEngine<'a> {
    store: &'a EvidenceStore,
    sink: Option<Box<dyn TraceSink + 'a>>,
}

impl<'a> DecisionEngine<'a> {
    /// Create an engine without trace output
    pub fn new(store: &'a EvidenceStore) -> Self {
        Self { store, sink: None }
    }

    /// Create an engine that emits a verbose trace to the given sink
    pub fn with_sink(store: &'a EvidenceStore, sink: Box<dyn TraceSink + 'a>) -> Self {
        Self {
            store,
            sink: Some(sink),
        }
    }

    /// Resolve one proposition into a Decision
    pub fn decide(&mut self, proposition: &str) -> Decision {
        let evidence = match self.store.get(proposition) {
            Some(evs) if !evs.is_empty() => evs,
            _ => {
                let reasoning = format!("No evidence found for {}", proposition);
                self.trace(&format!("  {}", reasoning));
                return Decision::new(proposition, Truth::Neither, 0.0, reasoning);
            }
        };

        // Partition weight by belief; Neither-belief evidence carries no weight
        let t_weight: f64 = sum_weight(evidence, Truth::True);
        let f_weight: f64 = sum_weight(evidence, Truth::False);
        let b_weight: f64 = sum_weight(evidence, Truth::Both);
        let total = t_weight + f_weight + b_weight;

        if self.sink.is_some() {
            self.trace(&format!("  Evidence for {}:", proposition));
            for e in evidence {
                self.trace(&format!(
                    "    - {}: {} (weight={})",
                    e.source, e.belief, e.weight
                ));
            }
            self.trace(&format!(
                "    Totals: T={:.2}, F={:.2}, B={:.2}",
                t_weight, f_weight, b_weight
            ));
        }

        if total == 0.0 {
            let reasoning = "All evidence has zero weight".to_string();
            return Decision::new(proposition, Truth::Neither, 0.0, reasoning);
        }

        let (truth, reasoning) = if t_weight > 0.0 && f_weight > 0.0 {
            (
                Truth::Both,
                format!(
                    "Contradiction: both supporting ({:.2}) and opposing ({:.2}) evidence",
                    t_weight, f_weight
                ),
            )
        } else if t_weight > f_weight {
            (
                Truth::True,
                format!("Supported: {:.2} > {:.2}", t_weight, f_weight),
            )
        } else if f_weight > t_weight {
            (
                Truth::False,
                format!("Opposed: {:.2} > {:.2}", f_weight, t_weight),
            )
        } else {
            // Only reachable when T == F == 0 and B > 0
            (
                Truth::Neither,
                format!("Balanced or unknown: T={:.2}, F={:.2}", t_weight, f_weight),
            )
        };

        // total > 0 is guaranteed here; the ratio cannot produce NaN
        let net = (t_weight - f_weight).abs();
        let confidence = logistic_confidence(net / total);

        self.trace(&format!(
            "    Result: {} (confidence={:.2}) - {}",
            truth, confidence, reasoning
        ));

        Decision::new(proposition, truth, confidence, reasoning)
    }

    fn trace(&mut self, line: &str) {
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(line);
        }
    }
}

/// Sum the weight of evidence holding one belief
fn sum_weight(evidence: &[Evidence], belief: Truth) -> f64 {
    evidence
        .iter()
        .filter(|e| e.belief == belief)
        .map(|e| e.weight)
        .sum()
}

/// Logistic confidence over the net/total evidence ratio
///
/// confidence = 1 / (1 + e^(-4 * (ratio - 0.1)))
/// ratio 0.1 → 0.5; ratio 1.0 → ~0.97; floor at ratio 0 → ~0.40
pub fn logistic_confidence(ratio: f64) -> f64 {
    1.0 / (1.0 + (-CONFIDENCE_STEEPNESS * (ratio - CONFIDENCE_MIDPOINT)).exp())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Evidence;

    fn store_with(prop: &str, evidence: Vec<Evidence>) -> EvidenceStore {
        let mut store = EvidenceStore::new();
        store.insert(prop, evidence);
        store
    }

    #[test]
    fn test_unknown_proposition_is_neither() {
        let store = EvidenceStore::new();
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("Missing(x)");
        assert_eq!(d.truth, Truth::Neither);
        assert_eq!(d.confidence, 0.0);
        assert!(d.reasoning.contains("No evidence found"));
    }

    #[test]
    fn test_zero_weight_evidence_is_neither() {
        let store = store_with(
            "P(x)",
            vec![
                Evidence::new("a", Truth::True, 0.0),
                Evidence::new("b", Truth::False, 0.0),
            ],
        );
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("P(x)");
        assert_eq!(d.truth, Truth::Neither);
        assert_eq!(d.confidence, 0.0);
        assert!(d.reasoning.contains("zero weight"));
    }

    #[test]
    fn test_contradiction_wins_over_majority() {
        // T clearly outweighs F, but any opposing weight means Both
        let store = store_with(
            "P(x)",
            vec![
                Evidence::new("a", Truth::True, 0.9),
                Evidence::new("b", Truth::False, 0.1),
            ],
        );
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("P(x)");
        assert_eq!(d.truth, Truth::Both);
    }

    #[test]
    fn test_exact_tie_is_both_not_neither() {
        let store = store_with(
            "P(x)",
            vec![
                Evidence::new("a", Truth::True, 0.5),
                Evidence::new("b", Truth::False, 0.5),
            ],
        );
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("P(x)");
        assert_eq!(d.truth, Truth::Both);
    }

    #[test]
    fn test_only_both_evidence_is_neither() {
        let store = store_with("P(x)", vec![Evidence::new("a", Truth::Both, 0.8)]);
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("P(x)");
        assert_eq!(d.truth, Truth::Neither);
        assert!(d.reasoning.contains("Balanced or unknown"));
    }

    #[test]
    fn test_neither_belief_evidence_carries_no_weight() {
        let store = store_with("P(x)", vec![Evidence::new("a", Truth::Neither, 0.8)]);
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("P(x)");
        assert_eq!(d.truth, Truth::Neither);
        assert_eq!(d.confidence, 0.0);
    }

    #[test]
    fn test_all_true_evidence_calibration() {
        // net/total = 1.0 → logistic(3.6) ≈ 0.9734
        let store = store_with(
            "Stressed(User)",
            vec![
                Evidence::new("HeartRateMonitor", Truth::True, 0.85),
                Evidence::new("JournalEntry", Truth::True, 0.75),
                Evidence::new("SleepPattern", Truth::True, 0.60),
            ],
        );
        let mut engine = DecisionEngine::new(&store);
        let d = engine.decide("Stressed(User)");
        assert_eq!(d.truth, Truth::True);
        assert!((d.confidence - 0.9734).abs() < 1e-3, "got {}", d.confidence);
    }

    #[test]
    fn test_midpoint_ratio_gives_half_confidence() {
        assert!((logistic_confidence(0.1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_floor_at_zero_ratio() {
        // logistic(-0.4) ≈ 0.401, not 0
        let floor = logistic_confidence(0.0);
        assert!((floor - 0.401).abs() < 1e-2, "got {}", floor);
    }

    #[test]
    fn test_confidence_monotonic_in_ratio() {
        let mut prev = logistic_confidence(0.0);
        for i in 1..=10 {
            let c = logistic_confidence(i as f64 / 10.0);
            assert!(c > prev, "confidence must rise with net/total");
            prev = c;
        }
    }

    #[test]
    fn test_confidence_always_in_unit_interval() {
        let cases: Vec<Vec<Evidence>> = vec![
            vec![Evidence::new("a", Truth::True, 1.0)],
            vec![
                Evidence::new("a", Truth::True, 0.3),
                Evidence::new("b", Truth::False, 0.7),
            ],
            vec![
                Evidence::new("a", Truth::Both, 0.4),
                Evidence::new("b", Truth::True, 0.1),
            ],
        ];
        for (i, evidence) in cases.into_iter().enumerate() {
            let store = store_with("P(x)", evidence);
            let mut engine = DecisionEngine::new(&store);
            let d = engine.decide("P(x)");
            assert!(
                (0.0..=1.0).contains(&d.confidence),
                "case {} out of range: {}",
                i,
                d.confidence
            );
        }
    }

    #[test]
    fn test_sink_sees_breakdown_but_decision_unchanged() {
        let store = store_with("P(x)", vec![Evidence::new("src", Truth::True, 0.5)]);

        let mut silent = DecisionEngine::new(&store);
        let d1 = silent.decide("P(x)");

        let mut verbose = DecisionEngine::with_sink(&store, Box::new(VecSink::default()));
        let d2 = verbose.decide("P(x)");

        assert_eq!(d1.truth, d2.truth);
        assert_eq!(d1.confidence, d2.confidence);
        assert_eq!(d1.reasoning, d2.reasoning);
    }

    #[test]
    fn test_sink_receives_evidence_lines() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct SharedSink(Rc<RefCell<Vec<String>>>);
        impl TraceSink for SharedSink {
            fn emit(&mut self, line: &str) {
                self.0.borrow_mut().push(line.to_string());
            }
        }

        let lines = Rc::new(RefCell::new(Vec::new()));
        let store = store_with("P(x)", vec![Evidence::new("src", Truth::True, 0.5)]);
        let mut engine =
            DecisionEngine::with_sink(&store, Box::new(SharedSink(Rc::clone(&lines))));
        engine.decide("P(x)");

        let lines = lines.borrow();
        assert!(lines.iter().any(|l| l.contains("Evidence for P(x)")));
        assert!(lines.iter().any(|l| l.contains("Totals: T=0.50")));
    }
}
