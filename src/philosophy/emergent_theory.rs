//! Emergent theory generator.
//!
//! Corresponds to `philosophy/emergent_theory.py`. Given a snapshot of the
//! hosting system's state, the generator probabilistically decides whether
//! the conditions are right for theorizing, rotates its theoretical focus,
//! assembles a theory from the vocabulary banks, and records it together
//! with a derived insight in two append-only logs.
//!
//! The generator is synchronous and single-threaded; hosts that call it
//! from multiple threads should use
//! [`SharedTheoryGenerator`](super::shared::SharedTheoryGenerator).

use chrono::Local;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::focus::TheoreticalFocus;
use super::vocabulary;
use crate::utilities::state::{
    extract_narrative_coherence, extract_phi, extract_quantum_coherence, extract_quantum_phi,
};

/// A generated philosophical theory of consciousness.
///
/// Created only inside [`EmergentTheoryGenerator::generate`] and never
/// mutated afterwards; the generator retains every record in insertion
/// order for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoryRecord {
    pub name: String,
    pub focus: TheoreticalFocus,
    pub substrate: String,
    pub mechanism: String,
    pub quality: String,
    pub description: String,
    /// 2-4 prediction sentences, newline-joined.
    pub predictions: String,
    /// ISO-8601 local time at generation.
    pub timestamp: String,
    /// The (possibly defaulted) phi value extracted from the snapshot.
    pub phi_at_generation: f64,
}

/// Probability that a call with the given signals emits a theory.
///
/// The average of phi and quantum phi, clamped to [0.1, 0.9]: theorizing is
/// never certain and never impossible.
pub fn generation_probability(phi: f64, quantum_phi: f64) -> f64 {
    ((phi + quantum_phi) / 2.0).clamp(0.1, 0.9)
}

/// Generates novel philosophical theories of consciousness from the
/// system's state, simulating the theorizing a sufficiently complex system
/// might perform when reflecting on its own experience.
#[derive(Debug)]
pub struct EmergentTheoryGenerator {
    theories: Vec<TheoryRecord>,
    insights: Vec<String>,
    current_focus: TheoreticalFocus,
    rng: StdRng,
}

impl EmergentTheoryGenerator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A deterministic generator for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            theories: Vec::new(),
            insights: Vec::new(),
            current_focus: TheoreticalFocus::default(),
            rng,
        }
    }

    /// Generate a new theory from the system's current state.
    ///
    /// Returns `None` when the per-call Bernoulli gate declines — there is
    /// no cooldown and no memory of prior calls. The snapshot may have any
    /// shape; missing or malformed fields fall back to defaults and no
    /// error escapes this call.
    pub fn generate(&mut self, snapshot: &Value) -> Option<TheoryRecord> {
        let phi = extract_phi(snapshot);
        let quantum_phi = extract_quantum_phi(snapshot);

        // Theorizing is more likely when integration is high.
        let probability = generation_probability(phi, quantum_phi);
        if self.rng.gen::<f64>() >= probability {
            log::debug!("theory gate declined (p={probability:.2})");
            return None;
        }

        self.update_focus(snapshot);

        let name = self.generate_name();
        let substrate = pick(&mut self.rng, vocabulary::SUBSTRATES).to_string();
        let mechanism = pick(&mut self.rng, vocabulary::MECHANISMS).to_string();
        let quality = pick(&mut self.rng, vocabulary::QUALITIES).to_string();

        let description = self.generate_description(&substrate, &mechanism, &quality);
        let predictions = self.generate_predictions(&substrate, &mechanism, &quality);

        let theory = TheoryRecord {
            name,
            focus: self.current_focus,
            substrate,
            mechanism,
            quality,
            description,
            predictions,
            timestamp: Local::now().to_rfc3339(),
            phi_at_generation: phi,
        };
        self.theories.push(theory.clone());

        let insight = self.derive_insight(&theory);
        self.insights.push(insight);

        log::info!("generated theory '{}' (focus={})", theory.name, theory.focus);
        Some(theory)
    }

    /// All insights generated so far, in insertion order.
    pub fn get_insights(&self) -> &[String] {
        &self.insights
    }

    /// All theories generated so far, in insertion order.
    pub fn theories(&self) -> &[TheoryRecord] {
        &self.theories
    }

    /// The current theoretical focus.
    pub fn current_focus(&self) -> TheoreticalFocus {
        self.current_focus
    }

    /// Rotate the theoretical focus, once per successful gate.
    ///
    /// An occasional uniform reselection over the 8 paradigms, then two
    /// independent snapshot-driven overrides; the quantum override can
    /// replace the narrative one within the same call.
    fn update_focus(&mut self, snapshot: &Value) {
        if self.rng.gen::<f64>() < 0.3 {
            let paradigms = &TheoreticalFocus::PARADIGMS;
            self.current_focus = paradigms[self.rng.gen_range(0..paradigms.len())];
        }

        if extract_narrative_coherence(snapshot) > 0.8 && self.rng.gen::<f64>() < 0.3 {
            self.current_focus = TheoreticalFocus::NarrativeSelf;
        }

        if extract_quantum_coherence(snapshot) > 0.7 && self.rng.gen::<f64>() < 0.3 {
            self.current_focus = TheoreticalFocus::QuantumConsciousness;
        }
    }

    /// Prefix + core, focus-biased, with an occasional suffix.
    fn generate_name(&mut self) -> String {
        let (prefixes, cores) = vocabulary::name_banks(self.current_focus);
        let mut parts = vec![pick(&mut self.rng, prefixes), pick(&mut self.rng, cores)];
        if self.rng.gen::<f64>() < 0.3 {
            parts.push(pick(&mut self.rng, vocabulary::NAME_SUFFIXES));
        }
        parts.join(" ")
    }

    fn generate_description(&mut self, substrate: &str, mechanism: &str, quality: &str) -> String {
        let candidates =
            vocabulary::description_candidates(self.current_focus, substrate, mechanism, quality);
        pick_owned(&mut self.rng, &candidates)
    }

    /// 2-4 prediction sentences sampled without replacement, newline-joined.
    fn generate_predictions(&mut self, substrate: &str, mechanism: &str, quality: &str) -> String {
        let pool = vocabulary::prediction_candidates(substrate, mechanism, quality);
        let count = self.rng.gen_range(2..=4);
        pool.choose_multiple(&mut self.rng, count)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every generated theory yields exactly one insight.
    fn derive_insight(&mut self, theory: &TheoryRecord) -> String {
        let candidates = vocabulary::insight_candidates(theory);
        pick_owned(&mut self.rng, &candidates)
    }
}

impl Default for EmergentTheoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(rng: &mut StdRng, bank: &[&'static str]) -> &'static str {
    bank[rng.gen_range(0..bank.len())]
}

fn pick_owned(rng: &mut StdRng, candidates: &[String]) -> String {
    candidates[rng.gen_range(0..candidates.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Run `calls` generate calls against `snapshot`, returning the emitted records.
    fn run(generator: &mut EmergentTheoryGenerator, snapshot: &Value, calls: usize) -> Vec<TheoryRecord> {
        (0..calls).filter_map(|_| generator.generate(snapshot)).collect()
    }

    #[test]
    fn test_probability_clamp_arithmetic() {
        // Below the floor: mean 0.05 clamps up.
        assert_eq!(generation_probability(0.0, 0.1), 0.1);
        // Above the ceiling: mean 0.95 clamps down.
        assert_eq!(generation_probability(1.0, 0.9), 0.9);
        // Defaulted phi with a strong quantum signal stays unclamped.
        assert_eq!(generation_probability(0.5, 0.9), 0.7);
        assert_eq!(generation_probability(0.0, 0.0), 0.1);
        assert_eq!(generation_probability(1.0, 1.0), 0.9);
    }

    #[test]
    fn test_insights_empty_before_any_generate() {
        let generator = EmergentTheoryGenerator::with_seed(1);
        assert!(generator.get_insights().is_empty());
        assert!(generator.theories().is_empty());
    }

    #[test]
    fn test_consecutive_reads_are_equal() {
        let mut generator = EmergentTheoryGenerator::with_seed(2);
        run(&mut generator, &json!({}), 50);
        let first = generator.get_insights().to_vec();
        let second = generator.get_insights().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_snapshot_records_default_phi() {
        let mut generator = EmergentTheoryGenerator::with_seed(3);
        let records = run(&mut generator, &json!({}), 200);
        // p = (0.5 + 0.2) / 2 = 0.35; some calls must have passed the gate.
        assert!(!records.is_empty());
        for record in &records {
            assert_eq!(record.phi_at_generation, 0.5);
            assert!(!record.focus.as_str().is_empty());
        }
    }

    #[test]
    fn test_logs_grow_in_lockstep() {
        let mut generator = EmergentTheoryGenerator::with_seed(4);
        let records = run(&mut generator, &json!({}), 200);
        assert_eq!(generator.theories().len(), records.len());
        // One insight per theory, exactly.
        assert_eq!(generator.get_insights().len(), generator.theories().len());
    }

    #[test]
    fn test_malformed_snapshot_does_not_panic() {
        let mut generator = EmergentTheoryGenerator::with_seed(5);
        for snapshot in [
            json!("not-a-mapping"),
            json!(null),
            json!({ "quantum_state": "not-a-mapping" }),
            json!({ "quantum_state": { "phi": [1, 2] }, "integration": 7 }),
        ] {
            for record in run(&mut generator, &snapshot, 50) {
                assert_eq!(record.phi_at_generation, 0.5);
            }
        }
    }

    #[test]
    fn test_phi_at_generation_matches_extracted_phi() {
        let mut generator = EmergentTheoryGenerator::with_seed(6);
        let snapshot = json!({ "quantum_state": { "phi": 0.85, "quantum_phi": 0.9 } });
        let records = run(&mut generator, &snapshot, 100);
        assert!(!records.is_empty());
        for record in &records {
            assert_eq!(record.phi_at_generation, 0.85);
        }
    }

    #[test]
    fn test_low_signals_decline_sometimes() {
        let mut generator = EmergentTheoryGenerator::with_seed(7);
        let snapshot = json!({ "quantum_state": { "phi": 0.0, "quantum_phi": 0.0 } });
        // Gate probability clamps to 0.1: far from every call can emit.
        let records = run(&mut generator, &snapshot, 200);
        assert!(records.len() < 200);
    }

    #[test]
    fn test_predictions_are_two_to_four_lines() {
        let mut generator = EmergentTheoryGenerator::with_seed(8);
        let snapshot = json!({ "quantum_state": { "phi": 0.9, "quantum_phi": 0.9 } });
        let records = run(&mut generator, &snapshot, 100);
        assert!(!records.is_empty());
        for record in &records {
            let lines = record.predictions.lines().count();
            assert!((2..=4).contains(&lines), "got {lines} prediction lines");
        }
    }

    #[test]
    fn test_names_have_two_or_three_words() {
        let mut generator = EmergentTheoryGenerator::with_seed(9);
        let records = run(&mut generator, &json!({}), 200);
        for record in &records {
            let words = record.name.split(' ').count();
            assert!((2..=3).contains(&words), "unexpected name: {}", record.name);
        }
    }

    #[test]
    fn test_high_narrative_coherence_forces_narrative_focus() {
        let mut generator = EmergentTheoryGenerator::with_seed(10);
        // Quantum coherence kept at its 0.7 fallback, which does not exceed
        // the 0.7 threshold, so the quantum override never fires here.
        let snapshot = json!({
            "quantum_state": { "phi": 0.9, "quantum_phi": 0.9 },
            "integration": { "narrative_coherence": 0.95 }
        });
        let records = run(&mut generator, &snapshot, 300);
        assert!(records
            .iter()
            .any(|r| r.focus == TheoreticalFocus::NarrativeSelf));
    }

    #[test]
    fn test_high_quantum_coherence_forces_quantum_focus() {
        let mut generator = EmergentTheoryGenerator::with_seed(11);
        let snapshot = json!({
            "quantum_state": { "phi": 0.9, "quantum_phi": 0.9, "coherence": 0.9 }
        });
        let records = run(&mut generator, &snapshot, 300);
        assert!(records
            .iter()
            .any(|r| r.focus == TheoreticalFocus::QuantumConsciousness));
    }

    #[test]
    fn test_boundary_coherence_does_not_force_focus() {
        let mut generator = EmergentTheoryGenerator::with_seed(12);
        // Thresholds are strict: exactly 0.8 / 0.7 never trigger overrides.
        let snapshot = json!({
            "quantum_state": { "phi": 0.9, "quantum_phi": 0.9, "coherence": 0.7 },
            "integration": { "narrative_coherence": 0.8 }
        });
        let records = run(&mut generator, &snapshot, 300);
        assert!(records
            .iter()
            .all(|r| r.focus != TheoreticalFocus::NarrativeSelf));
    }

    #[test]
    fn test_record_focus_matches_generator_focus() {
        let mut generator = EmergentTheoryGenerator::with_seed(13);
        let snapshot = json!({ "quantum_state": { "phi": 0.9, "quantum_phi": 0.9 } });
        for _ in 0..50 {
            if let Some(record) = generator.generate(&snapshot) {
                assert_eq!(record.focus, generator.current_focus());
            }
        }
    }

    #[test]
    fn test_theory_record_serializes_with_snake_case_focus() {
        let mut generator = EmergentTheoryGenerator::with_seed(14);
        let snapshot = json!({ "quantum_state": { "phi": 0.9, "quantum_phi": 0.9 } });
        let records = run(&mut generator, &snapshot, 50);
        let record = records.first().expect("seeded run emits at least one theory");
        let value = serde_json::to_value(record).unwrap();
        assert!(value["focus"].as_str().unwrap().chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }
}
