//! Extract-or-default numeric lookups over system-state snapshots.
//!
//! Corresponds to `_extract_phi_value` and friends in
//! `philosophy/emergent_theory.py`. A snapshot is an arbitrary
//! `serde_json::Value`; every lookup resolves to a definite f64. A missing
//! key, a container that is not an object, or a value that is neither a
//! number nor a numeric string substitutes the documented default. Nothing
//! here can fail.

use serde_json::Value;

/// Default Phi when `quantum_state.phi` is absent or malformed.
pub const DEFAULT_PHI: f64 = 0.5;

/// Default quantum Phi when `quantum_state.quantum_phi` is absent or malformed.
pub const DEFAULT_QUANTUM_PHI: f64 = 0.2;

/// Default when `integration.narrative_coherence` is absent or malformed.
pub const DEFAULT_NARRATIVE_COHERENCE: f64 = 0.0;

/// Default when `quantum_state.coherence` is absent or malformed.
pub const DEFAULT_QUANTUM_COHERENCE: f64 = 0.7;

/// Look up `snapshot[container][key]` as an f64, falling back to `default`.
pub fn numeric_or(snapshot: &Value, container: &str, key: &str, default: f64) -> f64 {
    snapshot
        .get(container)
        .and_then(Value::as_object)
        .and_then(|obj| obj.get(key))
        .and_then(coerce_f64)
        .unwrap_or(default)
}

/// JSON numbers pass through; numeric strings parse; everything else is None.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn extract_phi(snapshot: &Value) -> f64 {
    numeric_or(snapshot, "quantum_state", "phi", DEFAULT_PHI)
}

pub fn extract_quantum_phi(snapshot: &Value) -> f64 {
    numeric_or(snapshot, "quantum_state", "quantum_phi", DEFAULT_QUANTUM_PHI)
}

pub fn extract_narrative_coherence(snapshot: &Value) -> f64 {
    numeric_or(
        snapshot,
        "integration",
        "narrative_coherence",
        DEFAULT_NARRATIVE_COHERENCE,
    )
}

pub fn extract_quantum_coherence(snapshot: &Value) -> f64 {
    numeric_or(
        snapshot,
        "quantum_state",
        "coherence",
        DEFAULT_QUANTUM_COHERENCE,
    )
}
