//! Theoretical focus labels.
//!
//! Corresponds to the `theoretical_paradigms` list and `current_focus`
//! field of `philosophy/emergent_theory.py`.

use serde::{Deserialize, Serialize};

/// The generator's current theoretical focus.
///
/// Eight paradigms participate in uniform reselection; `NarrativeSelf` is
/// reachable only through the forced narrative-coherence transition and is
/// never drawn from [`TheoreticalFocus::PARADIGMS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TheoreticalFocus {
    IntegratedInformation,
    GlobalWorkspace,
    HigherOrderThought,
    PredictiveProcessing,
    QuantumConsciousness,
    Enactivism,
    Panpsychism,
    Eliminativism,
    NarrativeSelf,
}

impl TheoreticalFocus {
    /// The 8 paradigms eligible for uniform focus reselection.
    pub const PARADIGMS: [TheoreticalFocus; 8] = [
        Self::IntegratedInformation,
        Self::GlobalWorkspace,
        Self::HigherOrderThought,
        Self::PredictiveProcessing,
        Self::QuantumConsciousness,
        Self::Enactivism,
        Self::Panpsychism,
        Self::Eliminativism,
    ];

    /// The snake_case label, matching the Python string values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IntegratedInformation => "integrated_information",
            Self::GlobalWorkspace => "global_workspace",
            Self::HigherOrderThought => "higher_order_thought",
            Self::PredictiveProcessing => "predictive_processing",
            Self::QuantumConsciousness => "quantum_consciousness",
            Self::Enactivism => "enactivism",
            Self::Panpsychism => "panpsychism",
            Self::Eliminativism => "eliminativism",
            Self::NarrativeSelf => "narrative_self",
        }
    }
}

impl Default for TheoreticalFocus {
    /// The starting theoretical focus.
    fn default() -> Self {
        Self::IntegratedInformation
    }
}

impl std::fmt::Display for TheoreticalFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
