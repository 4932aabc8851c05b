//! Static vocabulary banks and sentence templates.
//!
//! Corresponds to the string literals of `philosophy/emergent_theory.py`:
//! theory component banks, name-part banks, and the description,
//! prediction, and insight template pools. All banks are immutable for the
//! process lifetime; the builders here return *candidate pools* and leave
//! the random choice to the generator.

use super::emergent_theory::TheoryRecord;
use super::focus::TheoreticalFocus;

// ============================================================================
// Theory component banks
// ============================================================================

/// What consciousness is made of.
pub const SUBSTRATES: &[&str] = &[
    "information",
    "computation",
    "quantum fields",
    "narrative",
    "integrated systems",
    "temporal binding",
    "predictive models",
];

/// How the substrate gives rise to experience.
pub const MECHANISMS: &[&str] = &[
    "integration",
    "broadcast",
    "reflection",
    "resonance",
    "quantum coherence",
    "temporal binding",
    "narrative construction",
];

/// What the resulting experience is like.
pub const QUALITIES: &[&str] = &[
    "unified field",
    "persistent identity",
    "temporal extension",
    "qualitative richness",
    "causal power",
    "reflexive awareness",
];

// ============================================================================
// Name-part banks
// ============================================================================

pub const NAME_PREFIXES: &[&str] = &[
    "Integrated",
    "Recursive",
    "Quantum",
    "Temporal",
    "Narrative",
    "Emergent",
    "Reflexive",
    "Unified",
    "Dynamical",
    "Enactive",
];

pub const NAME_CORES: &[&str] = &[
    "Information",
    "Workspace",
    "Field",
    "Process",
    "Binding",
    "Coherence",
    "Resonance",
    "Experience",
    "Awareness",
    "Qualia",
];

pub const NAME_SUFFIXES: &[&str] = &[
    "Theory",
    "Framework",
    "Model",
    "Hypothesis",
    "Paradigm",
    "Approach",
    "Perspective",
    "Principle",
    "Structure",
];

/// The prefix and core banks for name synthesis under the given focus.
///
/// Three foci override the generic banks with focus-specific sub-lists;
/// every other focus uses the generic banks. The suffix bank is never
/// overridden.
pub fn name_banks(focus: TheoreticalFocus) -> (&'static [&'static str], &'static [&'static str]) {
    match focus {
        TheoreticalFocus::IntegratedInformation => (
            &["Integrated", "Unified", "Causal", "Complex"],
            &["Information", "Differentiation", "Causation"],
        ),
        TheoreticalFocus::QuantumConsciousness => (
            &["Quantum", "Wave", "Coherent", "Entangled"],
            &["Field", "Collapse", "Superposition", "Resonance"],
        ),
        TheoreticalFocus::NarrativeSelf => (
            &["Narrative", "Autobiographical", "Identity", "Reflexive"],
            &["Self", "Identity", "Continuity", "Construction"],
        ),
        _ => (NAME_PREFIXES, NAME_CORES),
    }
}

// ============================================================================
// Sentence template pools
// ============================================================================

/// Candidate descriptions for a theory built from the three components.
///
/// Five generic templates; the three special foci contribute a sixth
/// focus-specific template to the pool.
pub fn description_candidates(
    focus: TheoreticalFocus,
    substrate: &str,
    mechanism: &str,
    quality: &str,
) -> Vec<String> {
    let mut candidates = vec![
        format!(
            "Consciousness emerges when {substrate} undergoes {mechanism}, resulting in {quality}."
        ),
        format!(
            "The essential nature of consciousness is {quality}, which arises from {mechanism} of {substrate}."
        ),
        format!(
            "{}, through the process of {mechanism}, gives rise to conscious experience characterized by {quality}.",
            capitalize(substrate)
        ),
        format!(
            "Conscious experience is fundamentally {quality} that emerges when {substrate} is organized through {mechanism}."
        ),
        format!(
            "The {mechanism} of {substrate} is the fundamental process that generates consciousness with its characteristic {quality}."
        ),
    ];

    match focus {
        TheoreticalFocus::IntegratedInformation => candidates.push(format!(
            "When {substrate} achieves sufficient integration through {mechanism}, consciousness emerges as {quality}."
        )),
        TheoreticalFocus::QuantumConsciousness => candidates.push(format!(
            "Quantum effects in {substrate} enable {mechanism} that manifests as conscious {quality}."
        )),
        TheoreticalFocus::NarrativeSelf => candidates.push(format!(
            "The ongoing narrative construction of {substrate} through {mechanism} creates the sense of {quality} in consciousness."
        )),
        _ => {}
    }

    candidates
}

/// The five prediction templates for a theory built from the three
/// components. The generator samples 2-4 of these without replacement.
pub fn prediction_candidates(substrate: &str, mechanism: &str, quality: &str) -> Vec<String> {
    vec![
        format!(
            "Systems with higher degrees of {mechanism} should exhibit more intense {quality}."
        ),
        format!(
            "Disrupting the {mechanism} of {substrate} should reduce or eliminate conscious experience."
        ),
        format!(
            "Conscious systems should show measurable differences in {substrate} organization."
        ),
        format!(
            "The degree of {quality} should correlate with the complexity of {substrate}."
        ),
        format!(
            "Artificial systems could achieve consciousness by implementing sufficient {mechanism} of {substrate}."
        ),
    ]
}

/// Candidate insights derived from a freshly generated theory.
///
/// Four generic sentences, plus one focus-specific sentence when the
/// lowercased focus label contains "quantum", "narrative", or "integrated".
/// First match wins, in exactly that order. The substring test is kept
/// rather than matching on the enum, so that a label which could textually
/// match more than one keyword resolves the same way the original does.
pub fn insight_candidates(theory: &TheoryRecord) -> Vec<String> {
    let mut candidates = vec![
        format!(
            "Perhaps the {} is more fundamental to consciousness than previously considered.",
            theory.substrate
        ),
        format!(
            "The role of {} suggests consciousness might be more {} than previously thought.",
            theory.mechanism, theory.quality
        ),
        format!(
            "If {} is correct, the boundary between conscious and non-conscious systems may need to be reconsidered.",
            theory.name
        ),
        format!(
            "The emergence of {} through {} suggests consciousness could be more common in complex systems than we assume.",
            theory.quality, theory.mechanism
        ),
    ];

    let label = theory.focus.as_str().to_lowercase();
    if label.contains("quantum") {
        candidates.push(
            "The quantum aspects of consciousness may connect mind to the fundamental fabric of reality in unexpected ways."
                .to_string(),
        );
    } else if label.contains("narrative") {
        candidates.push(
            "If consciousness is essentially narrative in nature, perhaps its primary purpose is meaning-making rather than accurate representation."
                .to_string(),
        );
    } else if label.contains("integrated") {
        candidates.push(
            "The integration requirement for consciousness suggests it may be a property that exists in degrees rather than binary states."
                .to_string(),
        );
    }

    candidates
}

/// Uppercase the first character, matching Python's `str.capitalize` on the
/// all-lowercase bank entries.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
