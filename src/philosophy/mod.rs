//! Philosophy modules — emergent theorizing about consciousness.
//!
//! Corresponds to `philosophy/` in the Python original. Only the emergent
//! theory generator is ported here; the narrative-self, quantum, and
//! temporal stubs stay with the Python project.
//!
//! # Architecture
//!
//! ```text
//! SystemStateSnapshot (serde_json::Value, caller-supplied)
//!   ↓  extract-or-default numeric signals
//! EmergentTheoryGenerator
//!   ↓  Bernoulli gate + focus transition + vocabulary sampling
//! TheoryRecord → theories log
//!   ↓  insight derivation
//! String → insights log
//! ```

pub mod emergent_theory;
pub mod focus;
pub mod shared;
pub mod vocabulary;

// Re-exports
pub use emergent_theory::{generation_probability, EmergentTheoryGenerator, TheoryRecord};
pub use focus::TheoreticalFocus;
pub use shared::SharedTheoryGenerator;
