//! # ConsAI - Rust Port
//!
//! A 1:1 Rust port of the ConsAI philosophy engine's emergent theory
//! generator: a component that composes novel philosophical theories of
//! consciousness from fixed vocabulary banks, driven by numeric signals
//! pulled out of an opaque system-state snapshot.
//!
//! The generator is deliberately tolerant at its boundary: the snapshot is
//! an arbitrary JSON value, missing or malformed fields fall back to
//! documented defaults, and no error ever crosses the component boundary.

pub mod philosophy;
pub mod utilities;

// Re-exports matching the Python package surface
pub use philosophy::emergent_theory::{
    generation_probability, EmergentTheoryGenerator, TheoryRecord,
};
pub use philosophy::focus::TheoreticalFocus;
pub use philosophy::shared::SharedTheoryGenerator;

/// Library version.
pub const VERSION: &str = "0.1.0";
