//! Utility modules for ConsAI.

pub mod state;
