//! Thread-safe wrapper around the theory generator.
//!
//! The core [`EmergentTheoryGenerator`] documents single-threaded-caller
//! use; its two logs and focus field are unsynchronized shared mutable
//! state. Hosts that theorize from multiple threads use this wrapper
//! instead: one mutex held for the full duration of a `generate` call.
//! Each call is bounded and cheap, so finer-grained locking buys nothing.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use super::emergent_theory::{EmergentTheoryGenerator, TheoryRecord};
use super::focus::TheoreticalFocus;

/// Clonable handle to a mutex-guarded [`EmergentTheoryGenerator`].
#[derive(Clone)]
pub struct SharedTheoryGenerator {
    inner: Arc<Mutex<EmergentTheoryGenerator>>,
}

impl SharedTheoryGenerator {
    pub fn new() -> Self {
        Self::from_generator(EmergentTheoryGenerator::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_generator(EmergentTheoryGenerator::with_seed(seed))
    }

    fn from_generator(generator: EmergentTheoryGenerator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Generate under the lock; see [`EmergentTheoryGenerator::generate`].
    pub fn generate(&self, snapshot: &Value) -> Option<TheoryRecord> {
        self.inner.lock().generate(snapshot)
    }

    /// Owned copy of the insight log — borrows cannot escape the lock.
    pub fn get_insights(&self) -> Vec<String> {
        self.inner.lock().get_insights().to_vec()
    }

    /// Owned copy of the theory log.
    pub fn theories(&self) -> Vec<TheoryRecord> {
        self.inner.lock().theories().to_vec()
    }

    pub fn current_focus(&self) -> TheoreticalFocus {
        self.inner.lock().current_focus()
    }
}

impl Default for SharedTheoryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
