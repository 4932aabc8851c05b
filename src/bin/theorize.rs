//! ConsAI theory-generation demo binary.
//!
//! Feeds a system-state snapshot to the emergent theory generator for a
//! number of ticks and prints the accumulated theories and insights.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` — log filter (e.g. `consai=debug`)
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin theorize [snapshot.json] [ticks]
//! ```

use anyhow::{Context, Result};
use consai::EmergentTheoryGenerator;
use serde_json::{json, Value};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let snapshot: Value = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading snapshot file {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing snapshot file {path}"))?
        }
        None => json!({
            "quantum_state": { "phi": 0.8, "quantum_phi": 0.6, "coherence": 0.75 },
            "integration": { "narrative_coherence": 0.85 }
        }),
    };
    let ticks: usize = args
        .next()
        .map(|t| t.parse())
        .transpose()
        .context("parsing tick count")?
        .unwrap_or(20);

    let mut generator = EmergentTheoryGenerator::new();
    for tick in 0..ticks {
        if let Some(theory) = generator.generate(&snapshot) {
            println!("[tick {tick}] {} ({})", theory.name, theory.focus);
            println!("  {}", theory.description);
            for prediction in theory.predictions.lines() {
                println!("  - {prediction}");
            }
        }
    }

    println!(
        "\n{} theories, {} insights",
        generator.theories().len(),
        generator.get_insights().len()
    );
    for insight in generator.get_insights() {
        println!("* {insight}");
    }

    Ok(())
}
