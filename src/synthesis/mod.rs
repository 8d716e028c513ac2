//! Persona synthesis — two producers behind one trait.
//!
//! The heuristic synthesizer is deterministic and total; the AI synthesizer
//! prompts an external model and falls back to the heuristic on any failure.
//! The pipeline only sees `PersonaSynthesizer`, so it is agnostic to which ran.

pub mod ai;
pub mod heuristic;

pub use ai::AiSynthesizer;
pub use heuristic::HeuristicSynthesizer;

use crate::generation::TextGenerator;
use crate::model::UserDataset;

/// A producer of persona text. Implementations never fail — worst case is
/// the heuristic report.
pub trait PersonaSynthesizer {
    fn synthesize(&self, dataset: &UserDataset) -> String;
}

/// Pick a synthesizer for the (possibly absent) generation capability.
pub fn for_generator(generator: Option<Box<dyn TextGenerator>>) -> Box<dyn PersonaSynthesizer> {
    match generator {
        Some(g) => Box::new(AiSynthesizer::new(g)),
        None => {
            tracing::info!("No text generator configured, using heuristic synthesis");
            Box::new(HeuristicSynthesizer)
        }
    }
}
