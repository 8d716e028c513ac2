//! Persona Gen — personality profiles from public Reddit activity.
//!
//! Single-crate library: fetch a user's recent posts and comments, distill
//! them into an evidence digest, synthesize a persona (AI-backed with a
//! deterministic heuristic fallback) and write it to a file.

pub mod config;
pub mod constants;
pub mod digest;
pub mod error;
pub mod generation;
pub mod model;
pub mod output;
pub mod processing;
pub mod source;
pub mod synthesis;
pub mod tracing_init;

#[cfg(test)]
pub mod test_helpers;

// Re-exports for convenience
pub use error::{PersonaError, PersonaResult};
