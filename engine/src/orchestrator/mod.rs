//! Orchestrator - one pure simulation pass
//!
//! Wires the cost model, payment models, and aim scoring into a single
//! `simulate` call producing a full results record.
//!
//! See `engine.rs` for the implementation.

pub mod engine;

// Re-export main entry points for convenience
pub use engine::{apply_feedback, simulate};
