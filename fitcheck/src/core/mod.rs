//! Deterministic, pure scoring logic.
//!
//! Core modules must be free of I/O side effects. They map validated
//! measurements to tiers, scores and recommendations and return values
//! suitable for tests.

pub mod aggregate;
pub mod evaluators;
pub mod invariants;
pub mod recommendations;
pub mod symmetry;
pub mod thresholds;
pub mod tier;
pub mod types;
