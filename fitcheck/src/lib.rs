//! Fitness self-assessment scoring.
//!
//! Six physical tests are scored against a fixed, versioned threshold table,
//! paired tests are checked for left/right asymmetry, and the results are
//! averaged into an overall band. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic scoring (tiers, thresholds, symmetry,
//!   aggregation). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting boundary (input files, config, report and
//!   share rendering).
//!
//! [`assess`] wires the two together for the CLI commands.

pub mod assess;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
