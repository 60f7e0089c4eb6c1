//! Stable exit codes for fitcheck CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed for a reason other than the input itself (I/O, config, rendering).
pub const ERROR: i32 = 1;
/// Input was missing, malformed or out of range; nothing was evaluated.
pub const INVALID_INPUT: i32 = 2;
