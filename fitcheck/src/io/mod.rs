//! I/O helpers for fitcheck commands.

pub mod config;
pub mod input;
pub mod report;
pub mod share;
