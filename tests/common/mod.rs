//! Shared test utilities for the recipe book
//!
//! - Fixed clocks and on-disk slots
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
