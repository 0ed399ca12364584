//! Integration tests for the recipe book
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod persistence;
pub mod recipe_flow;
pub mod tui_render;
