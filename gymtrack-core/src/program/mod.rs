//! Program module for inspecting and editing the workout program.
//!
//! This module provides the main `Program` struct that owns the database
//! connection and exposes every command as a plan-then-apply pair.

mod catalog;
mod edits;
mod program;
mod workout;

pub use edits::{AddOptions, AddPlan, RemovePlan, ReorderPlan, SwapPlan};
pub use program::Program;
