//! Core types for a progress step.
//!
//! This module contains the pure values the rest of the crate is built on:
//! - The step state via `StepState`
//! - Attribute change tracking via `ChangeSet`
//!
//! Nothing in this module has side effects.

mod change;
mod state;

pub use change::{Attribute, ChangeSet};
pub use state::{ParseStateError, StepState};
