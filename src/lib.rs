//! Progress step: one step of a multi-step progress indicator.
//!
//! A step shows an icon for its state, a primary label, an optional secondary
//! label and a line leading to the next step. The crate is split the same
//! way: a pure core and an element that keeps its output in sync with its
//! attributes.
//!
//! # Core Concepts
//!
//! - **State**: `StepState` is one of `queued`, `current`, `complete` or `invalid`
//! - **Registry**: `icons::render_icon` maps each state to exactly one icon
//! - **Element**: `ProgressStep` holds attributes and caller content, and
//!   re-renders synchronously after every change while attached
//! - **Markup**: rendering produces a plain `markup::Node` tree
//!
//! Ordering several steps into an indicator is left to the owner.
//!
//! # Example
//!
//! ```rust
//! use progress_step::core::StepState;
//! use progress_step::ProgressStep;
//!
//! let mut step = ProgressStep::default();
//! step.set_state(StepState::Invalid);
//! step.set_icon_label("Error");
//! step.set_secondary_label_text("Retry required");
//! step.connect();
//!
//! let html = step.inner_html();
//! assert!(html.contains("<title>Error</title>"));
//! assert!(html.contains("bx--progress__warning"));
//! assert!(html.contains("Retry required"));
//! ```

pub mod core;
pub mod element;
pub mod icons;
pub mod markup;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{ParseStateError, StepState};
pub use element::{ElementError, ProgressStep, StepAttributes};
pub use settings::Settings;
