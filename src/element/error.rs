//! Errors raised by the step element.

use crate::core::ParseStateError;
use crate::settings::SettingsError;
use thiserror::Error;

/// Errors that can occur when configuring or updating a progress step.
#[derive(Debug, Error)]
pub enum ElementError {
    #[error(transparent)]
    InvalidState(#[from] ParseStateError),

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}
