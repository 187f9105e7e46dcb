//! Step state of a single progress step.
//!
//! The state is an externally driven value: the step element consumes it to
//! pick an icon but never transitions it on its own.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// State of a progress step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StepState {
    /// One for future execution.
    #[default]
    Queued,

    /// One that is being executed now.
    Current,

    /// Complete one.
    Complete,

    /// Invalid one.
    Invalid,
}

impl StepState {
    /// Every state, in the order a step usually moves through them.
    pub const ALL: [StepState; 4] = [Self::Queued, Self::Current, Self::Complete, Self::Invalid];

    /// The attribute value for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Current => "current",
            Self::Complete => "complete",
            Self::Invalid => "invalid",
        }
    }

    /// `true` for a step that is done.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// `true` for a step that needs attention. Only these get a class hint.
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the four step states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized progress step state '{value}' (expected queued, current, complete or invalid)")]
pub struct ParseStateError {
    pub value: String,
}

impl FromStr for StepState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "current" => Ok(Self::Current),
            "complete" => Ok(Self::Complete),
            "invalid" => Ok(Self::Invalid),
            other => Err(ParseStateError {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StepState {
    type Error = ParseStateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StepState> for String {
    fn from(state: StepState) -> Self {
        state.as_str().to_string()
    }
}
