//! Configuration shared by the icon registry and the step element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Class and tag prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "bx";

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prefix must be non-empty and contain only ASCII letters, digits or '-' (got '{0}')")]
    InvalidPrefix(String),
}

/// Naming settings for rendered markup.
///
/// # Example
///
/// ```rust
/// use progress_step::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.tag_name(), "bx-progress-step");
/// assert_eq!(settings.class("progress-line"), "bx--progress-line");
///
/// let custom = Settings::from_json(r#"{ "prefix": "cds" }"#).unwrap();
/// assert_eq!(custom.class("progress__warning"), "cds--progress__warning");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix for class names and the element's tag name.
    pub prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Settings with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, SettingsError> {
        let settings = Self {
            prefix: prefix.into(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let valid = !self.prefix.is_empty()
            && self
                .prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if valid {
            Ok(())
        } else {
            Err(SettingsError::InvalidPrefix(self.prefix.clone()))
        }
    }

    /// Tag name the step element is registered under.
    pub fn tag_name(&self) -> String {
        format!("{}-progress-step", self.prefix)
    }

    /// A prefixed class name, e.g. `bx--progress-label`.
    pub fn class(&self, name: &str) -> String {
        format!("{}--{}", self.prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_is_bx() {
        assert_eq!(Settings::default().prefix, "bx");
    }

    #[test]
    fn empty_json_uses_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn json_prefix_is_used() {
        let settings = Settings::from_json(r#"{"prefix":"cds"}"#).unwrap();
        assert_eq!(settings.tag_name(), "cds-progress-step");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = Settings::from_json("{ prefix: ");
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        assert!(matches!(
            Settings::with_prefix(""),
            Err(SettingsError::InvalidPrefix(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"prefix":"a b"}"#),
            Err(SettingsError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn class_joins_with_double_dash() {
        let settings = Settings::default();
        assert_eq!(settings.class("progress-optional"), "bx--progress-optional");
    }
}
