//! The observed attribute set of a progress step.

use crate::core::{Attribute, ParseStateError, StepState};
use serde::{Deserialize, Serialize};

/// Snapshot of a progress step's observed attributes.
///
/// Field names serialize as the host attribute names (`icon-label`,
/// `label-text`, ...), so a snapshot can be written or read as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StepAttributes {
    /// `true` if the progress step should be disabled.
    pub disabled: bool,

    /// The a11y text for the icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_label: Option<String>,

    /// The primary progress label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,

    /// The secondary progress label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_label_text: Option<String>,

    /// The progress state.
    pub state: StepState,

    /// `true` if the progress step should be vertical.
    pub vertical: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl StepAttributes {
    /// Icon label, if set and non-empty.
    pub fn icon_label(&self) -> Option<&str> {
        non_empty(&self.icon_label)
    }

    /// Primary label, if set and non-empty.
    pub fn label_text(&self) -> Option<&str> {
        non_empty(&self.label_text)
    }

    /// Secondary label, if set and non-empty.
    pub fn secondary_label_text(&self) -> Option<&str> {
        non_empty(&self.secondary_label_text)
    }

    /// Apply a host attribute value to the matching field.
    ///
    /// `None` means the attribute was removed. Boolean attributes are `true`
    /// whenever present, whatever their value. Returns whether the field
    /// changed. An unknown `state` value is rejected and nothing changes.
    pub fn apply(
        &mut self,
        attribute: Attribute,
        value: Option<&str>,
    ) -> Result<bool, ParseStateError> {
        let changed = match attribute {
            Attribute::Disabled => replace(&mut self.disabled, value.is_some()),
            Attribute::Vertical => replace(&mut self.vertical, value.is_some()),
            Attribute::IconLabel => replace(&mut self.icon_label, value.map(str::to_string)),
            Attribute::LabelText => replace(&mut self.label_text, value.map(str::to_string)),
            Attribute::SecondaryLabelText => replace(
                &mut self.secondary_label_text,
                value.map(str::to_string),
            ),
            Attribute::State => {
                let state = match value {
                    Some(v) => v.parse()?,
                    None => StepState::default(),
                };
                replace(&mut self.state, state)
            }
        };
        Ok(changed)
    }
}

/// Store `value` in `slot`, returning whether it differed.
pub(crate) fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_attribute_table() {
        let attrs = StepAttributes::default();
        assert!(!attrs.disabled);
        assert_eq!(attrs.icon_label, None);
        assert_eq!(attrs.label_text, None);
        assert_eq!(attrs.secondary_label_text, None);
        assert_eq!(attrs.state, StepState::Queued);
        assert!(!attrs.vertical);
    }

    #[test]
    fn empty_strings_read_as_unset() {
        let attrs = StepAttributes {
            icon_label: Some(String::new()),
            label_text: Some(String::new()),
            secondary_label_text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(attrs.icon_label(), None);
        assert_eq!(attrs.label_text(), None);
        assert_eq!(attrs.secondary_label_text(), None);
    }

    #[test]
    fn boolean_attribute_presence_means_true() {
        let mut attrs = StepAttributes::default();

        assert!(attrs.apply(Attribute::Disabled, Some("false")).unwrap());
        assert!(attrs.disabled);

        assert!(attrs.apply(Attribute::Disabled, None).unwrap());
        assert!(!attrs.disabled);
    }

    #[test]
    fn apply_reports_unchanged_values() {
        let mut attrs = StepAttributes::default();
        assert!(attrs.apply(Attribute::LabelText, Some("Step 1")).unwrap());
        assert!(!attrs.apply(Attribute::LabelText, Some("Step 1")).unwrap());
    }

    #[test]
    fn apply_parses_state() {
        let mut attrs = StepAttributes::default();
        assert!(attrs.apply(Attribute::State, Some("complete")).unwrap());
        assert_eq!(attrs.state, StepState::Complete);

        assert!(attrs.apply(Attribute::State, None).unwrap());
        assert_eq!(attrs.state, StepState::Queued);
    }

    #[test]
    fn apply_rejects_unknown_state_without_changing() {
        let mut attrs = StepAttributes {
            state: StepState::Current,
            ..Default::default()
        };
        let err = attrs.apply(Attribute::State, Some("skipped")).unwrap_err();

        assert_eq!(err.value, "skipped");
        assert_eq!(attrs.state, StepState::Current);
    }

    #[test]
    fn serializes_with_attribute_names() {
        let attrs = StepAttributes {
            label_text: Some("Step 2".to_string()),
            state: StepState::Current,
            ..Default::default()
        };
        let json = serde_json::to_value(&attrs).unwrap();

        assert_eq!(json["label-text"], "Step 2");
        assert_eq!(json["state"], "current");
        assert!(json.get("icon-label").is_none());
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let attrs: StepAttributes =
            serde_json::from_str(r#"{ "state": "invalid", "icon-label": "Error" }"#).unwrap();

        assert_eq!(attrs.state, StepState::Invalid);
        assert_eq!(attrs.icon_label(), Some("Error"));
        assert!(!attrs.disabled);
    }
}
