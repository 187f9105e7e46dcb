//! Tracking of which observed attributes changed since the last update.
//!
//! A [`ChangeSet`] is what the element's update reaction inspects to decide
//! which side effects to run, the same way a reactive component receives the
//! set of changed properties after each batch of writes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An observed attribute of a progress step.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Disabled,
    IconLabel,
    LabelText,
    SecondaryLabelText,
    State,
    Vertical,
}

impl Attribute {
    /// Every observed attribute.
    pub const ALL: [Attribute; 6] = [
        Self::Disabled,
        Self::IconLabel,
        Self::LabelText,
        Self::SecondaryLabelText,
        Self::State,
        Self::Vertical,
    ];

    /// The attribute name as written on the host element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::IconLabel => "icon-label",
            Self::LabelText => "label-text",
            Self::SecondaryLabelText => "secondary-label-text",
            Self::State => "state",
            Self::Vertical => "vertical",
        }
    }

    /// Look up an observed attribute by its host attribute name.
    ///
    /// Returns `None` for names the element does not observe, such as `role`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of attributes changed since the last update.
///
/// Besides attributes, a change set can flag that the caller's content
/// changed, which requires a re-render but runs no attribute side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    attributes: BTreeSet<Attribute>,
    content: bool,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A change set naming every attribute, used for the first update.
    pub fn all() -> Self {
        Self {
            attributes: Attribute::ALL.into_iter().collect(),
            content: true,
        }
    }

    /// Record a changed attribute.
    pub fn record(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute);
    }

    /// Record that the caller's content changed.
    pub fn record_content(&mut self) {
        self.content = true;
    }

    /// Check whether an attribute changed.
    pub fn has(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Check whether the caller's content changed.
    pub fn has_content(&self) -> bool {
        self.content
    }

    /// `true` when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && !self.content
    }

    /// Changed attributes in a stable order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes.iter().copied()
    }

    /// Merge another change set into this one.
    pub fn merge(&mut self, other: ChangeSet) {
        self.attributes.extend(other.attributes);
        self.content |= other.content;
    }

    /// Take the recorded changes, leaving this set empty.
    pub fn take(&mut self) -> ChangeSet {
        std::mem::take(self)
    }
}
