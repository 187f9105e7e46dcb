//! The progress step element.
//!
//! A [`ProgressStep`] owns its attribute set, the caller's content and the
//! attributes of its host node. Every write records what changed; when the
//! element is attached, the write is followed immediately by an update:
//!
//! 1. `aria-disabled` is republished if `disabled` changed
//! 2. `disabled` and `vertical` are reflected to host attributes
//! 3. the step is re-rendered from a snapshot of its attributes
//!
//! Writes made while detached are kept and applied on the next attach.
//!
//! # Example
//!
//! ```rust
//! use progress_step::core::StepState;
//! use progress_step::ProgressStep;
//!
//! let mut step = ProgressStep::default();
//! step.set_state(StepState::Current);
//! step.set_label_text("Step 2");
//! step.connect();
//!
//! assert_eq!(step.get_attribute("role").as_deref(), Some("listitem"));
//! assert_eq!(step.get_attribute("aria-disabled").as_deref(), Some("false"));
//!
//! step.set_disabled(true);
//! assert_eq!(step.get_attribute("aria-disabled").as_deref(), Some("true"));
//! ```

mod attributes;
mod content;
mod error;
mod render;

pub use attributes::StepAttributes;
pub use content::{Content, SECONDARY_LABEL_SLOT};
pub use error::ElementError;
pub use render::render;

use crate::core::{Attribute, ChangeSet, StepState};
use crate::markup::{self, Element, Fragment, Node};
use crate::settings::Settings;
use attributes::replace;
use std::collections::BTreeMap;

/// Role given to a step attached without one.
pub const DEFAULT_ROLE: &str = "listitem";

/// A single step of a progress indicator.
#[derive(Clone, Debug)]
pub struct ProgressStep {
    settings: Settings,
    attributes: StepAttributes,
    content: Content,
    host: BTreeMap<String, String>,
    connected: bool,
    has_updated: bool,
    pending: ChangeSet,
    rendered: Fragment,
}

impl Default for ProgressStep {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl ProgressStep {
    /// Create a detached step with default attributes.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            attributes: StepAttributes::default(),
            content: Content::new(),
            host: BTreeMap::new(),
            connected: false,
            has_updated: false,
            pending: ChangeSet::new(),
            rendered: Vec::new(),
        }
    }

    /// Create a detached step with settings read from JSON.
    pub fn from_settings_json(json: &str) -> Result<Self, ElementError> {
        Ok(Self::new(Settings::from_json(json)?))
    }

    /// Tag name the step is registered under.
    pub fn tag_name(&self) -> String {
        self.settings.tag_name()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current attribute snapshot.
    pub fn attributes(&self) -> &StepAttributes {
        &self.attributes
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn disabled(&self) -> bool {
        self.attributes.disabled
    }

    pub fn icon_label(&self) -> Option<&str> {
        self.attributes.icon_label.as_deref()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.attributes.label_text.as_deref()
    }

    pub fn secondary_label_text(&self) -> Option<&str> {
        self.attributes.secondary_label_text.as_deref()
    }

    pub fn state(&self) -> StepState {
        self.attributes.state
    }

    pub fn vertical(&self) -> bool {
        self.attributes.vertical
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if replace(&mut self.attributes.disabled, disabled) {
            self.request_update(Attribute::Disabled);
        }
    }

    pub fn set_icon_label(&mut self, label: impl Into<String>) {
        if replace(&mut self.attributes.icon_label, Some(label.into())) {
            self.request_update(Attribute::IconLabel);
        }
    }

    pub fn set_label_text(&mut self, text: impl Into<String>) {
        if replace(&mut self.attributes.label_text, Some(text.into())) {
            self.request_update(Attribute::LabelText);
        }
    }

    pub fn set_secondary_label_text(&mut self, text: impl Into<String>) {
        if replace(&mut self.attributes.secondary_label_text, Some(text.into())) {
            self.request_update(Attribute::SecondaryLabelText);
        }
    }

    /// Unset the icon label, dropping the icon's `<title>`.
    pub fn clear_icon_label(&mut self) {
        if self.attributes.icon_label.take().is_some() {
            self.request_update(Attribute::IconLabel);
        }
    }

    /// Unset the primary label.
    pub fn clear_label_text(&mut self) {
        if self.attributes.label_text.take().is_some() {
            self.request_update(Attribute::LabelText);
        }
    }

    /// Unset the secondary label.
    pub fn clear_secondary_label_text(&mut self) {
        if self.attributes.secondary_label_text.take().is_some() {
            self.request_update(Attribute::SecondaryLabelText);
        }
    }

    pub fn set_state(&mut self, state: StepState) {
        if replace(&mut self.attributes.state, state) {
            self.request_update(Attribute::State);
        }
    }

    pub fn set_vertical(&mut self, vertical: bool) {
        if replace(&mut self.attributes.vertical, vertical) {
            self.request_update(Attribute::Vertical);
        }
    }

    /// Set a host attribute.
    ///
    /// Observed attributes (`disabled`, `icon-label`, `label-text`,
    /// `secondary-label-text`, `state`, `vertical`) also update the matching
    /// property. An unknown `state` value is rejected before anything is
    /// written. Any other name, such as `role`, is stored as is.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ElementError> {
        if let Some(attribute) = Attribute::from_name(name) {
            let changed = self
                .attributes
                .apply(attribute, Some(value))
                .inspect_err(|e| {
                    tracing::warn!(value = %e.value, "rejected progress step state");
                })?;
            self.host.insert(name.to_string(), value.to_string());
            if changed {
                self.request_update(attribute);
            }
        } else {
            self.host.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    /// Remove a host attribute, resetting the matching property if observed.
    pub fn remove_attribute(&mut self, name: &str) {
        self.host.remove(name);
        if let Some(attribute) = Attribute::from_name(name) {
            // Removal resets to the default and never fails.
            if let Ok(true) = self.attributes.apply(attribute, None) {
                self.request_update(attribute);
            }
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.host.get(name).cloned()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.host.contains_key(name)
    }

    /// Attributes currently on the host node.
    pub fn host_attributes(&self) -> &BTreeMap<String, String> {
        &self.host
    }

    /// Append a child to the caller's content.
    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.content.push(node);
        self.request_content_update();
    }

    /// Replace the caller's content.
    pub fn set_content(&mut self, content: impl Into<Content>) {
        let content = content.into();
        if replace(&mut self.content, content) {
            self.request_content_update();
        }
    }

    pub fn clear_content(&mut self) {
        if !self.content.is_empty() {
            self.content.clear();
            self.request_content_update();
        }
    }

    /// Attach the step to a surface.
    ///
    /// Gives the host the `listitem` role unless the caller already set one,
    /// then runs any pending update. The first attach renders with every
    /// attribute treated as changed. Attaching twice does nothing.
    pub fn connect(&mut self) {
        if self.connected {
            return;
        }
        if !self.host.contains_key("role") {
            self.host.insert("role".to_string(), DEFAULT_ROLE.to_string());
        }
        self.connected = true;
        if !self.has_updated {
            self.pending.merge(ChangeSet::all());
        }
        tracing::debug!(tag = %self.tag_name(), "progress step attached");
        self.perform_update();
    }

    /// Detach the step. Later writes are applied on the next attach.
    pub fn disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            tracing::debug!(tag = %self.tag_name(), "progress step detached");
        }
    }

    /// Render the step from its current attributes and content.
    ///
    /// Pure: does not touch the host or the stored output.
    pub fn render(&self) -> Fragment {
        render(&self.attributes, &self.content, &self.settings)
    }

    /// Output of the last update. Empty until the first attach.
    pub fn rendered(&self) -> &[Node] {
        &self.rendered
    }

    /// The host element with its attributes around the last rendered output.
    pub fn to_element(&self) -> Element {
        Element::new(self.tag_name())
            .with_attrs(self.host.iter().map(|(k, v)| (k.clone(), v.clone())))
            .with_children(self.rendered.iter().cloned())
    }

    /// HTML of the host element and its rendered output.
    pub fn outer_html(&self) -> String {
        self.to_element().to_string()
    }

    /// HTML of the rendered output alone.
    pub fn inner_html(&self) -> String {
        markup::to_html(&self.rendered)
    }

    fn request_update(&mut self, attribute: Attribute) {
        tracing::debug!(%attribute, "progress step attribute changed");
        self.pending.record(attribute);
        if self.connected {
            self.perform_update();
        }
    }

    fn request_content_update(&mut self) {
        self.pending.record_content();
        if self.connected {
            self.perform_update();
        }
    }

    fn perform_update(&mut self) {
        let changes = self.pending.take();
        if changes.is_empty() && self.has_updated {
            return;
        }
        self.updated(&changes);
        self.rendered = self.render();
        self.has_updated = true;
        tracing::debug!(
            state = %self.attributes.state,
            nodes = self.rendered.len(),
            "progress step rendered"
        );
    }

    fn updated(&mut self, changes: &ChangeSet) {
        if changes.has(Attribute::Disabled) {
            self.host
                .insert("aria-disabled".to_string(), self.attributes.disabled.to_string());
            self.reflect(Attribute::Disabled, self.attributes.disabled);
        }
        if changes.has(Attribute::Vertical) {
            self.reflect(Attribute::Vertical, self.attributes.vertical);
        }
    }

    fn reflect(&mut self, attribute: Attribute, value: bool) {
        let name = attribute.as_str();
        if value {
            self.host.insert(name.to_string(), String::new());
        } else {
            self.host.remove(name);
        }
    }
}
