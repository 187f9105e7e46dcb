//! Pure rendering of a progress step.

use super::attributes::StepAttributes;
use super::content::{Content, SECONDARY_LABEL_SLOT};
use crate::icons::{class_hint, render_icon, title, IconOptions};
use crate::markup::{Element, Fragment, Node};
use crate::settings::Settings;

/// Render a progress step from an attribute snapshot and the caller's content.
///
/// The output is, in order: the state icon, the unnamed slot, the
/// `secondary-label` slot and the connecting line. Each slot holds the
/// caller's content for it when there is any, and the attribute fallback
/// otherwise. The same inputs always produce the same fragment.
pub fn render(attrs: &StepAttributes, content: &Content, settings: &Settings) -> Fragment {
    vec![
        icon(attrs, settings).into(),
        label_slot(attrs, content, settings).into(),
        secondary_label_slot(attrs, content, settings).into(),
        Element::new("span")
            .with_attr("class", settings.class("progress-line"))
            .into(),
    ]
}

fn icon(attrs: &StepAttributes, settings: &Settings) -> Element {
    let mut options = IconOptions::new();
    options.class = class_hint(attrs.state, settings);
    options.children = attrs.icon_label().map(title);
    render_icon(attrs.state, options)
}

fn slot(name: Option<&str>, content: &Content, fallback: Option<Element>) -> Element {
    let mut slot = Element::new("slot");
    if let Some(name) = name {
        slot = slot.with_attr("name", name);
    }
    if content.overrides(name) {
        slot.with_children(content.assigned(name).cloned())
    } else {
        slot.with_children(fallback.map(Node::from))
    }
}

fn label_slot(attrs: &StepAttributes, content: &Content, settings: &Settings) -> Element {
    let paragraph = attrs.label_text().map(|text| {
        Element::new("p")
            .with_attr("role", "button")
            .with_attr("class", settings.class("progress-label"))
            .with_attr("tabindex", "0")
            .with_attr("aria-describedby", "label-tooltip")
            .with_text(text)
    });
    slot(None, content, paragraph)
}

fn secondary_label_slot(attrs: &StepAttributes, content: &Content, settings: &Settings) -> Element {
    let paragraph = attrs.secondary_label_text().map(|text| {
        Element::new("p")
            .with_attr("class", settings.class("progress-optional"))
            .with_text(text)
    });
    slot(Some(SECONDARY_LABEL_SLOT), content, paragraph)
}
