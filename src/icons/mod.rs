//! State registry: the icon drawn for each step state.
//!
//! The mapping is an exhaustive `match` over [`StepState`], so every state
//! has exactly one icon and adding a state without an icon does not compile.
//! String input goes through [`render_icon_named`], which rejects anything
//! that is not one of the four state names instead of drawing nothing.
//!
//! | State | Glyph | Class hint |
//! |-------|-------|------------|
//! | `queued` | open circle | none |
//! | `current` | filled circle | none |
//! | `complete` | checkmark in circle | none |
//! | `invalid` | warning | `{prefix}--progress__warning` |

mod glyphs;

pub use glyphs::Glyph;

use crate::core::{ParseStateError, StepState};
use crate::markup::{Element, Node};
use crate::settings::Settings;
use std::collections::BTreeMap;

/// Attributes every icon root starts with. Passthrough attributes override them.
pub const BASE_ATTRS: [(&str, &str); 3] =
    [("width", "16"), ("height", "16"), ("viewBox", "0 0 16 16")];

/// Options for rendering an icon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconOptions {
    /// Child placed first inside the icon root, e.g. an accessible `<title>`.
    pub children: Option<Node>,
    /// Class applied to the icon root.
    pub class: Option<String>,
    /// Attributes forwarded to the icon root.
    pub attrs: BTreeMap<String, String>,
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, children: impl Into<Node>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

/// The glyph drawn for a state.
pub fn glyph_for(state: StepState) -> Glyph {
    match state {
        StepState::Queued => Glyph::CircleOutline,
        StepState::Current => Glyph::CircleFilled,
        StepState::Complete => Glyph::CheckmarkOutline,
        StepState::Invalid => Glyph::Warning,
    }
}

/// The class hint for a state, if it has one. Only `invalid` does.
pub fn class_hint(state: StepState, settings: &Settings) -> Option<String> {
    match state {
        StepState::Invalid => Some(settings.class("progress__warning")),
        StepState::Queued | StepState::Current | StepState::Complete => None,
    }
}

/// Build an accessible `<title>` node for an icon.
pub fn title(text: impl Into<String>) -> Node {
    Element::new("title").with_text(text).into()
}

/// Render the icon for a state.
///
/// # Example
///
/// ```rust
/// use progress_step::core::StepState;
/// use progress_step::icons::{render_icon, title, IconOptions};
///
/// let icon = render_icon(
///     StepState::Invalid,
///     IconOptions::new()
///         .with_children(title("Error"))
///         .with_class("bx--progress__warning"),
/// );
///
/// assert_eq!(icon.tag, "svg");
/// assert_eq!(icon.attr("class"), Some("bx--progress__warning"));
/// assert_eq!(icon.find("title").unwrap().text_content(), "Error");
/// ```
pub fn render_icon(state: StepState, options: IconOptions) -> Element {
    draw(glyph_for(state), options)
}

/// Render the icon for a state given by name.
///
/// Fails on any name that is not a step state.
pub fn render_icon_named(name: &str, options: IconOptions) -> Result<Element, ParseStateError> {
    let state = name.parse::<StepState>().inspect_err(|e| {
        tracing::warn!(
            value = %e.value,
            "refusing to render icon for unknown progress step state"
        );
    })?;
    Ok(render_icon(state, options))
}

fn draw(glyph: Glyph, options: IconOptions) -> Element {
    let IconOptions {
        children,
        class,
        attrs,
    } = options;

    let mut root = Element::new("svg").with_attrs(BASE_ATTRS).with_attrs(attrs);
    if let Some(class) = class {
        root = root.with_attr("class", class);
    }
    if let Some(child) = children {
        root = root.with_child(child);
    }
    root.with_children(
        glyph
            .paths()
            .iter()
            .map(|d| Node::from(Element::new("path").with_attr("d", *d))),
    )
}
