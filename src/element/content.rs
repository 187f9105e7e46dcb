//! Caller-supplied content and its assignment to insertion points.
//!
//! Children are assigned the way slotted light-tree content is: an element
//! with a `slot` attribute goes to the slot of that name, everything else
//! goes to the unnamed slot. Whitespace-only text is projected along with
//! its siblings but does not by itself count as an override, so indentation
//! between children keeps the fallback. An element with no content of its
//! own still counts.

use crate::markup::Node;
use serde::{Deserialize, Serialize};

/// Name of the insertion point for the secondary label.
pub const SECONDARY_LABEL_SLOT: &str = "secondary-label";

/// Ordered children supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content {
    children: Vec<Node>,
}

fn slot_of(node: &Node) -> Option<&str> {
    node.as_element().and_then(|e| e.attr("slot"))
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes assigned to a slot, whitespace text included. `None` names the
    /// unnamed slot.
    pub fn assigned<'a>(&'a self, slot: Option<&'a str>) -> impl Iterator<Item = &'a Node> + 'a {
        self.children
            .iter()
            .filter(move |node| slot_of(node) == slot)
    }

    /// `true` if a node other than whitespace text is assigned to the slot,
    /// replacing its fallback.
    pub fn overrides(&self, slot: Option<&str>) -> bool {
        self.assigned(slot).any(|node| !node.is_blank_text())
    }
}

impl From<Vec<Node>> for Content {
    fn from(children: Vec<Node>) -> Self {
        Self { children }
    }
}

impl FromIterator<Node> for Content {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}
