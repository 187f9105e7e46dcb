//! Vector glyphs drawn for each step state, on a 16x16 grid.

/// A glyph that can be drawn as a step icon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    /// Open circle outline.
    CircleOutline,
    /// Filled circle.
    CircleFilled,
    /// Checkmark inside a circle outline.
    CheckmarkOutline,
    /// Warning mark inside a circle outline.
    Warning,
}

const CIRCLE_OUTLINE: &[&str] = &[
    "M8 1C4.1 1 1 4.1 1 8s3.1 7 7 7 7-3.1 7-7-3.1-7-7-7zm0 13c-3.3 0-6-2.7-6-6s2.7-6 6-6 6 2.7 6 6-2.7 6-6 6z",
];

const CIRCLE_FILLED: &[&str] = &["M 7, 7 m -7, 0 a 7,7 0 1,0 14,0 a 7,7 0 1,0 -14,0"];

const CHECKMARK_OUTLINE: &[&str] = &[
    "M7 10.8L4.5 8.3 3.7 9.1 7 12.3 12.3 7 11.5 6.2z",
    "M8 1C4.1 1 1 4.1 1 8s3.1 7 7 7 7-3.1 7-7-3.1-7-7-7zm0 13c-3.3 0-6-2.7-6-6s2.7-6 6-6 6 2.7 6 6-2.7 6-6 6z",
];

const WARNING: &[&str] = &[
    "M8 1C4.1 1 1 4.1 1 8s3.1 7 7 7 7-3.1 7-7-3.1-7-7-7zm0 13c-3.3 0-6-2.7-6-6s2.7-6 6-6 6 2.7 6 6-2.7 6-6 6z",
    "M7.5 4h1v5h-1zm.5 6.2c-.4 0-.8.3-.8.8s.3.8.8.8.8-.3.8-.8-.4-.8-.8-.8z",
];

impl Glyph {
    /// Path data for the glyph, drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::CircleOutline => CIRCLE_OUTLINE,
            Self::CircleFilled => CIRCLE_FILLED,
            Self::CheckmarkOutline => CHECKMARK_OUTLINE,
            Self::Warning => WARNING,
        }
    }
}
