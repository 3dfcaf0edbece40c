use serde::{Deserialize, Serialize};

/// One input character with its derived annotations.
///
/// Built per layout pass by [`crate::annotate_segment`]; never persisted.
#[derive(Debug, Clone)]
pub struct AnnotatedChar {
    /// The character itself; empty for structural placeholders.
    pub glyph: String,
    /// Phonetic transcription, or a single space for ignored characters.
    pub romanization: String,
    /// Display-ready gloss, possibly truncated.
    pub gloss: String,
    /// False for whitespace and placeholders; such entries are skipped
    /// by the layout engine and consume no layout slot.
    pub is_content: bool,
}

impl AnnotatedChar {
    /// Structural placeholder for callers with no input yet.
    pub fn placeholder() -> Self {
        Self {
            glyph: String::new(),
            romanization: String::new(),
            gloss: String::new(),
            is_content: false,
        }
    }
}

/// A single positioned piece of text, the layout engine's output unit.
///
/// Coordinates are page-relative with y growing downward from the page
/// top. Flipping into PDF coordinate space is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub text: String,
    /// True for the main glyph, false for the romanization annotation.
    pub primary: bool,
    pub x: f32,
    pub y: f32,
}
