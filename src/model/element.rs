//! Positioned visual elements produced by a parse pass.

use super::font::FontDescriptor;
use crate::image::ImageHandle;
use serde::Serialize;

/// A run of text on a single wrapped line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    /// Text after block markers and inline markup have been stripped.
    pub content: String,
    /// Font size in pixels, already scaled by zoom.
    pub font_size: u32,
    /// Left edge in content space.
    pub x: u32,
    /// Top edge in content space.
    pub y: u32,
    /// CSS color string.
    pub color: String,
    /// `**strong**` was present on the source line.
    pub bold: bool,
    /// `*emphasis*` was present on the source line.
    pub italic: bool,
    /// Rendered in the monospace family.
    pub code: bool,
    /// Part of a heading line.
    pub heading: bool,
    /// 1 to 3 for headings, 0 otherwise.
    pub heading_level: u8,
}

impl TextRun {
    /// Font this run is measured and painted with.
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::for_style(self.font_size, self.bold, self.heading, self.code)
    }
}

/// An image block, either at its resolved size or at a provisional size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    /// URL between `](` and `)` in the source.
    pub source_url: String,
    /// Left edge in content space.
    pub x: u32,
    /// Top edge in content space.
    pub y: u32,
    /// Laid-out width.
    pub width: u32,
    /// Laid-out height.
    pub height: u32,
    /// Handle issued by the image resolver.
    pub handle: ImageHandle,
    /// Natural dimensions were known when this element was laid out.
    pub ready: bool,
}

/// A horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Divider {
    /// Left edge in content space.
    pub x: u32,
    /// Vertical position of the rule in content space.
    pub y: u32,
    /// Length of the rule.
    pub width: u32,
}

/// Filled background behind a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeBlockBackground {
    /// Left edge in content space.
    pub x: u32,
    /// Top edge in content space.
    pub y: u32,
    /// Width of the filled rectangle.
    pub width: u32,
    /// Height of the filled rectangle.
    pub height: u32,
}

/// One positioned visual unit of the document.
///
/// Coordinates are absolute in content space. Elements are never mutated
/// after a parse pass; the next pass replaces the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// Wrapped text line.
    Text(TextRun),
    /// Image block.
    Image(ImageElement),
    /// Horizontal rule.
    Divider(Divider),
    /// Code block background.
    CodeBlockBackground(CodeBlockBackground),
}

impl Element {
    /// Top edge in content space.
    pub fn y(&self) -> u32 {
        match self {
            Element::Text(run) => run.y,
            Element::Image(image) => image.y,
            Element::Divider(divider) => divider.y,
            Element::CodeBlockBackground(bg) => bg.y,
        }
    }

    /// Vertical extent used for visibility tests.
    ///
    /// Text runs report their font size, dividers are zero-height strokes.
    pub fn height(&self) -> u32 {
        match self {
            Element::Text(run) => run.font_size,
            Element::Image(image) => image.height,
            Element::Divider(_) => 0,
            Element::CodeBlockBackground(bg) => bg.height,
        }
    }

    /// Borrow the text run, if this is one.
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Element::Text(run) => Some(run),
            _ => None,
        }
    }
}
