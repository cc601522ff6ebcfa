//! Result of a full parse pass.

use super::element::Element;
use serde::Serialize;

/// Ordered elements plus the total height used to bound scrolling.
///
/// # Invariants
/// - `elements` are in document order
/// - `content_height >= max(y + height)` over all elements, plus a trailing margin
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DocumentLayout {
    /// Positioned elements in document order.
    pub elements: Vec<Element>,
    /// Total vertical extent of the document in pixels.
    pub content_height: u32,
}

impl DocumentLayout {
    /// Create a layout result.
    pub fn new(elements: Vec<Element>, content_height: u32) -> Self {
        Self {
            elements,
            content_height,
        }
    }

    /// Largest valid scroll offset for a viewport of the given height.
    pub fn max_scroll(&self, viewport_height: u32) -> u32 {
        self.content_height.saturating_sub(viewport_height)
    }

    /// True when the layout holds no elements (e.g. before the document loads).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
