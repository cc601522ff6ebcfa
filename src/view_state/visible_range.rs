//! Render selection: elements intersecting the visible band.

use crate::model::Element;
use std::slice;

/// Slack above and below the viewport, so tall elements straddling the edge
/// (code blocks, images) are still drawn.
pub const OFFSCREEN_MARGIN: i64 = 300;

/// Lazy iterator over `(element, viewport_y)` pairs for one frame.
///
/// Produced fresh by [`visible`] on every render. Cloning restarts from the
/// clone point; order is document order.
#[derive(Debug, Clone)]
pub struct VisibleElements<'a> {
    elements: slice::Iter<'a, Element>,
    scroll_offset: i64,
    viewport_height: i64,
}

impl<'a> VisibleElements<'a> {
    /// Whole-pixel scroll offset subtracted from each element's `y`.
    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    fn is_visible(&self, viewport_y: i64) -> bool {
        viewport_y > -OFFSCREEN_MARGIN && viewport_y < self.viewport_height + OFFSCREEN_MARGIN
    }
}

impl<'a> Iterator for VisibleElements<'a> {
    type Item = (&'a Element, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.elements.next()?;
            let viewport_y = i64::from(element.y()) - self.scroll_offset;
            if self.is_visible(viewport_y) {
                return Some((element, viewport_y));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.elements.size_hint().1)
    }
}

/// Select the elements to draw for a scroll offset and viewport height.
///
/// `viewport_y = y - floor(scroll_y)`; an element is yielded when
/// `-300 < viewport_y < viewport_height + 300`.
pub fn visible(elements: &[Element], scroll_y: f64, viewport_height: u32) -> VisibleElements<'_> {
    VisibleElements {
        elements: elements.iter(),
        scroll_offset: scroll_y.floor() as i64,
        viewport_height: i64::from(viewport_height),
    }
}
