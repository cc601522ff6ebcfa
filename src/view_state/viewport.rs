//! Scroll offset and zoom level with their clamping rules.

use super::types::{ViewportDimensions, ZoomBounds};
use tracing::trace;

/// What an input event requires before the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportChange {
    /// Layout inputs changed; parse the document again, then redraw.
    Relayout,
    /// Only the visible band moved (or nothing changed); redraw.
    Redraw,
}

/// Scroll and zoom state for the page.
///
/// Two independent scalars. Both are clamped after every mutation:
/// - `zoom ∈ [bounds.min, bounds.max]`
/// - `scroll_y ∈ [0, max(0, content_height - viewport_height)]`
///
/// The scroll clamp is re-applied whenever the content height or viewport
/// changes, pulling an out-of-range offset down to the new maximum rather
/// than resetting it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    scroll_y: f64,
    zoom: f64,
    dimensions: ViewportDimensions,
    content_height: u32,
    bounds: ZoomBounds,
}

impl ViewportState {
    /// Initial state: top of the document at 1.0 zoom (clamped into `bounds`).
    pub fn new(dimensions: ViewportDimensions, bounds: ZoomBounds) -> Self {
        Self {
            scroll_y: 0.0,
            zoom: bounds.clamp(1.0),
            dimensions,
            content_height: 0,
            bounds,
        }
    }

    /// Current scroll offset in content pixels.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current viewport size.
    pub fn dimensions(&self) -> ViewportDimensions {
        self.dimensions
    }

    /// Content height the scroll offset is clamped against.
    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Zoom range in force.
    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        f64::from(self.content_height.saturating_sub(self.dimensions.height))
    }

    /// Apply a zoom wheel delta: `zoom -= delta * step`, clamped.
    ///
    /// Returns `Relayout` only if the clamped zoom actually changed.
    pub fn zoom_by(&mut self, delta: f64) -> ViewportChange {
        if !delta.is_finite() {
            return ViewportChange::Redraw;
        }
        let next = self.bounds.clamp(self.zoom - delta * self.bounds.step());
        if next == self.zoom {
            return ViewportChange::Redraw;
        }
        trace!(from = self.zoom, to = next, "Zoom changed");
        self.zoom = next;
        ViewportChange::Relayout
    }

    /// Apply a scroll wheel delta: `scroll_y += delta`, clamped.
    pub fn scroll_by(&mut self, delta: f64) -> ViewportChange {
        if delta.is_finite() {
            self.scroll_y += delta;
            self.clamp_scroll();
        }
        ViewportChange::Redraw
    }

    /// Record the content height of a fresh layout and re-clamp scroll.
    pub fn set_content_height(&mut self, content_height: u32) {
        self.content_height = content_height;
        self.clamp_scroll();
    }

    /// Record new viewport dimensions and re-clamp scroll.
    ///
    /// A width change moves the text column, so it requires a relayout.
    pub fn resize(&mut self, dimensions: ViewportDimensions) -> ViewportChange {
        let width_changed = dimensions.width != self.dimensions.width;
        self.dimensions = dimensions;
        self.clamp_scroll();
        if width_changed {
            ViewportChange::Relayout
        } else {
            ViewportChange::Redraw
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll());
    }
}
