//! Frame rendering: dispatch the visible band of a layout to a drawing surface.
//!
//! The layout is borrowed immutably for the whole frame, so a render can never
//! observe a partially built element sequence.

pub mod command;

pub use command::{format_commands, CommandRecorder, DrawCommand};

use crate::model::{
    CodeBlockBackground, Divider, DocumentLayout, Element, FontDescriptor, ImageElement, TextRun,
};
use crate::view_state::{visible, ViewportDimensions, ViewportState};
use tracing::trace;

/// Paint target for one frame.
///
/// All `y` arguments are viewport-relative (content `y` minus the floored
/// scroll offset) and may be negative for elements straddling the top edge.
pub trait DrawingSurface {
    /// Logical size of the surface in CSS pixels.
    fn dimensions(&self) -> ViewportDimensions;

    /// Ratio of device pixels to CSS pixels.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Erase the whole surface before a frame.
    fn clear(&mut self);

    /// Paint one text run with its resolved font.
    fn draw_text(&mut self, run: &TextRun, font: &FontDescriptor, y: i64);

    /// Paint an image block.
    fn draw_image(&mut self, image: &ImageElement, y: i64);

    /// Stroke a horizontal rule.
    fn draw_divider(&mut self, divider: &Divider, y: i64);

    /// Fill the background rectangle of a code block.
    fn fill_code_background(&mut self, background: &CodeBlockBackground, y: i64);
}

/// Render one frame and return the number of elements drawn.
pub fn render_frame(
    layout: &DocumentLayout,
    viewport: &ViewportState,
    surface: &mut dyn DrawingSurface,
) -> usize {
    surface.clear();

    let height = viewport.dimensions().height;
    let mut drawn = 0;
    for (element, y) in visible(&layout.elements, viewport.scroll_y(), height) {
        draw_element(element, y, surface);
        drawn += 1;
    }

    trace!(drawn, scroll_y = viewport.scroll_y(), "Rendered frame");
    drawn
}

/// Draw every element at its absolute content-space position.
///
/// Used to dump a whole layout; no clear, no visibility filter.
pub fn render_layout(layout: &DocumentLayout, surface: &mut dyn DrawingSurface) {
    for element in &layout.elements {
        draw_element(element, i64::from(element.y()), surface);
    }
}

fn draw_element(element: &Element, y: i64, surface: &mut dyn DrawingSurface) {
    match element {
        Element::Text(run) => surface.draw_text(run, &run.font(), y),
        Element::Image(image) => surface.draw_image(image, y),
        Element::Divider(divider) => surface.draw_divider(divider, y),
        Element::CodeBlockBackground(bg) => surface.fill_code_background(bg, y),
    }
}
