//! Zoom-scaled page geometry.

use super::constants::{BASE_CONTENT_WIDTH, MIN_MARGIN, NARROW_GUTTER, NARROW_VIEWPORT_WIDTH};

/// Column width and margin for one parse pass.
///
/// Values stay in `f64` until an element is placed so that repeated parses at
/// different zoom levels never accumulate rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    /// Zoom factor every constant is multiplied by.
    pub zoom: f64,
    /// Width of the text column. May be zero or negative on tiny viewports.
    pub content_width: f64,
    /// Left margin of the text column.
    pub margin: f64,
}

impl PageMetrics {
    /// Compute the column for a viewport width and zoom.
    ///
    /// The column is `700 * zoom` wide, or `(viewport - 80) * zoom` below a
    /// 900px viewport. It is centered, but the margin never drops below
    /// `40 * zoom`; when that floor applies the column shrinks instead.
    pub fn compute(viewport_width: u32, zoom: f64) -> Self {
        let viewport = f64::from(viewport_width);
        let mut content_width = if viewport < NARROW_VIEWPORT_WIDTH {
            (viewport - NARROW_GUTTER) * zoom
        } else {
            BASE_CONTENT_WIDTH * zoom
        };

        let min_margin = MIN_MARGIN * zoom;
        let mut margin = (viewport - content_width) / 2.0;
        if margin < min_margin {
            margin = min_margin;
            content_width = viewport - 2.0 * margin;
        }

        Self {
            zoom,
            content_width,
            margin,
        }
    }

    /// Scale an unzoomed constant.
    pub fn scale(&self, base: f64) -> f64 {
        base * self.zoom
    }

    /// Scale a font size and round it to whole pixels.
    pub fn font_size(&self, base: f64) -> u32 {
        to_px(self.scale(base))
    }
}

/// Round a layout coordinate to a non-negative whole pixel.
pub fn to_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
