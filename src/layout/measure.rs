//! Text measurement hook.
//!
//! Layout never talks to a font rasterizer directly. It asks a
//! [`TextMeasurer`] for the rendered width of a candidate line, which lets the
//! same parse run against a real canvas, a terminal, or a deterministic stub.

use crate::model::{FontDescriptor, FontFamily, FontWeight};
use unicode_width::UnicodeWidthStr;

/// Measures rendered text width in pixels.
pub trait TextMeasurer {
    /// Width of `text` when drawn with `font`.
    fn measure(&self, text: &str, font: &FontDescriptor) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontDescriptor) -> f64,
{
    fn measure(&self, text: &str, font: &FontDescriptor) -> f64 {
        self(text, font)
    }
}

/// Deterministic measurer based on terminal display width.
///
/// Each display column advances by a fixed fraction of the font size,
/// depending on family; bold text is widened slightly. Good enough for
/// headless layout and stable enough for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMeasurer {
    /// Advance per column for sans-serif, as a fraction of font size.
    pub sans_advance: f64,
    /// Advance per column for monospace, as a fraction of font size.
    pub mono_advance: f64,
    /// Multiplier applied to 700-weight text.
    pub bold_widening: f64,
}

impl Default for ApproxMeasurer {
    fn default() -> Self {
        Self {
            sans_advance: 0.5,
            mono_advance: 0.6,
            bold_widening: 1.1,
        }
    }
}

impl TextMeasurer for ApproxMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> f64 {
        let advance = match font.family {
            FontFamily::SansSerif => self.sans_advance,
            FontFamily::Monospace => self.mono_advance,
        };
        let widening = match font.weight {
            FontWeight::Bold => self.bold_widening,
            FontWeight::Regular | FontWeight::SemiBold => 1.0,
        };
        text.width() as f64 * f64::from(font.size_px) * advance * widening
    }
}
