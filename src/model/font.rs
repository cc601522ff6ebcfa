//! Font descriptors handed to the text measurer and the drawing surface.

use serde::Serialize;
use std::fmt;

/// Font weight. Only the three weights the layout uses are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    /// 400: body text.
    Regular,
    /// 600: headings.
    SemiBold,
    /// 700: bold emphasis.
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight (400, 600 or 700).
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Generic font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontFamily {
    /// Proportional text.
    SansSerif,
    /// Code spans and code blocks.
    Monospace,
}

impl FontFamily {
    /// CSS generic family keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

/// Everything a measurer needs to size a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FontDescriptor {
    /// Weight.
    pub weight: FontWeight,
    /// Size in pixels.
    pub size_px: u32,
    /// Family.
    pub family: FontFamily,
}

impl FontDescriptor {
    /// Create a descriptor.
    pub fn new(weight: FontWeight, size_px: u32, family: FontFamily) -> Self {
        Self {
            weight,
            size_px,
            family,
        }
    }

    /// Derive the font implied by a run's style flags.
    ///
    /// Weight comes from `bold` (700) or `heading` (600), family from `code`.
    pub fn for_style(size_px: u32, bold: bool, heading: bool, code: bool) -> Self {
        let weight = if bold {
            FontWeight::Bold
        } else if heading {
            FontWeight::SemiBold
        } else {
            FontWeight::Regular
        };
        let family = if code {
            FontFamily::Monospace
        } else {
            FontFamily::SansSerif
        };
        Self::new(weight, size_px, family)
    }
}

/// Formats as a CSS font shorthand, e.g. `600 42px sans-serif`.
impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}px {}",
            self.weight.value(),
            self.size_px,
            self.family.as_str()
        )
    }
}
