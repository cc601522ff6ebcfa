//! Literal colors and glyphs the parser stamps onto elements.

use serde::{Deserialize, Serialize};

/// Palette and bullet glyph used when building text runs.
///
/// The defaults are the values the output-compatibility tests expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTheme {
    /// Prefix inserted in place of a `- ` / `* ` list marker.
    pub bullet: String,
    /// Paragraph and list text color.
    pub text_color: String,
    /// Heading text color.
    pub heading_color: String,
    /// Inline code and code block text color.
    pub code_color: String,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
            text_color: "#333333".to_string(),
            heading_color: "#111111".to_string(),
            code_color: "#c7254e".to_string(),
        }
    }
}
