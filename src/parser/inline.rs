//! Inline emphasis and code markers.
//!
//! Markers are stripped globally and turned into per-line flags. There is no
//! nesting and no escaping: `**a** b **c**` is a single bold line reading
//! `a b c`.

const BOLD: &str = "**";
const ITALIC: char = '*';
const CODE: char = '`';

/// Style flags collected from a line's inline markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    /// `**` was present.
    pub bold: bool,
    /// `*` was present (never set for list items).
    pub italic: bool,
    /// A backtick was present.
    pub code: bool,
}

/// Strip inline markers from `text` and report which were present.
///
/// Checks run in order bold, italic, code, each on the output of the
/// previous one. List items skip the italic check.
pub fn strip(text: &str, list_item: bool) -> (String, InlineStyle) {
    let mut content = text.to_string();
    let mut style = InlineStyle::default();

    if content.contains(BOLD) {
        content = content.replace(BOLD, "");
        style.bold = true;
    }
    if !list_item && content.contains(ITALIC) {
        content = content.replace(ITALIC, "");
        style.italic = true;
    }
    if content.contains(CODE) {
        content = content.replace(CODE, "");
        style.code = true;
    }

    (content, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        let (text, style) = strip("just words", false);
        assert_eq!(text, "just words");
        assert_eq!(style, InlineStyle::default());
    }

    #[test]
    fn bold_strips_every_pair() {
        let (text, style) = strip("**a** b **c**", false);
        assert_eq!(text, "a b c");
        assert!(style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn italic_after_bold() {
        let (text, style) = strip("**bold** and *it*", false);
        assert_eq!(text, "bold and it");
        assert!(style.bold && style.italic);
    }

    #[test]
    fn list_items_keep_stars() {
        let (text, style) = strip("2 * 3", true);
        assert_eq!(text, "2 * 3");
        assert!(!style.italic);
    }

    #[test]
    fn code_is_independent() {
        let (text, style) = strip("*call* `run()` **now**", false);
        assert_eq!(text, "call run() now");
        assert!(style.bold && style.italic && style.code);
    }
}
