//! Line classification for block-level constructs.

// Block marker constants
pub(crate) const FENCE: &str = "```";
const DIVIDER_DASHES: &str = "---";
const DIVIDER_STARS: &str = "***";
const IMAGE_OPEN: &str = "![";
const IMAGE_URL_START: &str = "](";
const IMAGE_URL_END: char = ')';
const LIST_DASH: &str = "- ";
const LIST_STAR: &str = "* ";
const MAX_HEADING_LEVEL: usize = 3;

/// Block-level meaning of one trimmed line outside a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Empty line.
    Blank,
    /// `---` or `***` alone.
    Divider,
    /// `![alt](url)`.
    Image {
        /// Text between the first `](` and the following `)`.
        url: &'a str,
    },
    /// `#`, `##` or `###` followed by a space or end of line.
    Heading {
        /// 1 to 3.
        level: u8,
        /// Heading text with the markers removed.
        text: &'a str,
    },
    /// `- ` or `* ` prefixed item.
    ListItem {
        /// Item text with the marker removed.
        text: &'a str,
    },
    /// Anything else, including malformed image markup.
    Paragraph {
        /// The whole line.
        text: &'a str,
    },
}

/// True when a trimmed line opens or closes a code fence.
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Classify a trimmed line that is not a fence and not inside one.
///
/// Checks run in priority order: blank, divider, image, heading, list item,
/// paragraph. Anything that fails to match cleanly falls through to a
/// paragraph, so malformed markup is shown literally.
pub fn classify(line: &str) -> Block<'_> {
    if line.is_empty() {
        return Block::Blank;
    }
    if line == DIVIDER_DASHES || line == DIVIDER_STARS {
        return Block::Divider;
    }
    if let Some(url) = image_url(line) {
        return Block::Image { url };
    }
    if let Some((level, text)) = heading(line) {
        return Block::Heading { level, text };
    }
    if let Some(text) = line
        .strip_prefix(LIST_DASH)
        .or_else(|| line.strip_prefix(LIST_STAR))
    {
        return Block::ListItem { text: text.trim() };
    }
    Block::Paragraph { text: line }
}

/// Extract the URL of `![alt](url)`, or `None` if the markup is incomplete.
fn image_url(line: &str) -> Option<&str> {
    if !line.starts_with(IMAGE_OPEN) {
        return None;
    }
    let start = line.find(IMAGE_URL_START)? + IMAGE_URL_START.len();
    let len = line[start..].find(IMAGE_URL_END)?;
    Some(&line[start..start + len])
}

/// Split a heading into level and text. More than three `#` is not a heading.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_blank() {
        assert_eq!(classify(""), Block::Blank);
    }

    #[test]
    fn dividers() {
        assert_eq!(classify("---"), Block::Divider);
        assert_eq!(classify("***"), Block::Divider);
        assert!(matches!(classify("----"), Block::Paragraph { .. }));
    }

    #[test]
    fn image_url_is_between_bracket_paren_and_close_paren() {
        assert_eq!(
            classify("![a logo](img/logo.png)"),
            Block::Image {
                url: "img/logo.png"
            }
        );
    }

    #[test]
    fn image_with_trailing_text_uses_first_close_paren() {
        assert_eq!(
            classify("![x](a.png) and (more)"),
            Block::Image { url: "a.png" }
        );
    }

    #[test]
    fn unterminated_image_is_paragraph() {
        assert_eq!(
            classify("![alt](missing.png"),
            Block::Paragraph {
                text: "![alt](missing.png"
            }
        );
        assert_eq!(
            classify("![alt missing"),
            Block::Paragraph {
                text: "![alt missing"
            }
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify("# One"),
            Block::Heading {
                level: 1,
                text: "One"
            }
        );
        assert_eq!(
            classify("## Two"),
            Block::Heading {
                level: 2,
                text: "Two"
            }
        );
        assert_eq!(
            classify("### Three"),
            Block::Heading {
                level: 3,
                text: "Three"
            }
        );
    }

    #[test]
    fn bare_hash_is_empty_heading() {
        assert_eq!(classify("#"), Block::Heading { level: 1, text: "" });
    }

    #[test]
    fn four_hashes_or_no_space_is_paragraph() {
        assert!(matches!(classify("#### Four"), Block::Paragraph { .. }));
        assert!(matches!(classify("#hashtag"), Block::Paragraph { .. }));
    }

    #[test]
    fn list_markers() {
        assert_eq!(classify("- item"), Block::ListItem { text: "item" });
        assert_eq!(classify("* item"), Block::ListItem { text: "item" });
        assert!(matches!(classify("-item"), Block::Paragraph { .. }));
    }

    #[test]
    fn fence_detection() {
        assert!(is_fence("```"));
        assert!(is_fence("```rust"));
        assert!(!is_fence("``"));
    }
}
