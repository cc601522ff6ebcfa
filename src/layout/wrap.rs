//! Greedy word-wrap against a measured width.

use super::constants::{EMPTY_BLOCK_FACTOR, LINE_HEIGHT_FACTOR};
use super::measure::TextMeasurer;
use crate::model::FontDescriptor;

/// One output line of a wrapped block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    /// Words on this line joined by single spaces.
    pub text: String,
    /// Offset of this line's top from the block's top.
    pub y_offset: u32,
}

/// Result of wrapping one block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedBlock {
    /// Lines in order. Empty when the input had no words.
    pub lines: Vec<WrappedLine>,
    /// Vertical space the block consumes.
    pub height: u32,
}

/// Distance between consecutive wrapped lines.
pub fn line_height(font_size: u32) -> u32 {
    (f64::from(font_size) * LINE_HEIGHT_FACTOR).round() as u32
}

/// Height reserved for empty text or a degenerate width.
pub fn empty_block_height(font_size: u32) -> u32 {
    (f64::from(font_size) * EMPTY_BLOCK_FACTOR).round() as u32
}

fn count_px(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Break `text` into lines no wider than `max_width`.
///
/// Words are split on whitespace and accumulated greedily; a word moves to a
/// new line when appending it to a non-empty line would exceed `max_width`.
/// A single word wider than `max_width` is kept whole on its own line.
///
/// # Degenerate inputs
/// - No words: no lines, height `1.5 * font_size`.
/// - `max_width <= 0`: the text as one line, height `1.5 * font_size`, and
///   the measurer is never called.
pub fn wrap(
    text: &str,
    font: &FontDescriptor,
    max_width: f64,
    measurer: &dyn TextMeasurer,
) -> WrappedBlock {
    let mut words = text.split_whitespace().peekable();
    if words.peek().is_none() {
        return WrappedBlock {
            lines: Vec::new(),
            height: empty_block_height(font.size_px),
        };
    }

    if max_width <= 0.0 {
        return WrappedBlock {
            lines: vec![WrappedLine {
                text: text.to_string(),
                y_offset: 0,
            }],
            height: empty_block_height(font.size_px),
        };
    }

    let mut raw_lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in words {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measurer.measure(&candidate, font) > max_width {
            raw_lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    raw_lines.push(current);

    let pitch = line_height(font.size_px);
    let lines: Vec<WrappedLine> = raw_lines
        .into_iter()
        .enumerate()
        .map(|(index, text)| WrappedLine {
            text,
            y_offset: pitch.saturating_mul(count_px(index)),
        })
        .collect();
    let height = pitch.saturating_mul(count_px(lines.len()));

    WrappedBlock { lines, height }
}
