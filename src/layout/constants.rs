//! Layout dimension constants, in unzoomed pixels.
//!
//! Every size and gap in a parse pass is one of these multiplied by the zoom
//! factor. Centralized so spacing can be tuned in one place.

/// Content column width on wide viewports.
pub const BASE_CONTENT_WIDTH: f64 = 700.0;

/// Viewports narrower than this use `viewport_width - NARROW_GUTTER` as the column.
pub const NARROW_VIEWPORT_WIDTH: f64 = 900.0;

/// Horizontal space given up to margins on narrow viewports.
pub const NARROW_GUTTER: f64 = 80.0;

/// Smallest allowed left/right margin.
pub const MIN_MARGIN: f64 = 40.0;

/// Vertical cursor start.
pub const TOP_OFFSET: f64 = 80.0;

/// Space after the last block, included in the content height.
pub const BOTTOM_MARGIN: f64 = 100.0;

/// Cursor advance for a blank line.
pub const BLANK_LINE_GAP: f64 = 20.0;

/// Cursor advance for a horizontal rule; the rule sits at its midpoint.
pub const DIVIDER_ADVANCE: f64 = 40.0;

/// Space after an image.
pub const IMAGE_GAP: f64 = 60.0;

/// Line pitch inside a fenced code block.
pub const CODE_LINE_HEIGHT: f64 = 28.0;

/// Extra height of a code block background beyond its lines.
pub const CODE_BLOCK_PADDING: f64 = 30.0;

/// Offset of code text from the top-left of its background.
pub const CODE_BLOCK_INSET: f64 = 15.0;

/// Space after a code block.
pub const CODE_BLOCK_GAP: f64 = 30.0;

/// Font size of code block lines.
pub const CODE_FONT_SIZE: f64 = 16.0;

/// Font size of paragraphs and list items.
pub const BODY_FONT_SIZE: f64 = 18.0;

/// Font sizes for heading levels 1, 2 and 3.
pub const HEADING_FONT_SIZES: [f64; 3] = [42.0, 32.0, 24.0];

/// Space before heading levels 1, 2 and 3.
pub const HEADING_GAPS_BEFORE: [f64; 3] = [20.0, 30.0, 20.0];

/// Space after a heading.
pub const HEADING_GAP_AFTER: f64 = 15.0;

/// Space after any other wrapped block.
pub const BLOCK_GAP_AFTER: f64 = 8.0;

/// Left indent of list items.
pub const LIST_INDENT: f64 = 20.0;

/// Wrapped line pitch as a multiple of font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.6;

/// Height reserved for an empty or unwrappable block, as a multiple of font size.
pub const EMPTY_BLOCK_FACTOR: f64 = 1.5;
