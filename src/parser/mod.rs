//! Markdown tokenizer and block layout.
//!
//! A single forward scan over the document's lines classifies each line
//! (see [`block`]), strips inline markers (see [`inline`]), wraps text with
//! the layout engine and stacks the resulting elements on a vertical cursor.
//! All mutable scan state lives in one [`ParserState`] value; nothing is kept
//! between calls except what the [`ImageCache`] records.

pub mod block;
pub mod inline;

use crate::image::ImageCache;
use crate::layout::constants::{
    BLANK_LINE_GAP, BLOCK_GAP_AFTER, BODY_FONT_SIZE, BOTTOM_MARGIN, CODE_BLOCK_GAP,
    CODE_BLOCK_INSET, CODE_BLOCK_PADDING, CODE_FONT_SIZE, CODE_LINE_HEIGHT, DIVIDER_ADVANCE,
    HEADING_FONT_SIZES, HEADING_GAPS_BEFORE, HEADING_GAP_AFTER, IMAGE_GAP, LIST_INDENT,
    TOP_OFFSET,
};
use crate::layout::metrics::to_px;
use crate::layout::{wrap, LayoutTheme, PageMetrics, TextMeasurer};
use crate::model::{
    CodeBlockBackground, Divider, DocumentLayout, Element, FontDescriptor, ImageElement, TextRun,
};
use block::Block;
use tracing::debug;

/// Collaborators lent to a parse pass.
pub struct ParseContext<'a> {
    /// Width oracle for word-wrap.
    pub measurer: &'a dyn TextMeasurer,
    /// Image dimensions known so far; first references issue requests.
    pub images: &'a mut ImageCache,
    /// Colors and bullet glyph stamped onto text runs.
    pub theme: &'a LayoutTheme,
}

/// Lay out `document` at `zoom` for a viewport `viewport_width` pixels wide.
///
/// Deterministic for a given document, zoom, width, measurer and image cache
/// contents. Images seen for the first time are requested from the cache's
/// resolver and laid out at a provisional size until their completion is
/// applied and the document is parsed again.
pub fn parse(
    document: &str,
    zoom: f64,
    viewport_width: u32,
    ctx: &mut ParseContext<'_>,
) -> DocumentLayout {
    let mut state = ParserState::new(PageMetrics::compute(viewport_width, zoom));
    for line in document.lines() {
        state.feed(line, ctx);
    }
    let layout = state.finish(ctx);

    debug!(
        zoom,
        viewport_width,
        elements = layout.elements.len(),
        content_height = layout.content_height,
        "Parsed document"
    );
    layout
}

/// Text block kinds that go through word-wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextKind {
    Paragraph,
    ListItem,
    Heading(u8),
}

/// Scan state threaded through one parse pass.
#[derive(Debug)]
pub struct ParserState {
    metrics: PageMetrics,
    cursor: f64,
    elements: Vec<Element>,
    code_block: Option<Vec<String>>,
}

impl ParserState {
    /// Fresh state with the cursor at the top offset.
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            cursor: metrics.scale(TOP_OFFSET),
            metrics,
            elements: Vec::new(),
            code_block: None,
        }
    }

    /// Current vertical cursor in content space.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Consume one raw document line.
    pub fn feed(&mut self, raw_line: &str, ctx: &mut ParseContext<'_>) {
        let line = raw_line.trim();

        if block::is_fence(line) {
            match self.code_block.take() {
                Some(lines) => self.flush_code_block(lines, ctx.theme),
                None => self.code_block = Some(Vec::new()),
            }
            return;
        }
        if let Some(lines) = self.code_block.as_mut() {
            lines.push(raw_line.to_string());
            return;
        }

        match block::classify(line) {
            Block::Blank => self.advance(BLANK_LINE_GAP),
            Block::Divider => self.place_divider(),
            Block::Image { url } => self.place_image(url, ctx),
            Block::Heading { level, text } => {
                self.advance(HEADING_GAPS_BEFORE[usize::from(level) - 1]);
                self.place_text(text, TextKind::Heading(level), ctx);
            }
            Block::ListItem { text } => self.place_text(text, TextKind::ListItem, ctx),
            Block::Paragraph { text } => self.place_text(text, TextKind::Paragraph, ctx),
        }
    }

    /// Close any open code block and produce the layout.
    pub fn finish(mut self, ctx: &mut ParseContext<'_>) -> DocumentLayout {
        if let Some(lines) = self.code_block.take() {
            debug!(lines = lines.len(), "Flushing unterminated code fence");
            self.flush_code_block(lines, ctx.theme);
        }
        let content_height = to_px(self.cursor + self.metrics.scale(BOTTOM_MARGIN));
        DocumentLayout::new(self.elements, content_height)
    }

    fn advance(&mut self, base: f64) {
        self.cursor += self.metrics.scale(base);
    }

    fn place_divider(&mut self) {
        let m = self.metrics;
        self.elements.push(Element::Divider(Divider {
            x: to_px(m.margin),
            y: to_px(self.cursor + m.scale(DIVIDER_ADVANCE) / 2.0),
            width: to_px(m.content_width),
        }));
        self.advance(DIVIDER_ADVANCE);
    }

    fn place_image(&mut self, url: &str, ctx: &mut ParseContext<'_>) {
        let m = self.metrics;
        let max_width = m.content_width.max(0.0);
        let entry = ctx.images.get_or_request(url);

        let (width, height) = match entry.natural_size() {
            Some(size) if size.width > 0 => {
                let scale = (max_width / f64::from(size.width)).min(1.0);
                (f64::from(size.width) * scale, f64::from(size.height) * scale)
            }
            Some(size) => (0.0, f64::from(size.height)),
            None => (max_width, max_width / 2.0),
        };

        self.elements.push(Element::Image(ImageElement {
            source_url: url.to_string(),
            x: to_px(m.margin),
            y: to_px(self.cursor),
            width: to_px(width),
            height: to_px(height),
            handle: entry.handle,
            ready: entry.is_ready(),
        }));
        self.cursor += height + m.scale(IMAGE_GAP);
    }

    fn place_text(&mut self, text: &str, kind: TextKind, ctx: &mut ParseContext<'_>) {
        let m = self.metrics;
        let theme = ctx.theme;

        let list_item = kind == TextKind::ListItem;
        let (stripped, style) = inline::strip(text, list_item);
        let content = if list_item {
            format!("{} {}", theme.bullet, stripped)
        } else {
            stripped
        };

        let (base_size, heading_level) = match kind {
            TextKind::Heading(level) => (HEADING_FONT_SIZES[usize::from(level) - 1], level),
            TextKind::Paragraph | TextKind::ListItem => (BODY_FONT_SIZE, 0),
        };
        let heading = heading_level > 0;
        let indent = if list_item { m.scale(LIST_INDENT) } else { 0.0 };
        let color = if style.code {
            &theme.code_color
        } else if heading {
            &theme.heading_color
        } else {
            &theme.text_color
        };

        let font_size = m.font_size(base_size);
        let font = FontDescriptor::for_style(font_size, style.bold, heading, style.code);
        let x = to_px(m.margin + indent);
        let wrapped = wrap(&content, &font, m.content_width - indent, ctx.measurer);

        for line in wrapped.lines {
            self.elements.push(Element::Text(TextRun {
                content: line.text,
                font_size,
                x,
                y: to_px(self.cursor + f64::from(line.y_offset)),
                color: color.clone(),
                bold: style.bold,
                italic: style.italic,
                code: style.code,
                heading,
                heading_level,
            }));
        }

        let gap = if heading {
            HEADING_GAP_AFTER
        } else {
            BLOCK_GAP_AFTER
        };
        self.cursor += f64::from(wrapped.height);
        self.advance(gap);
    }

    fn flush_code_block(&mut self, lines: Vec<String>, theme: &LayoutTheme) {
        let m = self.metrics;
        let top = self.cursor;
        let pitch = m.scale(CODE_LINE_HEIGHT);
        let inset = m.scale(CODE_BLOCK_INSET);
        let height = lines.len() as f64 * pitch + m.scale(CODE_BLOCK_PADDING);

        self.elements
            .push(Element::CodeBlockBackground(CodeBlockBackground {
                x: to_px(m.margin),
                y: to_px(top),
                width: to_px(m.content_width),
                height: to_px(height),
            }));

        let font_size = m.font_size(CODE_FONT_SIZE);
        for (index, content) in lines.into_iter().enumerate() {
            self.elements.push(Element::Text(TextRun {
                content,
                font_size,
                x: to_px(m.margin + inset),
                y: to_px(top + inset + index as f64 * pitch),
                color: theme.code_color.clone(),
                bold: false,
                italic: false,
                code: true,
                heading: false,
                heading_level: 0,
            }));
        }

        self.cursor = top + height;
        self.advance(CODE_BLOCK_GAP);
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
