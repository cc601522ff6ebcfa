//! Acceptance scenarios for document layout and viewport behavior.
//!
//! Each test drives the public API end to end: parse a document, or feed
//! events to a page, and check the exact pixel positions that come out.

use mdcanvas::image::{ImageCache, ImageHandle, ImageResolver};
use mdcanvas::layout::LayoutTheme;
use mdcanvas::model::{DocumentLayout, Element, FontDescriptor, FontWeight, TextRun};
use mdcanvas::page::{Page, PageEvent};
use mdcanvas::parser::{parse, ParseContext};
use mdcanvas::view_state::{ViewportDimensions, ViewportState, ZoomBounds};

// ===== Test Helpers =====

/// Ten pixels per byte.
fn wide(text: &str, _font: &FontDescriptor) -> f64 {
    text.len() as f64 * 10.0
}

#[derive(Default)]
struct NeverResolves {
    next: u64,
}

impl ImageResolver for NeverResolves {
    fn request(&mut self, _url: &str) -> ImageHandle {
        self.next += 1;
        ImageHandle::new(self.next)
    }
}

fn layout_at(document: &str, zoom: f64, width: u32) -> DocumentLayout {
    let theme = LayoutTheme::default();
    let mut images = ImageCache::new(Box::new(NeverResolves::default()));
    let mut ctx = ParseContext {
        measurer: &wide,
        images: &mut images,
        theme: &theme,
    };
    parse(document, zoom, width, &mut ctx)
}

fn layout(document: &str) -> DocumentLayout {
    layout_at(document, 1.0, 1000)
}

fn texts(layout: &DocumentLayout) -> Vec<&TextRun> {
    layout.elements.iter().filter_map(Element::as_text).collect()
}

fn page(document: &str) -> Page {
    let viewport = ViewportState::new(ViewportDimensions::new(1000, 800), ZoomBounds::default());
    let mut page = Page::new(
        viewport,
        ImageCache::new(Box::new(NeverResolves::default())),
        Box::new(wide),
        LayoutTheme::default(),
    );
    page.handle_event(PageEvent::DocumentLoaded(Ok(document.to_string())));
    page
}

// ===== Scenarios =====

#[test]
fn title_and_paragraph() {
    let result = layout("# Title\n\nSome text.");
    let runs = texts(&result);

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].content, "Title");
    assert_eq!(runs[0].font_size, 42);
    assert_eq!(runs[0].font().weight, FontWeight::SemiBold);
    assert_eq!((runs[0].x, runs[0].y), (150, 100));

    assert_eq!(runs[1].content, "Some text.");
    assert_eq!(runs[1].font_size, 18);
    assert_eq!(runs[1].font().weight, FontWeight::Regular);
    assert_eq!((runs[1].x, runs[1].y), (150, 202));

    assert_eq!(result.content_height, 339);
}

#[test]
fn lone_divider() {
    let result = layout("---");

    assert_eq!(result.elements.len(), 1);
    let Element::Divider(divider) = &result.elements[0] else {
        panic!("expected divider, got {:?}", result.elements[0]);
    };
    assert_eq!((divider.x, divider.y, divider.width), (150, 100, 700));
    assert_eq!(result.content_height, 220);
}

#[test]
fn code_fence_lines_are_verbatim() {
    let result = layout("```\nlet x = 1;\n  let **y** = 2;\n```");

    let Element::CodeBlockBackground(bg) = &result.elements[0] else {
        panic!("expected code background first");
    };
    assert_eq!((bg.x, bg.y, bg.width, bg.height), (150, 80, 700, 86));

    let runs = texts(&result);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].content, "let x = 1;");
    assert_eq!(runs[1].content, "  let **y** = 2;");
    assert_eq!((runs[0].x, runs[0].y), (165, 95));
    assert_eq!(runs[1].y, 123);
    assert!(runs.iter().all(|run| run.code && !run.bold));

    // 80 + 86 block + 30 gap + 100 bottom
    assert_eq!(result.content_height, 296);
}

#[test]
fn zoom_in_and_back_reproduces_layout() {
    let document = "# Title\n\nSome **bold** text that is long enough to wrap \
                    across more than one line at this width.\n\n- item\n\n---";
    let mut page = page(document);
    let original = page.layout().clone();

    page.handle_event(PageEvent::Zoom { delta: -500.0 });
    assert_eq!(page.viewport().zoom(), 1.5);
    assert_ne!(page.layout(), &original);

    page.handle_event(PageEvent::Zoom { delta: 500.0 });
    assert_eq!(page.viewport().zoom(), 1.0);
    assert_eq!(page.layout(), &original);
}

#[test]
fn scrolling_past_end_clamps_exactly() {
    let document = "paragraph\n".repeat(60);
    let mut page = page(&document);
    let content_height = page.layout().content_height;
    assert!(content_height > 800);

    page.handle_event(PageEvent::Scroll {
        delta: f64::from(content_height) * 10.0,
    });

    assert_eq!(page.viewport().scroll_y(), f64::from(content_height - 800));

    page.handle_event(PageEvent::Scroll { delta: -1.0e9 });
    assert_eq!(page.viewport().scroll_y(), 0.0);
}

#[test]
fn narrow_viewport_uses_gutter_column() {
    let result = layout_at("plain", 1.0, 600);
    let run = texts(&result)[0];
    assert_eq!(run.x, 40);
}

#[test]
fn degenerate_width_keeps_single_line() {
    let text = "several words that cannot possibly fit";
    let result = layout_at(text, 1.0, 60);
    let runs = texts(&result);

    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].content, text);
}

#[test]
fn pending_image_reserves_half_width_box() {
    let result = layout("![diagram](diagram.svg)\n\nAfter.");

    let Element::Image(image) = &result.elements[0] else {
        panic!("expected image");
    };
    assert_eq!(image.source_url, "diagram.svg");
    assert_eq!((image.x, image.y, image.width, image.height), (150, 80, 700, 350));
    assert!(!image.ready);

    // 80 + 350 + 60 gap + 20 blank
    assert_eq!(texts(&result)[0].y, 510);
}

#[test]
fn malformed_inline_markup_is_plain_text() {
    let result = layout("an **unclosed bold and a `tick");
    let run = texts(&result)[0];

    assert_eq!(run.content, "an unclosed bold and a tick");
    assert!(run.bold);
    assert!(run.code);
}
