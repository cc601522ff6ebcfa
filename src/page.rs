//! Page controller.
//!
//! [`Page`] owns the document text, the current [`DocumentLayout`], the
//! viewport and the image cache. Every input arrives as a [`PageEvent`]; the
//! page decides whether it needs a fresh parse or only a redraw.
//!
//! # State Machine
//!
//! - **Loading**: no document yet. Viewport signals are recorded but nothing
//!   is laid out and frames are empty.
//! - **Ready**: document loaded; zoom, width and image completions trigger a
//!   full re-parse under the current zoom.
//! - **Failed**: the fetch failed. The layout stays empty for good.
//!
//! A new layout replaces the old one only after the parse finished, and
//! [`Page::render`] borrows the page immutably, so a frame never sees a
//! half-built element sequence.

use crate::image::{ImageCache, ImageEvent, ImageUpdate};
use crate::layout::{LayoutTheme, TextMeasurer};
use crate::model::error::FetchError;
use crate::model::DocumentLayout;
use crate::parser::{parse, ParseContext};
use crate::render::{render_frame, DrawingSurface};
use crate::view_state::{ViewportChange, ViewportDimensions, ViewportState};
use tracing::{debug, error, info};

/// Lifecycle of the page's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// Waiting for the document fetch.
    Loading,
    /// Document loaded and laid out.
    Ready,
    /// The fetch failed; carries the rendered error.
    Failed(String),
}

/// Input delivered to the page's event loop.
#[derive(Debug)]
pub enum PageEvent {
    /// The document fetch completed.
    DocumentLoaded(Result<String, FetchError>),
    /// The viewport changed size.
    Resize(ViewportDimensions),
    /// Zoom wheel signal; positive deltas zoom out.
    Zoom {
        /// Raw wheel delta.
        delta: f64,
    },
    /// Scroll wheel signal; positive deltas move down the document.
    Scroll {
        /// Raw wheel delta in pixels.
        delta: f64,
    },
    /// An image resolver reported completion.
    ImageResolved(ImageEvent),
}

/// Event-driven markdown page.
pub struct Page {
    document: Option<String>,
    layout: DocumentLayout,
    viewport: ViewportState,
    images: ImageCache,
    measurer: Box<dyn TextMeasurer>,
    theme: LayoutTheme,
    status: PageStatus,
}

impl Page {
    /// Create a page in the `Loading` state.
    pub fn new(
        viewport: ViewportState,
        images: ImageCache,
        measurer: Box<dyn TextMeasurer>,
        theme: LayoutTheme,
    ) -> Self {
        Self {
            document: None,
            layout: DocumentLayout::default(),
            viewport,
            images,
            measurer,
            theme,
            status: PageStatus::Loading,
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    /// Most recent complete layout.
    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    /// Scroll and zoom state.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Image cache, for inspecting load progress.
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// The loaded document text, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Apply one event. Returns true when the next frame may differ.
    pub fn handle_event(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::DocumentLoaded(result) => self.handle_document(result),
            PageEvent::Resize(dimensions) => {
                let change = self.viewport.resize(dimensions);
                self.apply_change(change);
                true
            }
            PageEvent::Zoom { delta } => {
                let change = self.viewport.zoom_by(delta);
                self.apply_change(change);
                change == ViewportChange::Relayout
            }
            PageEvent::Scroll { delta } => {
                let before = self.viewport.scroll_y();
                self.viewport.scroll_by(delta);
                self.viewport.scroll_y() != before
            }
            PageEvent::ImageResolved(image) => match self.images.apply(image) {
                ImageUpdate::Resolved => {
                    self.relayout();
                    true
                }
                ImageUpdate::Failed | ImageUpdate::Ignored => false,
            },
        }
    }

    /// Draw the visible band. Returns the number of elements drawn.
    pub fn render(&self, surface: &mut dyn DrawingSurface) -> usize {
        render_frame(&self.layout, &self.viewport, surface)
    }

    /// Record a failed document fetch: empty layout, `Failed` status.
    ///
    /// Ignored unless the page is still loading. Returns whether the status
    /// changed.
    pub fn fail_load(&mut self, error: &FetchError) -> bool {
        if self.status != PageStatus::Loading {
            debug!("Ignoring repeated document delivery");
            return false;
        }
        error!(error = %error, "Failed to load document");
        self.layout = DocumentLayout::default();
        self.viewport.set_content_height(0);
        self.status = PageStatus::Failed(error.to_string());
        true
    }

    fn handle_document(&mut self, result: Result<String, FetchError>) -> bool {
        if self.status != PageStatus::Loading {
            debug!("Ignoring repeated document delivery");
            return false;
        }

        match result {
            Ok(text) => {
                info!(bytes = text.len(), "Document loaded");
                self.document = Some(text);
                self.status = PageStatus::Ready;
                self.relayout();
            }
            Err(e) => return self.fail_load(&e),
        }
        true
    }

    fn apply_change(&mut self, change: ViewportChange) {
        if change == ViewportChange::Relayout {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let Some(document) = self.document.as_deref() else {
            return;
        };

        let mut ctx = ParseContext {
            measurer: &*self.measurer,
            images: &mut self.images,
            theme: &self.theme,
        };
        let layout = parse(
            document,
            self.viewport.zoom(),
            self.viewport.dimensions().width,
            &mut ctx,
        );

        self.viewport.set_content_height(layout.content_height);
        self.layout = layout;
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("status", &self.status)
            .field("viewport", &self.viewport)
            .field("elements", &self.layout.elements.len())
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
