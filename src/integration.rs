//! Event loop integration.
//!
//! Wires a [`DocumentSource`], the static image resolver and a [`Page`]
//! together the way the binary drives them: fetch the document on a worker,
//! then replay input signals, letting image completions settle after each
//! step. Everything here works on channels, so it runs the same in tests.

use crate::config::ResolvedConfig;
use crate::image::{ImageCache, ImageEvent, StaticImageResolver};
use crate::layout::ApproxMeasurer;
use crate::model::error::{AppError, FetchError};
use crate::page::{Page, PageEvent};
use crate::source::{spawn_fetch, DocumentSource};
use crate::view_state::ViewportState;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for an outstanding image completion before giving up.
pub const IMAGE_SETTLE_TIMEOUT: Duration = Duration::from_millis(250);

/// Build a loading page from resolved configuration.
///
/// Returns the page and the channel its image resolver reports on.
pub fn build_page(config: &ResolvedConfig) -> (Page, Receiver<ImageEvent>) {
    let (tx, rx) = mpsc::channel();
    let resolver = StaticImageResolver::new(config.images.clone(), tx);
    let viewport = ViewportState::new(config.viewport, config.zoom_bounds);
    let page = Page::new(
        viewport,
        ImageCache::new(Box::new(resolver)),
        Box::new(ApproxMeasurer::default()),
        config.theme.clone(),
    );
    (page, rx)
}

/// Block until the fetch worker delivers, then hand the result to the page.
///
/// A worker that exits without sending is reported as
/// [`FetchError::Disconnected`].
///
/// # Errors
///
/// Returns the fetch error after the page has been marked failed.
pub fn await_document(
    page: &mut Page,
    documents: &Receiver<Result<String, FetchError>>,
) -> Result<(), FetchError> {
    match documents.recv().unwrap_or(Err(FetchError::Disconnected)) {
        Ok(text) => {
            page.handle_event(PageEvent::DocumentLoaded(Ok(text)));
            Ok(())
        }
        Err(e) => {
            page.fail_load(&e);
            Err(e)
        }
    }
}

/// Apply image completions until none are pending or the wait times out.
///
/// Returns the number of events applied.
pub fn settle_images(page: &mut Page, events: &Receiver<ImageEvent>, timeout: Duration) -> usize {
    let mut applied = 0;
    while page.images().pending() > 0 {
        match events.recv_timeout(timeout) {
            Ok(event) => {
                page.handle_event(PageEvent::ImageResolved(event));
                applied += 1;
            }
            Err(_) => {
                debug!(pending = page.images().pending(), "Image settle timed out");
                break;
            }
        }
    }
    applied
}

/// Load the configured document and replay `signals` against it.
///
/// # Errors
///
/// Returns [`AppError::Fetch`] if the document could not be fetched.
pub fn run<S>(config: &ResolvedConfig, source: S, signals: Vec<PageEvent>) -> Result<Page, AppError>
where
    S: DocumentSource + Send + 'static,
{
    let (mut page, image_events) = build_page(config);
    let documents = spawn_fetch(source, config.document.clone());

    await_document(&mut page, &documents)?;
    settle_images(&mut page, &image_events, IMAGE_SETTLE_TIMEOUT);

    let count = signals.len();
    for signal in signals {
        page.handle_event(signal);
        settle_images(&mut page, &image_events, IMAGE_SETTLE_TIMEOUT);
    }

    info!(
        signals = count,
        zoom = page.viewport().zoom(),
        scroll_y = page.viewport().scroll_y(),
        elements = page.layout().elements.len(),
        "Page settled"
    );
    Ok(page)
}
