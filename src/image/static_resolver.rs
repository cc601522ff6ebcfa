//! Resolver backed by a fixed URL to size table.

use super::{ImageEvent, ImageHandle, ImageOutcome, ImageResolver, ImageSize};
use std::collections::HashMap;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Resolves images from a preconfigured size table.
///
/// Completion is posted to `events` at request time and only observed when
/// the event loop drains the channel, so it always lands after the parse
/// pass that issued the request. URLs missing from the table fail.
#[derive(Debug)]
pub struct StaticImageResolver {
    sizes: HashMap<String, ImageSize>,
    next_handle: u64,
    events: Sender<ImageEvent>,
}

impl StaticImageResolver {
    /// Create a resolver over `sizes` that reports on `events`.
    pub fn new(sizes: HashMap<String, ImageSize>, events: Sender<ImageEvent>) -> Self {
        Self {
            sizes,
            next_handle: 0,
            events,
        }
    }
}

impl ImageResolver for StaticImageResolver {
    fn request(&mut self, url: &str) -> ImageHandle {
        self.next_handle += 1;
        let handle = ImageHandle::new(self.next_handle);

        let outcome = match self.sizes.get(url) {
            Some(size) => ImageOutcome::Loaded(*size),
            None => ImageOutcome::Failed {
                reason: format!("no size configured for {url}"),
            },
        };

        // A closed channel means the page is gone; nobody is waiting.
        if self.events.send(ImageEvent { handle, outcome }).is_err() {
            debug!(url, "Image event receiver dropped");
        }

        handle
    }
}
