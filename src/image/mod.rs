//! Image cache and resolver seam.
//!
//! Image dimensions arrive asynchronously. A parse pass asks the
//! [`ImageCache`] for an entry; the first reference to a URL issues a request
//! to the [`ImageResolver`] and records a pending entry. Completion arrives
//! later as an [`ImageEvent`] on a channel owned by the event loop, which
//! applies it to the cache and triggers one re-layout.
//!
//! Entries are never removed: the cache grows monotonically for the life of
//! the page.

pub mod static_resolver;

pub use static_resolver::StaticImageResolver;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Opaque reference to a requested image, issued by an [`ImageResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageHandle(u64);

impl ImageHandle {
    /// Wrap a resolver-assigned id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Natural pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSize {
    /// Natural width.
    pub width: u32,
    /// Natural height.
    pub height: u32,
}

/// Lifecycle of a cached image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    /// Requested, not yet resolved.
    Pending,
    /// Natural size known.
    Ready(ImageSize),
    /// Resolution failed; the provisional space is kept for good.
    Failed,
}

/// Cache entry for one source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageEntry {
    /// Handle the resolver issued for this URL.
    pub handle: ImageHandle,
    /// Current state.
    pub state: ImageState,
}

impl ImageEntry {
    /// Natural size is known.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ImageState::Ready(_))
    }

    /// Natural size, once ready.
    pub fn natural_size(&self) -> Option<ImageSize> {
        match self.state {
            ImageState::Ready(size) => Some(size),
            ImageState::Pending | ImageState::Failed => None,
        }
    }
}

/// How a resolver request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The image decoded with these natural dimensions.
    Loaded(ImageSize),
    /// The image could not be loaded.
    Failed {
        /// Diagnostic for the log.
        reason: String,
    },
}

/// Completion message delivered by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEvent {
    /// Handle returned by the matching `request`.
    pub handle: ImageHandle,
    /// Result of the load.
    pub outcome: ImageOutcome,
}

/// Effect of applying an [`ImageEvent`] to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageUpdate {
    /// A pending entry became ready; the document must be laid out again.
    Resolved,
    /// A pending entry failed; existing layout stays valid.
    Failed,
    /// Unknown handle or an entry that already completed.
    Ignored,
}

/// Starts loading images and reports completion asynchronously.
///
/// `request` must return immediately. Completion is delivered out of band
/// (for example over an `mpsc` channel) as exactly one [`ImageEvent`] per
/// handle.
pub trait ImageResolver {
    /// Begin loading `url` and return its handle.
    fn request(&mut self, url: &str) -> ImageHandle;
}

/// URL-keyed image cache owned by the page and lent to each parse pass.
pub struct ImageCache {
    entries: HashMap<String, ImageEntry>,
    urls: HashMap<ImageHandle, String>,
    resolver: Box<dyn ImageResolver>,
}

impl ImageCache {
    /// Create an empty cache that requests through `resolver`.
    pub fn new(resolver: Box<dyn ImageResolver>) -> Self {
        Self {
            entries: HashMap::new(),
            urls: HashMap::new(),
            resolver,
        }
    }

    /// Look up `url`, requesting it on first reference.
    pub fn get_or_request(&mut self, url: &str) -> ImageEntry {
        if let Some(entry) = self.entries.get(url) {
            return *entry;
        }

        let handle = self.resolver.request(url);
        debug!(url, handle = handle.get(), "Requested image");
        let entry = ImageEntry {
            handle,
            state: ImageState::Pending,
        };
        self.entries.insert(url.to_string(), entry);
        self.urls.insert(handle, url.to_string());
        entry
    }

    /// Look up `url` without requesting it.
    pub fn get(&self, url: &str) -> Option<&ImageEntry> {
        self.entries.get(url)
    }

    /// Record a resolver completion.
    ///
    /// Only the first completion for a pending handle has an effect, so a
    /// resolver that fires twice still causes a single re-layout.
    pub fn apply(&mut self, event: ImageEvent) -> ImageUpdate {
        let Some(url) = self.urls.get(&event.handle) else {
            debug!(handle = event.handle.get(), "Ignoring event for unknown image");
            return ImageUpdate::Ignored;
        };
        let Some(entry) = self.entries.get_mut(url) else {
            return ImageUpdate::Ignored;
        };
        if entry.state != ImageState::Pending {
            debug!(url = %url, "Ignoring repeated image completion");
            return ImageUpdate::Ignored;
        }

        match event.outcome {
            ImageOutcome::Loaded(size) => {
                debug!(url = %url, width = size.width, height = size.height, "Image ready");
                entry.state = ImageState::Ready(size);
                ImageUpdate::Resolved
            }
            ImageOutcome::Failed { reason } => {
                warn!(url = %url, reason = %reason, "Image failed to load");
                entry.state = ImageState::Failed;
                ImageUpdate::Failed
            }
        }
    }

    /// Number of URLs ever referenced.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no image has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of requested images still waiting for a completion.
    pub fn pending(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.state == ImageState::Pending)
            .count()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
