//! Document sources.
//!
//! A [`DocumentSource`] turns a path into markdown text. [`spawn_fetch`] runs
//! the fetch on a worker thread and hands back a channel that delivers exactly
//! one result, so the caller's event loop never blocks on I/O.

use crate::model::error::FetchError;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::{debug, warn};

pub mod file;

pub use file::FileSource;

/// Document loaded when no path is configured.
pub const DEFAULT_DOCUMENT: &str = "README.md";

/// Something that can produce the markdown text for a path.
pub trait DocumentSource {
    /// Fetch the whole document.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no text is available.
    fn fetch(&self, path: &Path) -> Result<String, FetchError>;
}

impl<F> DocumentSource for F
where
    F: Fn(&Path) -> Result<String, FetchError>,
{
    fn fetch(&self, path: &Path) -> Result<String, FetchError> {
        self(path)
    }
}

/// Fetch `path` on a background thread.
///
/// The returned receiver yields exactly one message. If the worker cannot be
/// started, the receiver yields [`FetchError::Disconnected`] on first `recv`
/// because the sender is dropped.
pub fn spawn_fetch<S>(source: S, path: PathBuf) -> Receiver<Result<String, FetchError>>
where
    S: DocumentSource + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("mdcanvas-fetch".to_string())
        .spawn(move || {
            debug!(path = %path.display(), "Fetching document");
            let result = source.fetch(&path);
            if tx.send(result).is_err() {
                debug!("Fetch receiver dropped before delivery");
            }
        });

    if let Err(e) = spawned {
        warn!(error = %e, "Failed to spawn fetch worker");
    }
    rx
}
