//! Error types for mdcanvas.
//!
//! Errors are grouped by concern using `thiserror`, composing via `?` and
//! `From` conversions into [`AppError`] at the binary boundary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`FetchError`] - Document source failures (missing file, not text, IO)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber setup failures
//!
//! # Recovery Strategy
//!
//! Only a fetch failure is fatal, and only to initial display: the page keeps an
//! empty layout and the binary reports the failure. Malformed markdown, failed
//! images and degenerate widths are recovered where they are detected and never
//! become errors.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The markdown document could not be fetched.
    ///
    /// **Recovery**: None at startup. The page renders nothing and the binary
    /// exits with a non-zero status after printing this message.
    #[error("Failed to load document: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing layout or draw commands as JSON failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by a [`DocumentSource`](crate::source::DocumentSource).
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use mdcanvas::model::error::FetchError;
///
/// let err = FetchError::NotFound {
///     path: PathBuf::from("/tmp/missing.md"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.md"));
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// Nothing exists at the requested path.
    #[error("Document not found: {path}")]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The document exists but is not valid UTF-8 text.
    #[error("Document is not UTF-8 text: {path}")]
    NotText {
        /// The path that was requested.
        path: PathBuf,
    },

    /// Any other I/O failure while reading the document.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fetch worker went away without delivering a result.
    #[error("Document fetch was abandoned before completing")]
    Disconnected,
}
