//! Domain model types (pure).
//!
//! All types in this module are plain data produced by the parser and
//! consumed by the viewport and render layers.

pub mod element;
pub mod error;
pub mod font;
pub mod layout;

// Re-export for convenience
pub use element::{CodeBlockBackground, Divider, Element, ImageElement, TextRun};
pub use error::{AppError, FetchError};
pub use font::{FontDescriptor, FontFamily, FontWeight};
pub use layout::DocumentLayout;
