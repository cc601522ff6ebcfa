//! mdcanvas
//!
//! Markdown-to-canvas layout engine. A markdown document is scanned line by
//! line into absolutely positioned elements (text runs, images, dividers, code
//! backgrounds) under a zoom factor and viewport width; a viewport with
//! clamped scroll and zoom selects the elements to paint on each frame.
//!
//! # Module Structure
//!
//! - `parser`: line classification, inline stripping, block layout
//! - `layout`: page metrics, text measurement, word-wrap, theme
//! - `model`: elements, fonts, layouts and error types
//! - `image`: image cache and resolvers
//! - `view_state`: scroll/zoom state and visible element selection
//! - `render`: drawing surface trait, frame rendering, draw commands
//! - `page`: event-driven controller tying the above together
//! - `source`: document fetch on a worker thread
//! - `config`, `logging`: ambient setup for the binary
//! - `integration`: the binary's event loop over channels

pub mod config;
pub mod image;
pub mod integration;
pub mod layout;
pub mod logging;
pub mod model;
pub mod page;
pub mod parser;
pub mod render;
pub mod source;
pub mod view_state;
