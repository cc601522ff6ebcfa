//! Layout engine - page geometry, text measurement and word-wrap.
//!
//! # Module Structure
//!
//! - `constants`: Unzoomed spacing and font-size constants
//! - `metrics`: PageMetrics - zoom-scaled column width and margin
//! - `measure`: TextMeasurer trait and the ApproxMeasurer default
//! - `theme`: LayoutTheme - palette and bullet glyph
//! - `wrap`: Greedy word-wrap producing line offsets and block height

pub mod constants;
pub mod measure;
pub mod metrics;
pub mod theme;
pub mod wrap;

pub use measure::{ApproxMeasurer, TextMeasurer};
pub use metrics::PageMetrics;
pub use theme::LayoutTheme;
pub use wrap::{wrap, WrappedBlock, WrappedLine};
