//! View-state layer - scrolling, zoom and visible element selection
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ViewportDimensions, ZoomBounds)
//! - `viewport`: ViewportState - scroll/zoom state with clamping, ViewportChange
//! - `visible_range`: visible() - lazy selection of elements in the visible band

pub mod types;
pub mod viewport;
pub mod visible_range;

pub use types::{InvalidZoomBounds, ViewportDimensions, ZoomBounds};
pub use viewport::{ViewportChange, ViewportState};
pub use visible_range::{visible, VisibleElements, OFFSCREEN_MARGIN};
