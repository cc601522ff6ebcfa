//! Core view-state newtypes

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Error returned when zoom bounds are empty, non-positive or not finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid zoom bounds: min={min}, max={max}, step={step}")]
pub struct InvalidZoomBounds {
    /// Requested lower bound.
    pub min: f64,
    /// Requested upper bound.
    pub max: f64,
    /// Requested step per wheel delta unit.
    pub step: f64,
}

/// Allowed zoom range and the zoom change per unit of wheel delta.
///
/// # Invariants
/// - `0 < min <= max`, all values finite
/// - `step > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
    step: f64,
}

impl ZoomBounds {
    /// Default lower bound.
    pub const DEFAULT_MIN: f64 = 0.7;
    /// Default upper bound.
    pub const DEFAULT_MAX: f64 = 2.0;
    /// Default zoom change per wheel delta unit.
    pub const DEFAULT_STEP: f64 = 0.001;

    /// Smart constructor that validates the range.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, InvalidZoomBounds> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || min <= 0.0 || min > max || step <= 0.0 {
            return Err(InvalidZoomBounds { min, max, step });
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Zoom change per wheel delta unit.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamp a zoom level into range.
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            step: Self::DEFAULT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod zoom_bounds {
        use super::*;

        #[test]
        fn default_is_seven_tenths_to_two() {
            let bounds = ZoomBounds::default();
            assert_eq!(bounds.min(), 0.7);
            assert_eq!(bounds.max(), 2.0);
            assert_eq!(bounds.step(), 0.001);
        }

        #[test]
        fn new_accepts_equal_bounds() {
            assert!(ZoomBounds::new(1.0, 1.0, 0.01).is_ok());
        }

        #[test]
        fn new_rejects_inverted_range() {
            let err = ZoomBounds::new(2.0, 1.0, 0.001).unwrap_err();
            assert_eq!(err.min, 2.0);
        }

        #[test]
        fn new_rejects_zero_min_and_step() {
            assert!(ZoomBounds::new(0.0, 1.0, 0.001).is_err());
            assert!(ZoomBounds::new(0.5, 1.0, 0.0).is_err());
        }

        #[test]
        fn new_rejects_non_finite() {
            assert!(ZoomBounds::new(0.5, f64::INFINITY, 0.001).is_err());
            assert!(ZoomBounds::new(f64::NAN, 1.0, 0.001).is_err());
        }

        #[test]
        fn clamp_pins_to_range() {
            let bounds = ZoomBounds::default();
            assert_eq!(bounds.clamp(0.1), 0.7);
            assert_eq!(bounds.clamp(5.0), 2.0);
            assert_eq!(bounds.clamp(1.3), 1.3);
        }
    }

    mod viewport_dimensions {
        use super::*;

        #[test]
        fn new_sets_fields() {
            let dims = ViewportDimensions::new(1280, 800);
            assert_eq!(dims.width, 1280);
            assert_eq!(dims.height, 800);
        }
    }
}
