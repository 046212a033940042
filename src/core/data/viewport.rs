use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;
use crate::core::data::pixel_request::PixelRequest;
use crate::core::errors::engine::{EngineError, EngineResult};

pub const DEFAULT_CENTER_RE: f64 = -0.6;
pub const DEFAULT_CENTER_IM: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 1.65;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// The current view onto the complex plane.
///
/// `scale` is the half-width of the visible window along the shorter raster
/// dimension. A `Viewport` can only be built through [`Viewport::new`] (or
/// deserialized and then [`Viewport::validate`]d), so `scale > 0` and
/// `max_iterations >= 1` hold for every value the engine stores.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center_re: f64,
    center_im: f64,
    scale: f64,
    max_iterations: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_re: DEFAULT_CENTER_RE,
            center_im: DEFAULT_CENTER_IM,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Viewport {
    pub fn new(
        center_re: f64,
        center_im: f64,
        scale: f64,
        max_iterations: u32,
    ) -> EngineResult<Self> {
        let viewport = Self {
            center_re,
            center_im,
            scale,
            max_iterations,
        };
        viewport.validate()?;

        Ok(viewport)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !self.center_re.is_finite() {
            return Err(EngineError::invalid("center_re", "must be finite"));
        }
        if !self.center_im.is_finite() {
            return Err(EngineError::invalid("center_im", "must be finite"));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(EngineError::invalid(
                "scale",
                format!("must be finite and positive, got {}", self.scale),
            ));
        }
        if self.max_iterations == 0 {
            return Err(EngineError::invalid(
                "max_iterations",
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn center_re(&self) -> f64 {
        self.center_re
    }

    #[must_use]
    pub fn center_im(&self) -> f64 {
        self.center_im
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_re, self.center_im)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn with_scale(self, scale: f64) -> EngineResult<Self> {
        Self::new(self.center_re, self.center_im, scale, self.max_iterations)
    }

    pub fn with_center_re(self, center_re: f64) -> EngineResult<Self> {
        Self::new(center_re, self.center_im, self.scale, self.max_iterations)
    }

    pub fn with_center_im(self, center_im: f64) -> EngineResult<Self> {
        Self::new(self.center_re, center_im, self.scale, self.max_iterations)
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> EngineResult<Self> {
        Self::new(self.center_re, self.center_im, self.scale, max_iterations)
    }

    /// Distance in the complex plane between horizontally adjacent pixels.
    #[must_use]
    pub fn pixel_step(&self, request: PixelRequest) -> f64 {
        2.0 * self.scale / f64::from(request.min_dimension())
    }

    /// Whether adjacent pixels still land on distinct `f64` values around
    /// the center. Past this point the frame degrades into blocks.
    #[must_use]
    pub fn resolves_pixels(&self, request: PixelRequest) -> bool {
        let magnitude = self.center_re.abs().max(self.center_im.abs()).max(1.0);

        self.pixel_step(request) > magnitude * f64::EPSILON * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_classic_start_view() {
        let viewport = Viewport::default();

        assert_eq!(viewport.center_re(), -0.6);
        assert_eq!(viewport.center_im(), 0.0);
        assert_eq!(viewport.scale(), 1.65);
        assert_eq!(viewport.max_iterations(), 100);
        assert!(viewport.validate().is_ok());
    }

    #[test]
    fn new_rejects_non_positive_scale() {
        assert!(Viewport::new(0.0, 0.0, 0.0, 10).is_err());
        assert!(Viewport::new(0.0, 0.0, -1.0, 10).is_err());
        assert!(Viewport::new(0.0, 0.0, f64::INFINITY, 10).is_err());
        assert!(Viewport::new(0.0, 0.0, f64::NAN, 10).is_err());
    }

    #[test]
    fn new_rejects_non_finite_center() {
        let err = Viewport::new(f64::NAN, 0.0, 1.0, 10).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidParameter {
                name: "center_re",
                ..
            }
        ));

        let err = Viewport::new(0.0, f64::NEG_INFINITY, 1.0, 10).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidParameter {
                name: "center_im",
                ..
            }
        ));
    }

    #[test]
    fn new_rejects_zero_iterations() {
        assert!(Viewport::new(0.0, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn with_methods_replace_one_field() {
        let viewport = Viewport::default();

        let zoomed = viewport.with_scale(0.5).unwrap();
        assert_eq!(zoomed.scale(), 0.5);
        assert_eq!(zoomed.center(), viewport.center());
        assert_eq!(zoomed.max_iterations(), viewport.max_iterations());

        let moved = viewport.with_center_re(0.25).unwrap().with_center_im(-0.1).unwrap();
        assert_eq!(moved.center(), Complex::new(0.25, -0.1));

        assert!(viewport.with_max_iterations(0).is_err());
    }

    #[test]
    fn deserialized_viewport_can_be_validated() {
        let viewport: Viewport = serde_json::from_str(
            r#"{"center_re": 0.0, "center_im": 0.0, "scale": -2.0, "max_iterations": 5}"#,
        )
        .unwrap();

        assert!(viewport.validate().is_err());
    }

    #[test]
    fn pixel_step_uses_shorter_dimension() {
        let viewport = Viewport::new(0.0, 0.0, 1.0, 10).unwrap();
        let request = PixelRequest::new(400, 200).unwrap();

        assert_eq!(viewport.pixel_step(request), 0.01);
    }

    #[test]
    fn resolves_pixels_fails_at_extreme_zoom() {
        let request = PixelRequest::new(500, 500).unwrap();

        assert!(Viewport::default().resolves_pixels(request));
        assert!(!Viewport::new(-0.6, 0.0, 1e-17, 100).unwrap().resolves_pixels(request));
    }
}
