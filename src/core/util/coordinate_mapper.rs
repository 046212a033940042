use crate::core::data::complex::Complex;
use crate::core::data::pixel_request::PixelRequest;
use crate::core::data::viewport::Viewport;

/// Linear map from pixel space to the complex plane for one viewport and
/// raster size.
///
/// The window of half-width `scale` spans the shorter raster dimension and
/// the longer one extends it, so pixels are always square. Pixel `(x, y)`
/// names its top-left corner and `(width/2, height/2)` is the viewport center.
///
/// The imaginary axis points up, as in the usual plot of the complex plane:
/// row 0 is at `center_im + scale` on a square raster. Selecting the top half
/// of a frame therefore moves the center towards positive `im`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelMapping {
    center: Complex,
    half_width: f64,
    half_height: f64,
    step: f64,
}

impl PixelMapping {
    #[must_use]
    pub fn new(viewport: &Viewport, request: PixelRequest) -> Self {
        Self {
            center: viewport.center(),
            half_width: f64::from(request.width()) / 2.0,
            half_height: f64::from(request.height()) / 2.0,
            step: viewport.pixel_step(request),
        }
    }

    #[inline]
    #[must_use]
    pub fn re(&self, x: f64) -> f64 {
        self.center.real + (x - self.half_width) * self.step
    }

    #[inline]
    #[must_use]
    pub fn im(&self, y: f64) -> f64 {
        self.center.imag - (y - self.half_height) * self.step
    }

    #[inline]
    #[must_use]
    pub fn to_complex(&self, x: f64, y: f64) -> Complex {
        Complex::new(self.re(x), self.im(y))
    }

    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> (f64, f64) {
        (
            (point.real - self.center.real) / self.step + self.half_width,
            self.half_height - (point.imag - self.center.imag) / self.step,
        )
    }
}

#[must_use]
pub fn pixel_to_complex(x: f64, y: f64, request: PixelRequest, viewport: &Viewport) -> Complex {
    PixelMapping::new(viewport, request).to_complex(x, y)
}

/// Inverse of [`pixel_to_complex`]; returns fractional pixel coordinates.
#[must_use]
pub fn complex_to_pixel(point: Complex, request: PixelRequest, viewport: &Viewport) -> (f64, f64) {
    PixelMapping::new(viewport, request).to_pixel(point)
}
