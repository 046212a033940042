use crate::core::errors::engine::{EngineError, EngineResult};

pub const BYTES_PER_PIXEL: usize = 4;

/// Dimensions of a raster to render. Both sides are positive and the RGBA
/// buffer length fits in `usize`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRequest {
    width: u32,
    height: u32,
}

impl PixelRequest {
    pub fn new(width: u32, height: u32) -> EngineResult<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::invalid(
                "dimensions",
                format!("width and height must be positive, got {width}x{height}"),
            ));
        }

        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .is_some();

        if !fits {
            return Err(EngineError::invalid(
                "dimensions",
                format!("{width}x{height} raster is too large"),
            ));
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}
