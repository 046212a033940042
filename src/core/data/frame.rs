use serde::Serialize;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_request::{BYTES_PER_PIXEL, PixelRequest};
use crate::core::errors::engine::{EngineError, EngineResult};

pub type FrameData = Vec<u8>;

/// A rendered raster: row-major, top-to-bottom, left-to-right RGBA bytes.
///
/// Frames are produced fresh by every render and the engine keeps no
/// reference to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: FrameData,
}

impl Frame {
    pub fn from_data(request: PixelRequest, pixels: FrameData) -> EngineResult<Self> {
        if pixels.len() != request.buffer_len() {
            return Err(EngineError::invalid(
                "pixels",
                format!(
                    "{}x{} frame needs {} bytes, got {}",
                    request.width(),
                    request.height(),
                    request.buffer_len(),
                    pixels.len()
                ),
            ));
        }

        Ok(Self {
            width: request.width(),
            height: request.height(),
            pixels,
        })
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
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> FrameData {
        self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let [r, g, b, a] = self.pixels.get(index..index + BYTES_PER_PIXEL)? else {
            return None;
        };

        Some(Colour {
            r: *r,
            g: *g,
            b: *b,
            a: *a,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: u32, height: u32) -> PixelRequest {
        PixelRequest::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_with_matching_length() {
        let data: FrameData = (0..24).collect();
        let frame = Frame::from_data(request(3, 2), data.clone()).unwrap();

        assert_eq!(frame.width(), 3);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.pixels(), data.as_slice());
    }

    #[test]
    fn test_from_data_length_mismatch_returns_err() {
        let result = Frame::from_data(request(2, 2), vec![0; 15]);

        assert!(matches!(
            result,
            Err(EngineError::InvalidParameter { name: "pixels", .. })
        ));
    }

    #[test]
    fn test_pixel_reads_row_major_rgba() {
        let data: FrameData = (0..24).collect();
        let frame = Frame::from_data(request(3, 2), data).unwrap();

        assert_eq!(
            frame.pixel(0, 0),
            Some(Colour {
                r: 0,
                g: 1,
                b: 2,
                a: 3
            })
        );
        assert_eq!(
            frame.pixel(1, 1),
            Some(Colour {
                r: 16,
                g: 17,
                b: 18,
                a: 19
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let frame = Frame::from_data(request(2, 2), vec![0; 16]).unwrap();

        assert_eq!(frame.pixel(2, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }

    #[test]
    fn test_serializes_width_height_and_pixels() {
        let frame = Frame::from_data(request(1, 1), vec![1, 2, 3, 255]).unwrap();

        assert_eq!(
            serde_json::to_string(&frame).unwrap(),
            r#"{"width":1,"height":1,"pixels":[1,2,3,255]}"#
        );
    }
}
