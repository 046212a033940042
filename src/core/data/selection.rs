use crate::core::data::pixel_request::PixelRequest;

/// A square region of pixel space, `size` pixels on a side, whose top-left
/// corner is `(x_pixel, y_pixel)`.
///
/// Selections are always square so that zooming into one keeps the aspect
/// ratio of the view. Only [`SelectionRectangle::from_drag`] accepts a
/// non-square gesture, and it squares it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionRectangle {
    pub x_pixel: i32,
    pub y_pixel: i32,
    pub size: i32,
}

impl SelectionRectangle {
    #[must_use]
    pub const fn new(x_pixel: i32, y_pixel: i32, size: i32) -> Self {
        Self {
            x_pixel,
            y_pixel,
            size,
        }
    }

    /// The whole square at the center of `request`, i.e. a no-op zoom.
    #[must_use]
    pub fn centered(request: PixelRequest) -> Self {
        let size = request.min_dimension();
        let x_pixel = (request.width() - size) / 2;
        let y_pixel = (request.height() - size) / 2;

        Self::new(
            i32::try_from(x_pixel).unwrap_or(i32::MAX),
            i32::try_from(y_pixel).unwrap_or(i32::MAX),
            i32::try_from(size).unwrap_or(i32::MAX),
        )
    }

    /// Squares a drag gesture from `start` to `end`.
    ///
    /// The side is the longer of the two drag extents. The square stays
    /// anchored at `start` and grows in the direction of the drag, so a drag
    /// up and to the left selects the square whose bottom-right corner is
    /// `start`.
    #[must_use]
    pub fn from_drag(start: (i32, i32), end: (i32, i32)) -> Self {
        let dx = end.0.saturating_sub(start.0);
        let dy = end.1.saturating_sub(start.1);
        let size = dx.saturating_abs().max(dy.saturating_abs());

        let x_pixel = if dx < 0 { start.0.saturating_sub(size) } else { start.0 };
        let y_pixel = if dy < 0 { start.1.saturating_sub(size) } else { start.1 };

        Self::new(x_pixel, y_pixel, size)
    }

    /// Limits `size` to the shorter raster dimension.
    #[must_use]
    pub fn clamped_to(self, request: PixelRequest) -> Self {
        let limit = i32::try_from(request.min_dimension()).unwrap_or(i32::MAX);

        Self {
            size: self.size.min(limit),
            ..self
        }
    }
}
