use crate::core::data::pixel_request::PixelRequest;
use crate::core::data::selection::SelectionRectangle;
use crate::core::data::viewport::Viewport;
use crate::core::errors::engine::{EngineError, EngineResult};
use crate::core::util::coordinate_mapper::PixelMapping;

/// Computes the viewport that shows exactly the selected square.
///
/// The selection's top-left corner and the point `size` pixels diagonally
/// from it are mapped through the current viewport; the new center is their
/// midpoint and the new scale is half the real-axis extent between them.
/// `max_iterations` is carried over. The selection is trusted to be within
/// the raster; the caller clamps it.
pub fn zoom_into_box(
    selection: SelectionRectangle,
    request: PixelRequest,
    viewport: &Viewport,
) -> EngineResult<Viewport> {
    if selection.size <= 0 {
        return Err(EngineError::invalid(
            "size",
            format!("selection size must be positive, got {}", selection.size),
        ));
    }

    let mapping = PixelMapping::new(viewport, request);
    let x = f64::from(selection.x_pixel);
    let y = f64::from(selection.y_pixel);
    let size = f64::from(selection.size);

    let top_left = mapping.to_complex(x, y);
    let bottom_right = mapping.to_complex(x + size, y + size);
    let center = top_left.midpoint(bottom_right);
    let scale = (bottom_right.real - top_left.real).abs() / 2.0;

    if !(scale > 0.0 && center.is_finite()) {
        return Err(EngineError::invalid(
            "size",
            format!("zooming into {size} pixels exceeds f64 precision at this scale"),
        ));
    }

    Viewport::new(center.real, center.imag, scale, viewport.max_iterations())
}
