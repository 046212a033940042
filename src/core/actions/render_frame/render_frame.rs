use rayon::prelude::*;

use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_frame::ports::palette::Palette;
use crate::core::data::complex::Complex;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_request::{BYTES_PER_PIXEL, PixelRequest};
use crate::core::data::viewport::Viewport;
use crate::core::errors::engine::EngineResult;
use crate::core::util::coordinate_mapper::PixelMapping;

/// Renders every pixel of `request` on the calling thread.
pub fn render_frame_serial<Alg, P>(
    request: PixelRequest,
    viewport: &Viewport,
    algorithm: &Alg,
    palette: &P,
) -> EngineResult<Frame>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    P: Palette + ?Sized,
{
    let mapping = PixelMapping::new(viewport, request);
    let mut pixels = vec![0; request.buffer_len()];

    for (y, row) in pixels.chunks_exact_mut(request.row_len()).enumerate() {
        render_row(y, row, &mapping, viewport.max_iterations(), algorithm, palette);
    }

    Frame::from_data(request, pixels)
}

/// Renders rows in parallel on rayon's work-stealing pool.
///
/// Rows only share the immutable viewport, mapping, algorithm and palette,
/// so the output is byte-identical to [`render_frame_serial`].
pub fn render_frame_parallel<Alg, P>(
    request: PixelRequest,
    viewport: &Viewport,
    algorithm: &Alg,
    palette: &P,
) -> EngineResult<Frame>
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    P: Palette + ?Sized,
{
    let mapping = PixelMapping::new(viewport, request);
    let mut pixels = vec![0; request.buffer_len()];

    pixels
        .par_chunks_exact_mut(request.row_len())
        .enumerate()
        .for_each(|(y, row)| {
            render_row(y, row, &mapping, viewport.max_iterations(), algorithm, palette);
        });

    Frame::from_data(request, pixels)
}

#[inline]
fn render_row<Alg, P>(
    y: usize,
    row: &mut [u8],
    mapping: &PixelMapping,
    max_iterations: u32,
    algorithm: &Alg,
    palette: &P,
) where
    Alg: EscapeTimeAlgorithm + ?Sized,
    P: Palette + ?Sized,
{
    let im = mapping.im(y as f64);

    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let c = Complex::new(mapping.re(x as f64), im);
        let escape = algorithm.iterate(c, max_iterations);

        pixel.copy_from_slice(&palette.colour(escape).to_rgba());
    }
}
