use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTime;
use crate::core::actions::render_frame::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;

pub trait MandelbrotPalette: Palette {
    fn kind(&self) -> PaletteKind;
}

impl Palette for Box<dyn MandelbrotPalette> {
    fn colour(&self, escape: EscapeTime) -> Colour {
        (**self).colour(escape)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Fraction of the iteration bound used before escaping, in `0.0..=1.0`.
pub(crate) fn escape_fraction(escape: EscapeTime, max_iterations: u32) -> f64 {
    f64::from(escape.count.min(max_iterations)) / f64::from(max_iterations.max(1))
}
