use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTime;
use crate::core::actions::render_frame::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::palettes::palette::{MandelbrotPalette, escape_fraction};

/// Smooth polynomial blend through deep blue, white and amber.
#[derive(Debug)]
pub struct BlueWhiteGradientPalette {
    max_iterations: u32,
}

impl BlueWhiteGradientPalette {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl Palette for BlueWhiteGradientPalette {
    fn colour(&self, escape: EscapeTime) -> Colour {
        if !escape.escaped {
            return Colour::INTERIOR;
        }

        let t = escape_fraction(escape, self.max_iterations);
        let s = 1.0 - t;

        let r = (9.0 * s * t * t * t * 255.0) as u8;
        let g = (15.0 * s * s * t * t * 255.0) as u8;
        let b = (8.5 * s * s * s * t * 255.0) as u8;

        Colour::opaque(r, g, b)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotPalette for BlueWhiteGradientPalette {
    fn kind(&self) -> PaletteKind {
        PaletteKind::BlueWhiteGradient
    }
}
