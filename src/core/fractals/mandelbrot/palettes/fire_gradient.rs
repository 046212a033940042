use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTime;
use crate::core::actions::render_frame::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::palettes::palette::{MandelbrotPalette, escape_fraction};

#[derive(Debug)]
pub struct FireGradientPalette {
    max_iterations: u32,
}

impl FireGradientPalette {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl Palette for FireGradientPalette {
    fn colour(&self, escape: EscapeTime) -> Colour {
        if !escape.escaped {
            return Colour::INTERIOR;
        }

        let t = escape_fraction(escape, self.max_iterations);

        // black -> red -> orange -> yellow -> white
        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Colour::opaque(r, g, b)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotPalette for FireGradientPalette {
    fn kind(&self) -> PaletteKind {
        PaletteKind::FireGradient
    }
}
