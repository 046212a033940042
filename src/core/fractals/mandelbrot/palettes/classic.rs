use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTime;
use crate::core::actions::render_frame::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::palettes::palette::MandelbrotPalette;

/// Blue base with red and green rising together as escape slows.
#[derive(Debug)]
pub struct ClassicPalette {
    max_iterations: u32,
}

impl ClassicPalette {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl Palette for ClassicPalette {
    fn colour(&self, escape: EscapeTime) -> Colour {
        if !escape.escaped {
            return Colour::INTERIOR;
        }

        let max = u64::from(self.max_iterations.max(1));
        let count = u64::from(escape.count).min(max);
        let v = u8::try_from(count * 255 / max).unwrap_or(u8::MAX);

        Colour::opaque(v, v, 255)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotPalette for ClassicPalette {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Classic
    }
}
