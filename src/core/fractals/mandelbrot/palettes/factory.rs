use crate::core::fractals::mandelbrot::palettes::blue_white_gradient::BlueWhiteGradientPalette;
use crate::core::fractals::mandelbrot::palettes::classic::ClassicPalette;
use crate::core::fractals::mandelbrot::palettes::fire_gradient::FireGradientPalette;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::palettes::palette::MandelbrotPalette;

#[must_use]
pub fn mandelbrot_palette_factory(
    kind: PaletteKind,
    max_iterations: u32,
) -> Box<dyn MandelbrotPalette> {
    match kind {
        PaletteKind::Classic => Box::new(ClassicPalette::new(max_iterations)),
        PaletteKind::FireGradient => Box::new(FireGradientPalette::new(max_iterations)),
        PaletteKind::BlueWhiteGradient => Box::new(BlueWhiteGradientPalette::new(max_iterations)),
    }
}
