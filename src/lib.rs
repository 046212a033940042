mod controllers;
mod core;
mod presenters;

pub use crate::controllers::engine::config::{ConfigError, EngineConfig};
pub use crate::controllers::engine::engine::FractalEngine;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::ports::escape_time_algorithm::{
    EscapeTime, EscapeTimeAlgorithm,
};
pub use crate::core::actions::render_frame::ports::palette::Palette;
pub use crate::core::actions::render_frame::render_frame::{render_frame_parallel, render_frame_serial};
pub use crate::core::actions::zoom_into_box::zoom_into_box;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::pixel_request::PixelRequest;
pub use crate::core::data::selection::SelectionRectangle;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::engine::{EngineError, EngineResult};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::palettes::factory::mandelbrot_palette_factory;
pub use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
pub use crate::core::fractals::mandelbrot::palettes::palette::MandelbrotPalette;
pub use crate::core::util::coordinate_mapper::{PixelMapping, complex_to_pixel, pixel_to_complex};
pub use crate::presenters::file::json::JsonFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::json::frame_json::{PresentError, frame_to_json};
