use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::controllers::engine::config::EngineConfig;
use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_frame::ports::palette::Palette;
use crate::core::actions::render_frame::render_frame::{
    render_frame_parallel, render_frame_serial,
};
use crate::core::actions::zoom_into_box::zoom_into_box;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_request::PixelRequest;
use crate::core::data::selection::SelectionRectangle;
use crate::core::data::viewport::Viewport;
use crate::core::errors::engine::{EngineError, EngineResult};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::palettes::factory::mandelbrot_palette_factory;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::state::viewport_state::ViewportState;
use crate::presenters::json::frame_json::{PresentError, frame_to_json};

/// Entry point for a presentation layer: owns the navigation state and
/// renders frames from it.
///
/// All methods take `&self`; share the engine between threads with an `Arc`.
/// Mutations are serialized by the viewport lock, and each render works from
/// one snapshot taken when it starts.
#[derive(Debug)]
pub struct FractalEngine<A: EscapeTimeAlgorithm = MandelbrotAlgorithm> {
    viewport: ViewportState,
    palette: Mutex<PaletteKind>,
    algorithm: A,
    config: EngineConfig,
}

impl FractalEngine<MandelbrotAlgorithm> {
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let algorithm = MandelbrotAlgorithm::new(config.interior_check);

        Self::with_algorithm(config, algorithm)
    }
}

impl<A: EscapeTimeAlgorithm> FractalEngine<A> {
    pub fn with_algorithm(config: EngineConfig, algorithm: A) -> EngineResult<Self> {
        config.validate()?;

        tracing::debug!(
            algorithm = algorithm.display_name(),
            viewport = ?config.default_viewport,
            max_iterations_cap = config.max_iterations_cap,
            "engine created"
        );

        Ok(Self {
            viewport: ViewportState::new(config.default_viewport, config.max_iterations_cap),
            palette: Mutex::new(config.palette),
            algorithm,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[tracing::instrument(skip(self))]
    pub fn render_frame(&self, width: u32, height: u32) -> EngineResult<Frame> {
        let request = log_rejection(self.renderable_request(width, height))?;
        let viewport = self.viewport.snapshot();
        let palette = mandelbrot_palette_factory(self.palette(), viewport.max_iterations());

        if !viewport.resolves_pixels(request) {
            tracing::warn!(
                scale = viewport.scale(),
                "pixel step is below f64 resolution; frame will be blocky"
            );
        }

        let start = Instant::now();
        let frame = if self.config.parallel {
            render_frame_parallel(request, &viewport, &self.algorithm, &palette)
        } else {
            render_frame_serial(request, &viewport, &self.algorithm, &palette)
        }?;

        tracing::info!(
            width,
            height,
            max_iterations = viewport.max_iterations(),
            palette = palette.display_name(),
            elapsed = ?start.elapsed(),
            "render finished"
        );

        Ok(frame)
    }

    fn renderable_request(&self, width: u32, height: u32) -> EngineResult<PixelRequest> {
        let request = PixelRequest::new(width, height)?;
        let pixels = u64::from(width) * u64::from(height);

        if pixels > self.config.max_pixels {
            return Err(EngineError::invalid(
                "dimensions",
                format!(
                    "{width}x{height} raster exceeds the limit of {} pixels",
                    self.config.max_pixels
                ),
            ));
        }

        Ok(request)
    }

    /// Renders a frame and encodes it as `{"width", "height", "pixels"}` JSON.
    pub fn render_frame_json(&self, width: u32, height: u32) -> Result<String, PresentError> {
        let frame = self.render_frame(width, height)?;

        frame_to_json(&frame)
    }

    /// Zooms so the selected square of a `width` x `height` raster fills the
    /// view. `size` is clamped to the raster's shorter side.
    pub fn zoom_into_box(
        &self,
        x_pixel: i32,
        y_pixel: i32,
        size: i32,
        width: u32,
        height: u32,
    ) -> EngineResult<()> {
        let request = log_rejection(PixelRequest::new(width, height))?;
        let selection = SelectionRectangle::new(x_pixel, y_pixel, size).clamped_to(request);

        let viewport = log_rejection(
            self.viewport
                .update(|current| zoom_into_box(selection, request, current)),
        )?;

        tracing::debug!(
            x_pixel,
            y_pixel,
            size = selection.size,
            center_re = viewport.center_re(),
            center_im = viewport.center_im(),
            scale = viewport.scale(),
            "zoomed into box"
        );

        Ok(())
    }

    pub fn set_zoom(&self, zoom: &str) -> EngineResult<()> {
        let viewport = log_rejection(self.viewport.set_scale(zoom))?;
        tracing::debug!(scale = viewport.scale(), "updated zoom");

        Ok(())
    }

    pub fn set_pos_re(&self, pos_re: &str) -> EngineResult<()> {
        let viewport = log_rejection(self.viewport.set_center_re(pos_re))?;
        tracing::debug!(center_re = viewport.center_re(), "updated pos_re");

        Ok(())
    }

    pub fn set_pos_im(&self, pos_im: &str) -> EngineResult<()> {
        let viewport = log_rejection(self.viewport.set_center_im(pos_im))?;
        tracing::debug!(center_im = viewport.center_im(), "updated pos_im");

        Ok(())
    }

    pub fn set_max_iterations(&self, max_iterations: i64) -> EngineResult<()> {
        let viewport = log_rejection(self.viewport.set_max_iterations(max_iterations))?;
        tracing::debug!(
            max_iterations = viewport.max_iterations(),
            "updated max iterations"
        );

        Ok(())
    }

    pub fn set_palette(&self, name: &str) -> EngineResult<()> {
        let kind: PaletteKind = log_rejection(name.parse())?;
        *self.palette.lock().unwrap_or_else(PoisonError::into_inner) = kind;
        tracing::debug!(palette = %kind, "updated palette");

        Ok(())
    }

    pub fn reset_view(&self) {
        self.viewport.replace(self.config.default_viewport);
        tracing::debug!("view reset");
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.snapshot()
    }

    #[must_use]
    pub fn palette(&self) -> PaletteKind {
        *self.palette.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_zoom(&self) -> f64 {
        self.viewport().scale()
    }

    #[must_use]
    pub fn get_pos_re(&self) -> f64 {
        self.viewport().center_re()
    }

    #[must_use]
    pub fn get_pos_im(&self) -> f64 {
        self.viewport().center_im()
    }

    #[must_use]
    pub fn get_max_iterations(&self) -> u32 {
        self.viewport().max_iterations()
    }
}

fn log_rejection<T>(result: EngineResult<T>) -> EngineResult<T> {
    if let Err(EngineError::InvalidParameter { name, reason }) = &result {
        tracing::debug!(parameter = *name, %reason, "rejected parameter");
    }

    result
}
