use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::data::viewport::Viewport;
use crate::core::errors::engine::{EngineError, EngineResult};
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;

pub const DEFAULT_MAX_ITERATIONS_CAP: u32 = 10_000;
pub const DEFAULT_MAX_PIXELS: u64 = 1 << 26;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// Settings fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// The view the engine starts with and returns to on reset.
    pub default_viewport: Viewport,
    /// Upper bound accepted by `set_max_iterations`; caps render cost.
    pub max_iterations_cap: u32,
    /// Largest raster `render_frame` will allocate, in pixels.
    pub max_pixels: u64,
    pub palette: PaletteKind,
    /// Skip iterating points in the main cardioid and period-2 bulb.
    pub interior_check: bool,
    /// Render rows on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_viewport: Viewport::default(),
            max_iterations_cap: DEFAULT_MAX_ITERATIONS_CAP,
            max_pixels: DEFAULT_MAX_PIXELS,
            palette: PaletteKind::default(),
            interior_check: true,
            parallel: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.default_viewport.validate()?;

        if self.max_iterations_cap == 0 {
            return Err(EngineError::invalid(
                "max_iterations_cap",
                "must be greater than zero",
            ));
        }

        if self.max_pixels == 0 {
            return Err(EngineError::invalid(
                "max_pixels",
                "must be greater than zero",
            ));
        }

        if self.default_viewport.max_iterations() > self.max_iterations_cap {
            return Err(EngineError::invalid(
                "max_iterations",
                format!(
                    "default of {} exceeds the cap of {}",
                    self.default_viewport.max_iterations(),
                    self.max_iterations_cap
                ),
            ));
        }

        Ok(())
    }
}
