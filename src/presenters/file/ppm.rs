use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_request::BYTES_PER_PIXEL;
use crate::presenters::json::frame_json::PresentError;

/// Writes frames as binary PPM (P6). PPM has no alpha channel, so alpha is
/// dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), PresentError> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write_ppm(frame, &mut file)?;
        file.flush()?;

        Ok(())
    }
}

pub fn write_ppm(frame: &Frame, out: &mut impl Write) -> std::io::Result<()> {
    // P6 = binary RGB, then width, height and max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", frame.width(), frame.height())?;
    writeln!(out, "255")?;
    out.write_all(&rgba_to_rgb(frame.pixels()))
}

#[must_use]
pub fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect()
}
