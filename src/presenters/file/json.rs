use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use crate::presenters::json::frame_json::PresentError;

/// Writes frames in the same JSON encoding the engine hands to remote callers.
#[derive(Debug, Default)]
pub struct JsonFilePresenter {}

impl JsonFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for JsonFilePresenter {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), PresentError> {
        let mut file = BufWriter::new(File::create(filepath)?);

        serde_json::to_writer(&mut file, frame)?;
        file.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_request::PixelRequest;

    #[test]
    fn test_present_writes_json_file() {
        let request = PixelRequest::new(1, 1).unwrap();
        let frame = Frame::from_data(request, vec![1, 2, 3, 255]).unwrap();
        let path = std::env::temp_dir().join(format!(
            "fractal_viewport_json_test_{}.json",
            std::process::id()
        ));

        JsonFilePresenter::new().present(&frame, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, r#"{"width":1,"height":1,"pixels":[1,2,3,255]}"#);
    }
}
