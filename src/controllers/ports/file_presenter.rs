use std::path::Path;

use crate::core::data::frame::Frame;
use crate::presenters::json::frame_json::PresentError;

pub trait FilePresenterPort {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), PresentError>;
}
