use crate::core::data::frame::Frame;
use crate::core::errors::engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes a frame as `{"width": .., "height": .., "pixels": [..]}`.
pub fn frame_to_json(frame: &Frame) -> Result<String, PresentError> {
    Ok(serde_json::to_string(frame)?)
}
