pub type EngineResult<T> = Result<T, EngineError>;

/// The only error kind raised by the engine core.
///
/// Every operation that returns it has left all engine state exactly as it
/// was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl EngineError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
