use crate::core::data::complex::Complex;

/// Outcome of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTime {
    pub escaped: bool,
    pub count: u32,
}

impl EscapeTime {
    #[must_use]
    pub const fn escaped_after(count: u32) -> Self {
        Self {
            escaped: true,
            count,
        }
    }

    #[must_use]
    pub const fn interior(max_iterations: u32) -> Self {
        Self {
            escaped: false,
            count: max_iterations,
        }
    }
}

/// The per-pixel iteration function. Implementations must be pure: the
/// renderer calls `iterate` from many threads at once.
pub trait EscapeTimeAlgorithm: Send + Sync {
    fn iterate(&self, c: Complex, max_iterations: u32) -> EscapeTime;

    fn display_name(&self) -> &str;
}
