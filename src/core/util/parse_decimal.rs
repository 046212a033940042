use crate::core::errors::engine::{EngineError, EngineResult};

/// Parses a decimal string into a finite `f64`.
///
/// Rust's float parser also accepts `inf` and `NaN`; both are rejected.
pub fn parse_finite(name: &'static str, value: &str) -> EngineResult<f64> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| EngineError::invalid(name, format!("{trimmed:?} is not a decimal number")))?;

    if !parsed.is_finite() {
        return Err(EngineError::invalid(name, format!("{trimmed:?} is not finite")));
    }

    Ok(parsed)
}

/// Parses a decimal string into a finite, strictly positive `f64`.
pub fn parse_positive(name: &'static str, value: &str) -> EngineResult<f64> {
    let parsed = parse_finite(name, value)?;

    if parsed <= 0.0 {
        return Err(EngineError::invalid(name, format!("{parsed} is not positive")));
    }

    Ok(parsed)
}
