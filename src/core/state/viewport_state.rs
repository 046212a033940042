use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::data::viewport::Viewport;
use crate::core::errors::engine::{EngineError, EngineResult};
use crate::core::util::parse_decimal::{parse_finite, parse_positive};

/// The single shared viewport, behind an exclusive lock.
///
/// Every mutation is a read-modify-write under the lock that either stores a
/// fully validated viewport or leaves the old one untouched. Readers take a
/// copy, so a render never sees a mutation that starts after its snapshot.
#[derive(Debug)]
pub struct ViewportState {
    current: Mutex<Viewport>,
    max_iterations_cap: u32,
}

impl ViewportState {
    #[must_use]
    pub fn new(initial: Viewport, max_iterations_cap: u32) -> Self {
        Self {
            current: Mutex::new(initial),
            max_iterations_cap,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Viewport {
        *self.lock()
    }

    pub fn replace(&self, viewport: Viewport) {
        *self.lock() = viewport;
    }

    /// Applies `change` to the current viewport while holding the lock.
    pub fn update<F>(&self, change: F) -> EngineResult<Viewport>
    where
        F: FnOnce(&Viewport) -> EngineResult<Viewport>,
    {
        let mut guard = self.lock();
        let next = change(&guard)?;
        next.validate()?;
        *guard = next;

        Ok(next)
    }

    pub fn set_scale(&self, value: &str) -> EngineResult<Viewport> {
        let scale = parse_positive("zoom", value)?;
        self.update(|viewport| viewport.with_scale(scale))
    }

    pub fn set_center_re(&self, value: &str) -> EngineResult<Viewport> {
        let center_re = parse_finite("pos_re", value)?;
        self.update(|viewport| viewport.with_center_re(center_re))
    }

    pub fn set_center_im(&self, value: &str) -> EngineResult<Viewport> {
        let center_im = parse_finite("pos_im", value)?;
        self.update(|viewport| viewport.with_center_im(center_im))
    }

    pub fn set_max_iterations(&self, value: i64) -> EngineResult<Viewport> {
        let max_iterations = u32::try_from(value)
            .ok()
            .filter(|&n| (1..=self.max_iterations_cap).contains(&n))
            .ok_or_else(|| {
                EngineError::invalid(
                    "max_iterations",
                    format!(
                        "{value} is outside 1..={}",
                        self.max_iterations_cap
                    ),
                )
            })?;

        self.update(|viewport| viewport.with_max_iterations(max_iterations))
    }

    // The guarded value is `Copy` and only ever assigned whole, so a panic
    // while holding the lock cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Viewport> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn state() -> ViewportState {
        ViewportState::new(Viewport::default(), 1000)
    }

    #[test]
    fn snapshot_returns_initial_viewport() {
        assert_eq!(state().snapshot(), Viewport::default());
    }

    #[test]
    fn set_scale_replaces_scale_only() {
        let state = state();

        state.set_scale("0.25").unwrap();

        let viewport = state.snapshot();
        assert_eq!(viewport.scale(), 0.25);
        assert_eq!(viewport.center_re(), -0.6);
    }

    #[test]
    fn set_scale_rejects_invalid_values_and_keeps_state() {
        let state = state();

        for value in ["abc", "0", "-1", "inf", "NaN"] {
            assert!(state.set_scale(value).is_err(), "{value:?} was accepted");
        }

        assert_eq!(state.snapshot(), Viewport::default());
    }

    #[test]
    fn set_center_accepts_any_finite_value() {
        let state = state();

        state.set_center_re("-1.25").unwrap();
        state.set_center_im("0.5").unwrap();

        let viewport = state.snapshot();
        assert_eq!(viewport.center_re(), -1.25);
        assert_eq!(viewport.center_im(), 0.5);

        assert!(state.set_center_re("1e400").is_err());
        assert!(state.set_center_im("x").is_err());
        assert_eq!(state.snapshot(), viewport);
    }

    #[test]
    fn set_max_iterations_enforces_bounds() {
        let state = state();

        assert!(state.set_max_iterations(0).is_err());
        assert!(state.set_max_iterations(-5).is_err());
        assert!(state.set_max_iterations(1001).is_err());
        assert!(state.set_max_iterations(i64::MAX).is_err());
        assert_eq!(state.snapshot().max_iterations(), 100);

        state.set_max_iterations(1000).unwrap();
        assert_eq!(state.snapshot().max_iterations(), 1000);

        state.set_max_iterations(1).unwrap();
        assert_eq!(state.snapshot().max_iterations(), 1);
    }

    #[test]
    fn update_error_leaves_state_unchanged() {
        let state = state();

        let result = state.update(|_| Err(EngineError::invalid("size", "nope")));

        assert!(result.is_err());
        assert_eq!(state.snapshot(), Viewport::default());
    }

    #[test]
    fn replace_swaps_the_whole_viewport() {
        let state = state();
        let next = Viewport::new(0.1, 0.2, 0.3, 40).unwrap();

        state.replace(next);

        assert_eq!(state.snapshot(), next);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let state = state();
        let snapshot = state.snapshot();

        state.set_scale("0.001").unwrap();

        assert_eq!(snapshot.scale(), 1.65);
    }

    #[test]
    fn concurrent_updates_are_serialized() {
        let state = Arc::new(state());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for _ in 0..100 {
                        state
                            .update(|viewport| {
                                viewport.with_center_re(viewport.center_re() + 1.0)
                            })
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!((state.snapshot().center_re() - 799.4).abs() < 1e-9);
    }
}
