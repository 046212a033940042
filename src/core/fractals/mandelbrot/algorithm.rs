use crate::core::actions::render_frame::ports::escape_time_algorithm::{
    EscapeTime, EscapeTimeAlgorithm,
};
use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// `z -> z² + c`, starting from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    interior_check: bool,
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MandelbrotAlgorithm {
    /// With `interior_check`, points inside the main cardioid or the period-2
    /// bulb are reported as interior without iterating. Those points never
    /// escape, so the result is the same either way.
    #[must_use]
    pub const fn new(interior_check: bool) -> Self {
        Self { interior_check }
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn iterate(&self, c: Complex, max_iterations: u32) -> EscapeTime {
        if self.interior_check && in_cardioid_or_bulb(c) {
            return EscapeTime::interior(max_iterations);
        }

        let mut z = Complex::ZERO;

        for count in 1..=max_iterations {
            z = z * z + c;
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return EscapeTime::escaped_after(count);
            }
        }

        EscapeTime::interior(max_iterations)
    }

    fn display_name(&self) -> &str {
        "Mandelbrot"
    }
}

fn in_cardioid_or_bulb(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y2 = c.imag * c.imag;
    let q = x * x + y2;

    if q * (q + x) <= 0.25 * y2 {
        return true;
    }

    let bulb_x = c.real + 1.0;
    bulb_x * bulb_x + y2 <= 1.0 / 16.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_does_not_escape() {
        let algorithm = MandelbrotAlgorithm::new(false);

        assert_eq!(
            algorithm.iterate(Complex::ZERO, 100),
            EscapeTime::interior(100)
        );
    }

    #[test]
    fn test_far_point_escapes_after_one_iteration() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(
            algorithm.iterate(Complex::new(2.0, 2.0), 100),
            EscapeTime::escaped_after(1)
        );
    }

    #[test]
    fn test_point_on_escape_radius_is_not_escaped_yet() {
        let algorithm = MandelbrotAlgorithm::default();

        // c = 2: z1 = 2 (|z|² = 4, not > 4), z2 = 6
        assert_eq!(
            algorithm.iterate(Complex::new(2.0, 0.0), 100),
            EscapeTime::escaped_after(2)
        );
    }

    #[test]
    fn test_main_cardioid_point_is_interior() {
        let result = MandelbrotAlgorithm::new(false).iterate(Complex::new(-0.6, 0.0), 100);

        assert!(!result.escaped);
        assert_eq!(result.count, 100);
    }

    #[test]
    fn test_single_iteration_bound() {
        let algorithm = MandelbrotAlgorithm::new(false);

        assert_eq!(algorithm.iterate(Complex::ZERO, 1), EscapeTime::interior(1));
        assert_eq!(
            algorithm.iterate(Complex::new(3.0, 0.0), 1),
            EscapeTime::escaped_after(1)
        );
    }

    #[test]
    fn test_iterate_is_deterministic() {
        let algorithm = MandelbrotAlgorithm::default();
        let c = Complex::new(-0.743643887, 0.131825904);

        assert_eq!(algorithm.iterate(c, 1000), algorithm.iterate(c, 1000));
    }

    #[test]
    fn test_larger_bound_keeps_escape_count() {
        let algorithm = MandelbrotAlgorithm::new(false);

        for i in 0..200 {
            let c = Complex::new(-2.0 + f64::from(i) * 0.0125, 0.3 + f64::from(i % 7) * 0.05);
            let small = algorithm.iterate(c, 50);
            let large = algorithm.iterate(c, 500);

            if small.escaped {
                assert_eq!(small, large, "count changed for {c:?}");
            } else {
                assert!(!large.escaped || large.count > 50);
            }
        }
    }

    #[test]
    fn test_interior_check_does_not_change_results() {
        let checked = MandelbrotAlgorithm::new(true);
        let plain = MandelbrotAlgorithm::new(false);

        for yi in 0..60 {
            for xi in 0..90 {
                let c = Complex::new(
                    -2.2 + f64::from(xi) * 0.033,
                    -1.2 + f64::from(yi) * 0.04,
                );

                assert_eq!(checked.iterate(c, 200), plain.iterate(c, 200), "at {c:?}");
            }
        }
    }

    #[test]
    fn test_interior_check_short_circuits_known_regions() {
        assert!(in_cardioid_or_bulb(Complex::new(-0.6, 0.0)));
        assert!(in_cardioid_or_bulb(Complex::new(0.0, 0.0)));
        assert!(in_cardioid_or_bulb(Complex::new(-1.0, 0.1)));
        assert!(!in_cardioid_or_bulb(Complex::new(0.5, 0.5)));
        assert!(!in_cardioid_or_bulb(Complex::new(-2.0, 1.0)));
    }
}
