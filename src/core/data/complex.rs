use std::ops::{Add, Mul, Sub};

/// A point in the complex plane, in native `f64` precision.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            real: (self.real + other.real) / 2.0,
            imag: (self.imag + other.imag) / 2.0,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add_and_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(-3.0, -7.0);

        assert_eq!(a + b, Complex::new(-2.0, -5.0));
        assert_eq!(a - b, Complex::new(4.0, 9.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);

        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_midpoint() {
        let a = Complex::new(-2.0, 1.0);
        let b = Complex::new(1.0, -3.0);

        assert_eq!(a.midpoint(b), Complex::new(-0.5, -1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
