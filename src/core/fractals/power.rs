use crate::core::data::complex::Complex;

const INTEGER_TOLERANCE: f64 = 1e-9;
const MAX_INTEGER_EXPONENT: f64 = 64.0;

/// `z ↦ z^exponent`, resolved once per computation.
///
/// Whole exponents use exact repeated squaring so the classic `z² + c` is
/// bit-identical to plain multiplication. Anything else goes through
/// `exp(exponent * ln z)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Power {
    Integer(u32),
    Real(f64),
}

impl Power {
    #[must_use]
    pub fn new(exponent: f64) -> Self {
        let rounded = exponent.round();

        if (exponent - rounded).abs() < INTEGER_TOLERANCE
            && (0.0..=MAX_INTEGER_EXPONENT).contains(&rounded)
        {
            Self::Integer(rounded as u32)
        } else {
            Self::Real(exponent)
        }
    }

    /// `None` when the power is undefined or not representable.
    #[must_use]
    pub fn apply(self, z: Complex) -> Option<Complex> {
        let result = match self {
            Self::Integer(exponent) => integer_power(z, exponent),
            Self::Real(exponent) => real_power(z, exponent)?,
        };

        result.is_finite().then_some(result)
    }
}

fn integer_power(z: Complex, exponent: u32) -> Complex {
    let mut result = Complex::ONE;
    let mut base = z;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * base;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base * base;
        }
    }

    result
}

fn real_power(z: Complex, exponent: f64) -> Option<Complex> {
    if z.is_zero() {
        // ln(0) is undefined; for positive exponents the limit is 0
        return (exponent > 0.0).then_some(Complex::ZERO);
    }

    Some(z.ln().scale(exponent).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < 1e-9 && (a.imag - b.imag).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn whole_exponents_resolve_to_integer_power() {
        assert_eq!(Power::new(2.0), Power::Integer(2));
        assert_eq!(Power::new(0.0), Power::Integer(0));
        // drift from repeated 0.1 steps
        assert_eq!(Power::new(2.0 + 0.1 - 0.1), Power::Integer(2));
        assert_eq!(Power::new(2.1), Power::Real(2.1));
        assert_eq!(Power::new(-1.0), Power::Real(-1.0));
    }

    #[test]
    fn square_matches_multiplication_exactly() {
        let z = Complex::new(0.3, -1.7);
        assert_eq!(Power::new(2.0).apply(z), Some(z * z));
    }

    #[test]
    fn integer_power_by_squaring() {
        let z = Complex::new(1.0, 1.0);
        // (1 + i)^4 = -4
        assert_eq!(Power::Integer(4).apply(z), Some(Complex::new(-4.0, 0.0)));
        assert_eq!(Power::Integer(0).apply(z), Some(Complex::ONE));
        assert_eq!(Power::Integer(1).apply(z), Some(z));
    }

    #[test]
    fn real_power_agrees_with_integer_power_near_whole_exponent() {
        let z = Complex::new(-0.4, 0.9);
        let real = real_power(z, 3.0).unwrap();
        let integer = integer_power(z, 3);

        assert_close(real, integer);
    }

    #[test]
    fn fractional_power_of_positive_real() {
        let result = Power::new(2.5).apply(Complex::new(4.0, 0.0)).unwrap();
        assert_close(result, Complex::new(32.0, 0.0));
    }

    #[test]
    fn zero_base_with_positive_fractional_exponent_is_zero() {
        assert_eq!(Power::new(2.3).apply(Complex::ZERO), Some(Complex::ZERO));
    }

    #[test]
    fn zero_base_with_non_positive_exponent_is_undefined() {
        assert_eq!(Power::new(-0.5).apply(Complex::ZERO), None);
        assert_eq!(Power::new(-2.0).apply(Complex::ZERO), None);
    }

    #[test]
    fn overflow_is_reported_as_undefined() {
        let huge = Complex::new(1e200, 1e200);

        assert_eq!(Power::new(2.0).apply(huge), None);
        assert_eq!(Power::new(2.5).apply(huge), None);
    }
}
