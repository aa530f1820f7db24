use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::error::{FftError, Result};
use crate::roots::RootOfUnity;

impl RootOfUnity for Complex64 {
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    /// e^{2πi/n}
    fn principal_root(n: usize) -> Option<Self> {
        Some(Complex64::from_polar(1.0, TAU / n as f64))
    }

    /// e^{-2πi/n}, the conjugate of the principal root
    fn inverse_root(n: usize) -> Option<Self> {
        Self::principal_root(n).map(|w| w.conj())
    }

    fn scale_down(self, n: usize) -> Self {
        self / n as f64
    }
}

/// Evaluates a polynomial (increasing degree order) at `x` with Horner's rule.
pub fn horner(coefficients: &[Complex64], x: Complex64) -> Complex64 {
    coefficients
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// ω_n^k computed from its angle rather than by repeated multiplication.
pub fn nth_root_power(k: usize, n: usize) -> Complex64 {
    Complex64::from_polar(1.0, TAU * k as f64 / n as f64)
}

/// Parses a numeric literal such as `3`, `-2.5`, `1+2i` or `4j`.
pub fn parse_complex(text: &str) -> Result<Complex64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FftError::InvalidLiteral(text.to_string()));
    }
    // `j` is accepted as an alias of the imaginary unit
    let normalized = trimmed.replace('j', "i");
    normalized
        .parse::<Complex64>()
        .map_err(|_| FftError::InvalidLiteral(text.to_string()))
}

/// Parses every literal, keeping their order.
pub fn parse_all<S: AsRef<str>>(literals: &[S]) -> Result<Vec<Complex64>> {
    literals.iter().map(|s| parse_complex(s.as_ref())).collect()
}

/// Parses coefficients listed highest degree first (the command-line order)
/// into increasing degree order.
pub fn parse_descending<S: AsRef<str>>(literals: &[S]) -> Result<Vec<Complex64>> {
    let mut coefficients = parse_all(literals)?;
    coefficients.reverse();
    Ok(coefficients)
}
