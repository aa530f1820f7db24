//! Human-readable rendering of spectra and polynomials.
//!
//! Nothing here feeds back into the transform; it only consumes plain
//! [`Complex64`] outputs.

use itertools::Itertools;
use num_complex::Complex64;

use crate::complex::nth_root_power;

/// Distance from an integer below which a value is displayed as that integer.
pub const SNAP_THRESHOLD: f64 = 1e-15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show complex values as `(r ∠ θ°)` instead of `a+b𝑖`.
    pub polar: bool,
    /// Decimal places kept for values that are not exact at that precision.
    pub precision: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            polar: false,
            precision: 2,
        }
    }
}

/// Replaces `x` by the nearest integer when it is within [`SNAP_THRESHOLD`] of it.
pub fn snap(x: f64) -> f64 {
    let n = x.round();
    if (x - n).abs() < SNAP_THRESHOLD {
        n + 0.0 // clears negative zero
    } else {
        x
    }
}

pub fn snap_complex(z: Complex64) -> Complex64 {
    Complex64::new(snap(z.re), snap(z.im))
}

pub fn format_real(x: f64, precision: usize) -> String {
    if x.fract() == 0.0 {
        return format!("{x:.0}");
    }
    let rounded = format!("{x:.precision$}");
    if rounded.parse::<f64>() == Ok(x) {
        format!("{x}")
    } else {
        format!("{rounded}…")
    }
}

/// Renders a complex value. `parens` wraps values with both a real and an
/// imaginary part, for use as a coefficient next to a power of 𝑥.
pub fn format_complex(z: Complex64, options: &DisplayOptions, parens: bool) -> String {
    let z = snap_complex(z);
    let precision = options.precision;

    if options.polar {
        let r = snap(z.norm());
        let phase = snap(z.arg().to_degrees());
        return format!(
            "({} ∠ {}°)",
            format_real(r, precision),
            format_real(phase, precision)
        );
    }

    if z.im == 0.0 {
        return format_real(z.re, precision);
    }

    if z.re == 0.0 {
        return if z.im == 1.0 {
            "𝑖".to_string()
        } else if z.im == -1.0 {
            "-𝑖".to_string()
        } else if z.im < 0.0 {
            format!("-{}𝑖", format_real(-z.im, precision))
        } else {
            format!("{}𝑖", format_real(z.im, precision))
        };
    }

    let s = if z.im < 0.0 {
        format!(
            "{}-{}𝑖",
            format_real(z.re, precision),
            format_real(-z.im, precision)
        )
    } else {
        format!(
            "{}+{}𝑖",
            format_real(z.re, precision),
            format_real(z.im, precision)
        )
    };

    if parens { format!("({s})") } else { s }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

pub fn superscript(n: usize) -> String {
    n.to_string()
        .bytes()
        .map(|d| SUPERSCRIPT_DIGITS[usize::from(d - b'0')])
        .collect()
}

/// One line per sample: `(ωᵏ = <root>, <value>)`.
pub fn format_values(values: &[Complex64], options: &DisplayOptions) -> Vec<String> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(k, &y)| {
            format!(
                "(ω{} = {}, {})",
                superscript(k),
                format_complex(nth_root_power(k, n), options, false),
                format_complex(y, options, false)
            )
        })
        .collect()
}

/// Renders coefficients (increasing degree order) as `P(𝑥) = ...`, highest
/// degree first. Coefficients are always shown in rectangular form.
pub fn format_polynomial(coefficients: &[Complex64], options: &DisplayOptions) -> String {
    let rectangular = DisplayOptions {
        polar: false,
        ..*options
    };
    let one = Complex64::new(1.0, 0.0);

    let mut terms = Vec::new();
    for (i, &c) in coefficients.iter().enumerate().rev() {
        let mut c = snap_complex(c);
        if c.re == 0.0 && c.im == 0.0 {
            continue;
        }

        let op = if terms.is_empty() {
            ""
        } else if c.re < 0.0 || (c.re == 0.0 && c.im < 0.0) {
            c = -c;
            "- "
        } else {
            "+ "
        };

        let factor = if i > 0 {
            format!("𝑥{}", superscript(i))
        } else {
            String::new()
        };
        let coefficient = if i > 0 && c == one {
            String::new()
        } else if i > 0 && c == -one {
            "-".to_string()
        } else {
            format_complex(c, &rectangular, i != 0)
        };

        terms.push(format!("{op}{coefficient}{factor}"));
    }

    if terms.is_empty() {
        terms.push("0".to_string());
    }
    format!("P(𝑥) = {}", terms.iter().join(" "))
}
