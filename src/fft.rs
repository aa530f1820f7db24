use itertools::izip;
use tracing::debug;

use crate::error::{FftError, Result};
use crate::padding::pad;
use crate::roots::RootOfUnity;

/// Recursive Cooley–Tukey FFT
///
/// Input:
/// - `values`: coefficients (in increasing order) or samples, length a power of two
/// - `omega`: a primitive n-th root of unity, n = `values.len()`
///
/// Output:
/// - Vector of `f(ω^0), f(ω^1), ..., f(ω^{n-1})`
///
/// Panics if the length is not a power of two.
pub fn transform<S: RootOfUnity>(values: &[S], omega: S) -> Vec<S> {
    let n = values.len();
    assert!(
        n.is_power_of_two(),
        "transform length must be a power of 2, got {n}"
    );
    if n == 1 {
        return values.to_vec(); // base case
    }

    // Split into even and odd powers:
    // f(x) = f_even(x²) + x·f_odd(x²)
    let even = values.iter().step_by(2).copied().collect::<Vec<_>>();
    let odd = values.iter().skip(1).step_by(2).copied().collect::<Vec<_>>();

    // Both halves live on the ω² domain
    let omega_squared = omega.square();
    let even_eval = transform(&even, omega_squared);
    let odd_eval = transform(&odd, omega_squared);

    let half = n / 2;
    let mut r = vec![S::zero(); n];

    // f(ω^k)       = even(ω²^k) + ω^k · odd(ω²^k)
    // f(ω^{k+n/2}) = even(ω²^k) - ω^k · odd(ω²^k)
    let mut w = S::one();
    for (k, e, o) in izip!(0..half, &even_eval, &odd_eval) {
        let t = w * *o;
        r[k] = *e + t;
        r[k + half] = *e - t;
        w = w * omega;
    }

    r
}

/// Evaluates a polynomial at every n-th root of unity, where n is the
/// coefficient count rounded up to a power of two.
pub fn evaluate<S: RootOfUnity>(coefficients: &[S]) -> Result<Vec<S>> {
    if coefficients.is_empty() {
        return Err(FftError::EmptyInput);
    }
    let padded = pad(coefficients);
    let n = padded.len();
    debug!(degree = coefficients.len(), n, "evaluating polynomial");

    let omega = S::principal_root(n).ok_or(FftError::NoRootOfUnity { len: n })?;
    Ok(transform(&padded, omega))
}

/// Recovers the coefficients (increasing degree order) of the polynomial that
/// takes `values[k]` at ω^k. The sample count must already be a power of two.
pub fn interpolate<S: RootOfUnity>(values: &[S]) -> Result<Vec<S>> {
    let n = values.len();
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo { len: n });
    }
    debug!(n, "interpolating points");

    let omega_inv = S::inverse_root(n).ok_or(FftError::NoRootOfUnity { len: n })?;
    // 1/n is applied to the finished output, never to the root
    Ok(transform(values, omega_inv)
        .into_iter()
        .map(|v| v.scale_down(n))
        .collect())
}
