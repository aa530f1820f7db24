use ark_bls12_381::Fr;
use ark_ff::{FftField, Field, One, Zero};
use ark_poly::DenseUVPolynomial;
use ark_poly::univariate::DensePolynomial;

use crate::roots::RootOfUnity;

/// The transform over the BLS12-381 scalar field. Arithmetic is exact, so
/// results can be compared with `==`.
impl RootOfUnity for Fr {
    fn zero() -> Self {
        <Fr as Zero>::zero()
    }

    fn one() -> Self {
        <Fr as One>::one()
    }

    fn principal_root(n: usize) -> Option<Self> {
        Fr::get_root_of_unity(n as u64)
    }

    fn inverse_root(n: usize) -> Option<Self> {
        Self::principal_root(n).and_then(|w| w.inverse())
    }

    fn scale_down(self, n: usize) -> Self {
        self / Fr::from(n as u64)
    }

    fn square(self) -> Self {
        Field::square(&self)
    }
}

/// Wraps coefficients (increasing degree order) in a dense polynomial.
pub fn vec_to_poly(coefficients: Vec<Fr>) -> DensePolynomial<Fr> {
    DensePolynomial::from_coefficients_vec(coefficients)
}
