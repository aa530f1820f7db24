use crate::roots::RootOfUnity;

/// Extends `values` with zeros up to the next power-of-two length.
///
/// Coefficients are in increasing degree order, so the zeros land on the
/// high-degree end and the polynomial keeps its value everywhere.
pub fn pad<S: RootOfUnity>(values: &[S]) -> Vec<S> {
    let n = values.len().next_power_of_two();
    let mut padded = Vec::with_capacity(n);
    padded.extend_from_slice(values);
    padded.resize(n, S::zero());
    padded
}
