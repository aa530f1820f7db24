//! Polynomial evaluation and interpolation at the n-th roots of unity with a
//! recursive radix-2 Cooley–Tukey FFT.
//!
//! Coefficients are always in increasing degree order: `[c0, c1, c2]` is
//! `c0 + c1·x + c2·x²`.

pub mod complex;
pub mod error;
pub mod fft;
pub mod field;
pub mod format;
pub mod padding;
pub mod roots;

pub use error::{FftError, Result};
pub use fft::{evaluate, interpolate, transform};
pub use format::DisplayOptions;
pub use num_complex::Complex64;
pub use padding::pad;
pub use roots::RootOfUnity;
