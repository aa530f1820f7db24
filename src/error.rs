//! error types for rootfft

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftError {
    #[error("polynomial must have at least one coefficient")]
    EmptyInput,

    #[error("number of points must be a power of 2, got {len}")]
    NotPowerOfTwo { len: usize },

    #[error("no primitive root of unity of order {len}")]
    NoRootOfUnity { len: usize },

    #[error("invalid numeric literal: {0}")]
    InvalidLiteral(String),
}

pub type Result<T> = std::result::Result<T, FftError>;
