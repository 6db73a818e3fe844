// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Length is not an exact power of two.
    InvalidLength,
    /// The twiddle table for the requested domain has not been prepared.
    Uninitialized,
    /// Storage handed to a table is too small for the requested length.
    BufferTooSmall,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength => write!(f, "Length must be a power of 2"),
            FftError::Uninitialized => write!(f, "Twiddle table is not initialized"),
            FftError::BufferTooSmall => write!(f, "Table storage is too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Which way a twiddle table rotates.
///
/// `Inverse` stores the conjugated coefficients, so running the same core
/// over it computes the unscaled inverse transform.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

/// Runs an in-place transform over a buffer of `T` samples.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}

/// Pure power-of-two predicate over a signed length.
/// Zero and negative values are never powers of two.
#[inline]
pub fn is_power_of_two(n: isize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Validates a transform request before any write happens.
///
/// Length is checked first, then the table flag. Returns `N` on success.
pub(crate) fn guard(len: usize, initialized: bool, domain: &str) -> Result<usize, FftError> {
    if !isize::try_from(len).is_ok_and(is_power_of_two) {
        fft_debug!("{}: rejected length {}", domain, len);
        return Err(FftError::InvalidLength);
    }
    if !initialized {
        fft_debug!("{}: twiddle table not initialized", domain);
        return Err(FftError::Uninitialized);
    }
    Ok(len)
}
