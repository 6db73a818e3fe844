use super::core::{precompute_twiddles, radix_2_fft_core};
use crate::common::{Direction, FftError, FftProcess, guard, is_power_of_two};

/// Twiddle table for the `fc32` transform: interleaved `(cos, sin)` pairs in caller storage.
///
/// A table prepared for a maximum length `N` serves every power-of-two length up to `N`.
pub struct Fc32Table<'a> {
    twiddles: &'a mut [f32],
    max_len: usize,
    direction: Direction,
    initialized: bool,
}

impl<'a> Fc32Table<'a> {
    /// Wraps storage without filling it. The table reports uninitialized until [`Fc32Table::init`].
    pub fn new(twiddles: &'a mut [f32]) -> Self {
        Self {
            twiddles,
            max_len: 0,
            direction: Direction::Forward,
            initialized: false,
        }
    }

    /// Wraps storage and prepares it for transforms up to `max_len` points.
    pub fn with_storage(
        twiddles: &'a mut [f32],
        max_len: usize,
        direction: Direction,
    ) -> Result<Self, FftError> {
        let mut table = Self::new(twiddles);
        table.init(max_len, direction)?;
        Ok(table)
    }

    /// Fills the table for transforms up to `max_len` points and marks it ready.
    /// Needs room for `max_len` floats (`max_len / 2` pairs).
    pub fn init(&mut self, max_len: usize, direction: Direction) -> Result<(), FftError> {
        if !isize::try_from(max_len).is_ok_and(is_power_of_two) {
            return Err(FftError::InvalidLength);
        }
        if self.twiddles.len() < max_len {
            return Err(FftError::BufferTooSmall);
        }

        self.initialized = false;
        precompute_twiddles(self.twiddles, max_len, direction)?;
        self.max_len = max_len;
        self.direction = direction;
        self.initialized = true;
        fft_debug!("fc32: twiddle table ready for N <= {} ({:?})", max_len, direction);
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Interleaved coefficients in the order the stage walk consumes them.
    #[inline]
    pub fn entries(&self) -> &[f32] {
        &self.twiddles[..self.max_len]
    }
}

/// Radix-2 FFT over an interleaved `re, im, re, im, ...` buffer, in place.
///
/// `N` is `data.len() / 2`; an odd float count is an invalid length. Input is
/// in natural order; output is in bit-reversed order and unscaled. Nothing is
/// written when an error is returned.
///
/// # Panics
/// When `N` exceeds the length the table was prepared for.
pub fn fft2r_fc32(data: &mut [f32], table: &Fc32Table<'_>) -> Result<(), FftError> {
    if data.len() % 2 != 0 {
        fft_debug!("fc32: odd float count {}", data.len());
        return Err(FftError::InvalidLength);
    }
    guard(data.len() / 2, table.is_initialized(), "fc32")?;
    radix_2_fft_core(data, table.entries());
    Ok(())
}

impl FftProcess<f32> for Fc32Table<'_> {
    fn process(&self, buffer: &mut [f32]) -> Result<(), FftError> {
        fft2r_fc32(buffer, self)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
