use super::core::{precompute_twiddles, radix_2_fft_core};
use super::types::Sc16;
use crate::common::{Direction, FftError, FftProcess, guard, is_power_of_two};

/// Twiddle table for the `sc16` transform, backed by caller storage.
///
/// A table prepared for a maximum length `N` serves every power-of-two length up to `N`.
pub struct Sc16Table<'a> {
    twiddles: &'a mut [Sc16],
    max_len: usize,
    direction: Direction,
    initialized: bool,
}

impl<'a> Sc16Table<'a> {
    /// Wraps storage without filling it. The table reports uninitialized until [`Sc16Table::init`].
    pub fn new(twiddles: &'a mut [Sc16]) -> Self {
        Self {
            twiddles,
            max_len: 0,
            direction: Direction::Forward,
            initialized: false,
        }
    }

    /// Wraps storage and prepares it for transforms up to `max_len` points.
    pub fn with_storage(
        twiddles: &'a mut [Sc16],
        max_len: usize,
        direction: Direction,
    ) -> Result<Self, FftError> {
        let mut table = Self::new(twiddles);
        table.init(max_len, direction)?;
        Ok(table)
    }

    /// Fills the table for transforms up to `max_len` points and marks it ready.
    /// Needs room for `max_len / 2` entries.
    pub fn init(&mut self, max_len: usize, direction: Direction) -> Result<(), FftError> {
        if !isize::try_from(max_len).is_ok_and(is_power_of_two) {
            return Err(FftError::InvalidLength);
        }
        if self.twiddles.len() < max_len / 2 {
            return Err(FftError::BufferTooSmall);
        }

        self.initialized = false;
        precompute_twiddles(self.twiddles, max_len, direction)?;
        self.max_len = max_len;
        self.direction = direction;
        self.initialized = true;
        fft_debug!("sc16: twiddle table ready for N <= {} ({:?})", max_len, direction);
        Ok(())
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Largest transform length the table was prepared for; 0 before init.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Coefficients in the order the stage walk consumes them.
    #[inline]
    pub fn entries(&self) -> &[Sc16] {
        &self.twiddles[..self.max_len / 2]
    }
}

/// Radix-2 FFT over `sc16` samples, in place.
///
/// `N` is `data.len()`. Input is in natural order; output is in bit-reversed
/// order and scaled by `1/N` (every stage halves). Nothing is written when an
/// error is returned.
///
/// # Panics
/// When `N` exceeds the length the table was prepared for.
pub fn fft2r_sc16(data: &mut [Sc16], table: &Sc16Table<'_>) -> Result<(), FftError> {
    guard(data.len(), table.is_initialized(), "sc16")?;
    radix_2_fft_core(data, table.entries());
    Ok(())
}

impl FftProcess<Sc16> for Sc16Table<'_> {
    fn process(&self, buffer: &mut [Sc16]) -> Result<(), FftError> {
        fft2r_sc16(buffer, self)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
