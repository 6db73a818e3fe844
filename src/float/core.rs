// src/float/core.rs

use crate::bitrev::bit_reverse_interleaved;
use crate::common::{Direction, FftError};
use crate::stage::{Butterfly, Step, run_stages};
use core::f32::consts::PI;
use num_complex::Complex32;

/// Backend-agnostic sin/cos: std when available, libm otherwise.
#[inline]
pub(crate) fn sin_cos(angle: f32) -> (f32, f32) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sinf(angle), libm::cosf(angle));
}

/// One float butterfly on low sample `a`, high sample `m` and twiddle `(c, s)`.
///
/// Returns `(low, high)` = `(a + rot, a - rot)` with
/// `rot = (c*m.re + s*m.im, c*m.im - s*m.re)`.
#[inline(always)]
pub fn butterfly(a: Complex32, m: Complex32, c: f32, s: f32) -> (Complex32, Complex32) {
    let rot = Complex32::new(c * m.re + s * m.im, c * m.im - s * m.re);
    (a + rot, a - rot)
}

/// Float butterfly unit over an interleaved buffer and an interleaved `(cos, sin)` table.
pub(crate) struct FloatButterfly<'a> {
    pub data: &'a mut [f32],
    pub table: &'a [f32],
}

impl Butterfly for FloatButterfly<'_> {
    #[inline(always)]
    fn apply(&mut self, step: &Step) {
        let c = self.table[2 * step.twiddle];
        let s = self.table[2 * step.twiddle + 1];
        let (lo, hi) = (2 * step.low, 2 * step.high);

        let a = Complex32::new(self.data[lo], self.data[lo + 1]);
        let m = Complex32::new(self.data[hi], self.data[hi + 1]);
        let (low, high) = butterfly(a, m, c, s);

        self.data[hi] = high.re;
        self.data[hi + 1] = high.im;
        self.data[lo] = low.re;
        self.data[lo + 1] = low.im;
    }
}

/// In-place radix-2 core over `n = data.len() / 2` interleaved complex samples.
/// Input natural order, output bit-reversed, unscaled.
pub(crate) fn radix_2_fft_core(data: &mut [f32], table: &[f32]) {
    let n = data.len() / 2;
    run_stages(n, &mut FloatButterfly { data, table });
}

/// Fills `twiddles[..n]` with `n/2` interleaved `(cos, sin)` pairs for an `n`-point transform, bit-reversed.
pub(crate) fn precompute_twiddles(
    twiddles: &mut [f32],
    n: usize,
    direction: Direction,
) -> Result<(), FftError> {
    let e = 2.0 * PI / n as f32;
    for (i, w) in twiddles[..n].chunks_exact_mut(2).enumerate() {
        let (sin, cos) = sin_cos(i as f32 * e);
        w[0] = cos;
        w[1] = match direction {
            Direction::Forward => sin,
            Direction::Inverse => -sin,
        };
    }
    if n > 1 {
        bit_reverse_interleaved(&mut twiddles[..n])?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
