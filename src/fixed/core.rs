// src/fixed/core.rs

use super::types::Sc16;
use crate::bitrev::bit_reverse;
use crate::common::{Direction, FftError};
use crate::float::sin_cos;
use crate::stage::{Butterfly, Step, run_stages};
use core::f32::consts::PI;

/// Weight applied to the low sample before accumulation (`a << 15`, minus one LSB).
pub const MULT_SHIFT: i32 = 0x7fff;

/// Rounding bias added before the final shift.
pub const ROUND: i32 = 0x7fff;

/// Final right shift. One bit more than the Q15 rescale, so every stage halves.
pub const RESULT_SHIFT: u32 = 16;

// The four butterfly formulas. Every operation wraps in 32 bits and the
// result is truncated to 16 bits: overflow wraps around, it never saturates.

/// `a0 - (a1*a2 + a3*a4)`: real part of the high output.
#[inline(always)]
pub(crate) fn bf_sub_sum(a0: i16, a1: i16, a2: i16, a3: i16, a4: i16) -> i16 {
    let acc = (a0 as i32).wrapping_mul(MULT_SHIFT);
    let rot = (a1 as i32 * a2 as i32).wrapping_add(a3 as i32 * a4 as i32);
    finish(acc.wrapping_sub(rot))
}

/// `a0 - (a1*a2 - a3*a4)`: imaginary part of the high output.
#[inline(always)]
pub(crate) fn bf_sub_diff(a0: i16, a1: i16, a2: i16, a3: i16, a4: i16) -> i16 {
    let acc = (a0 as i32).wrapping_mul(MULT_SHIFT);
    let rot = (a1 as i32 * a2 as i32).wrapping_sub(a3 as i32 * a4 as i32);
    finish(acc.wrapping_sub(rot))
}

/// `a0 + (a1*a2 + a3*a4)`: real part of the low output.
#[inline(always)]
pub(crate) fn bf_add_sum(a0: i16, a1: i16, a2: i16, a3: i16, a4: i16) -> i16 {
    let acc = (a0 as i32).wrapping_mul(MULT_SHIFT);
    let rot = (a1 as i32 * a2 as i32).wrapping_add(a3 as i32 * a4 as i32);
    finish(acc.wrapping_add(rot))
}

/// `a0 + (a1*a2 - a3*a4)`: imaginary part of the low output.
#[inline(always)]
pub(crate) fn bf_add_diff(a0: i16, a1: i16, a2: i16, a3: i16, a4: i16) -> i16 {
    let acc = (a0 as i32).wrapping_mul(MULT_SHIFT);
    let rot = (a1 as i32 * a2 as i32).wrapping_sub(a3 as i32 * a4 as i32);
    finish(acc.wrapping_add(rot))
}

#[inline(always)]
fn finish(acc: i32) -> i16 {
    (acc.wrapping_add(ROUND) >> RESULT_SHIFT) as i16
}

/// One fixed-point butterfly on low sample `a`, high sample `m` and twiddle `cs`.
///
/// Returns `(low, high)` = `((a + cs·m) / 2, (a - cs·m) / 2)`, where `cs·m`
/// rotates `m` by `(c, s)` as `(c*m.re + s*m.im, c*m.im - s*m.re)`.
#[inline(always)]
pub fn butterfly(a: Sc16, m: Sc16, cs: Sc16) -> (Sc16, Sc16) {
    let high = Sc16 {
        re: bf_sub_sum(a.re, cs.re, m.re, cs.im, m.im),
        im: bf_sub_diff(a.im, cs.re, m.im, cs.im, m.re),
    };
    let low = Sc16 {
        re: bf_add_sum(a.re, cs.re, m.re, cs.im, m.im),
        im: bf_add_diff(a.im, cs.re, m.im, cs.im, m.re),
    };
    (low, high)
}

/// Fixed-point butterfly unit bound to a buffer and a twiddle table.
pub(crate) struct FixedButterfly<'a> {
    pub data: &'a mut [Sc16],
    pub table: &'a [Sc16],
}

impl Butterfly for FixedButterfly<'_> {
    #[inline(always)]
    fn apply(&mut self, step: &Step) {
        let cs = self.table[step.twiddle];
        let a = self.data[step.low];
        let m = self.data[step.high];

        let (low, high) = butterfly(a, m, cs);

        self.data[step.high] = high;
        self.data[step.low] = low;
    }
}

/// In-place radix-2 core over `sc16` samples. Input natural order, output bit-reversed,
/// scaled by `1/N`. The caller has validated the length and the table.
pub(crate) fn radix_2_fft_core(data: &mut [Sc16], table: &[Sc16]) {
    let n = data.len();
    run_stages(n, &mut FixedButterfly { data, table });
}

/// Fills `twiddles[..n/2]` with Q15 coefficients for an `n`-point transform, bit-reversed.
///
/// Each component is `i16::MAX * cos` / `i16::MAX * sin`, truncated toward zero.
pub(crate) fn precompute_twiddles(
    twiddles: &mut [Sc16],
    n: usize,
    direction: Direction,
) -> Result<(), FftError> {
    let half = n / 2;
    let e = 2.0 * PI / n as f32;
    for (i, w) in twiddles[..half].iter_mut().enumerate() {
        let (sin, cos) = sin_cos(i as f32 * e);
        let sin = match direction {
            Direction::Forward => sin,
            Direction::Inverse => -sin,
        };
        *w = Sc16::new(
            (i16::MAX as f32 * cos) as i16,
            (i16::MAX as f32 * sin) as i16,
        );
    }
    if half > 0 {
        bit_reverse(&mut twiddles[..half])?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
