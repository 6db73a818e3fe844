use num_complex::Complex32;

/// Scale of one unit in Q15.
pub const Q15_ONE: f32 = 32768.0;

/// Complex Q15 sample: 16-bit signed real and imaginary parts, 15 fractional bits.
///
/// `#[repr(C)]` keeps a slice of samples laid out as packed 32-bit words,
/// real part first, matching [`Sc16::to_bits`] on little-endian targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Sc16 {
    pub re: i16,
    pub im: i16,
}

impl Sc16 {
    #[inline]
    pub const fn new(re: i16, im: i16) -> Self {
        Self { re, im }
    }

    /// Unpacks a 32-bit word: real part in the low half-word, imaginary in the high one.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            re: bits as u16 as i16,
            im: (bits >> 16) as u16 as i16,
        }
    }

    /// Packs into a 32-bit word, the inverse of [`Sc16::from_bits`].
    #[inline]
    pub const fn to_bits(self) -> u32 {
        (self.re as u16 as u32) | ((self.im as u16 as u32) << 16)
    }

    /// Quantizes a pair of floats to Q15 with rounding.
    /// Values outside [-1, 1) saturate to the Q15 limits.
    pub fn from_f32(re: f32, im: f32) -> Self {
        Self {
            re: quantize(re),
            im: quantize(im),
        }
    }

    #[inline]
    pub fn from_complex(value: Complex32) -> Self {
        Self::from_f32(value.re, value.im)
    }

    /// Dequantizes to a float complex value.
    #[inline]
    pub fn to_complex(self) -> Complex32 {
        Complex32::new(self.re as f32 / Q15_ONE, self.im as f32 / Q15_ONE)
    }

    /// Returns the complex conjugate (a - bi). Wraps for `i16::MIN`.
    #[inline]
    pub const fn conj(self) -> Self {
        Self {
            re: self.re,
            im: self.im.wrapping_neg(),
        }
    }
}

impl From<u32> for Sc16 {
    #[inline]
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Sc16> for u32 {
    #[inline]
    fn from(sample: Sc16) -> Self {
        sample.to_bits()
    }
}

#[inline]
fn quantize(value: f32) -> i16 {
    // `as` saturates out-of-range floats and maps NaN to 0
    libm::roundf(value * Q15_ONE) as i16
}
