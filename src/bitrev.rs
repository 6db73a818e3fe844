// src/bitrev.rs

//! Bit-reversal reordering. The transforms leave their output in bit-reversed
//! order; these turn it back into natural order (and are their own inverse).

use crate::common::{FftError, guard};

/// Walks the bit-reversed counter and calls `swap(i, j)` once for every pair with `i < j`.
fn for_each_swap(n: usize, mut swap: impl FnMut(usize, usize)) {
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        if i < j {
            swap(i, j);
        }
    }
}

/// Reorders a slice of samples (e.g. `Sc16`) into bit-reversed index order, in place.
pub fn bit_reverse<T>(data: &mut [T]) -> Result<(), FftError> {
    let n = guard(data.len(), true, "bit_reverse")?;
    for_each_swap(n, |i, j| data.swap(i, j));
    Ok(())
}

/// Same as [`bit_reverse`] for an interleaved `re, im, re, im, ...` float buffer.
pub fn bit_reverse_interleaved(data: &mut [f32]) -> Result<(), FftError> {
    if data.len() % 2 != 0 {
        return Err(FftError::InvalidLength);
    }
    let n = guard(data.len() / 2, true, "bit_reverse_interleaved")?;
    for_each_swap(n, |i, j| {
        data.swap(2 * i, 2 * j);
        data.swap(2 * i + 1, 2 * j + 1);
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_bit_reverse_8() {
        let mut data: Vec<usize> = (0..8).collect();
        bit_reverse(&mut data).unwrap();

        // 1 (001) <-> 4 (100), 3 (011) <-> 6 (110)
        assert_eq!(data, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn test_bit_reverse_is_involution() {
        let original: Vec<u32> = (0..256).collect();
        let mut data = original.clone();
        bit_reverse(&mut data).unwrap();
        assert_ne!(data, original);
        bit_reverse(&mut data).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn test_bit_reverse_interleaved_moves_pairs() {
        let mut data = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
        bit_reverse_interleaved(&mut data).unwrap();
        assert_eq!(data, [0.0, 0.5, 2.0, 2.5, 1.0, 1.5, 3.0, 3.5]);
    }

    #[test]
    fn test_bit_reverse_rejects_bad_lengths() {
        let mut data = [0u32; 6];
        assert_eq!(bit_reverse(&mut data), Err(FftError::InvalidLength));
        assert_eq!(bit_reverse::<u32>(&mut []), Err(FftError::InvalidLength));

        let mut odd = [0.0f32; 7];
        assert_eq!(bit_reverse_interleaved(&mut odd), Err(FftError::InvalidLength));
        let mut three = [0.0f32; 6];
        assert_eq!(bit_reverse_interleaved(&mut three), Err(FftError::InvalidLength));
    }

    #[test]
    fn test_bit_reverse_trivial_lengths() {
        let mut one = [7u8];
        bit_reverse(&mut one).unwrap();
        assert_eq!(one, [7]);

        let mut two = [1u8, 2];
        bit_reverse(&mut two).unwrap();
        assert_eq!(two, [1, 2]);
    }
}
