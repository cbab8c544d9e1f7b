//! Bit-packed sign storage for in-place magnitude transforms.
//!
//! Equilibration needs to work on a non-negative version of the matrix
//! values (absolute or squared magnitudes), and then return to the signed
//! values afterwards.  Rather than keep a second copy of the values, the
//! sign of every entry is packed into a bit array and the values are
//! transformed in place.
//!
//! Values are processed in chunks of 8 so that chunk `k` maps exactly to
//! byte `k` of the bit array, with bit `i` of that byte holding the sign
//! of value `8k + i`.  The final chunk may be shorter.  Chunks are
//! independent of each other, so the "rayon" feature processes them in
//! parallel.  The chunk width has no effect on results.

use crate::algebra::FloatT;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

const CHUNK: usize = 8;

/// Monotone transform applied to magnitudes around equilibration.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MagnitudeTransform {
    /// `v -> |v|`, undone by the identity
    Abs,
    /// `v -> v^2`, undone by the square root
    Square,
}

impl MagnitudeTransform {
    #[inline]
    pub fn apply<T: FloatT>(&self, v: T) -> T {
        match self {
            MagnitudeTransform::Abs => v.abs(),
            MagnitudeTransform::Square => v * v,
        }
    }

    /// Inverse of [`apply`](Self::apply) on non-negative values
    #[inline]
    pub fn invert<T: FloatT>(&self, v: T) -> T {
        match self {
            MagnitudeTransform::Abs => v,
            MagnitudeTransform::Square => v.sqrt(),
        }
    }
}

/// One sign bit per value, packed 8 to a byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignBits {
    bytes: Vec<u8>,
    len: usize,
}

impl SignBits {
    /// Records the sign of every value and overwrites each
    /// value `v` with `transform(v)`.
    pub fn extract<T: FloatT>(values: &mut [T], transform: MagnitudeTransform) -> Self {
        let len = values.len();
        let mut bytes = vec![0u8; (len + CHUNK - 1) / CHUNK];

        let kernel = |(chunk, byte): (&mut [T], &mut u8)| {
            let mut bits = 0u8;
            for (i, v) in chunk.iter_mut().enumerate() {
                bits |= ((*v < T::zero()) as u8) << i;
                *v = transform.apply(*v);
            }
            *byte = bits;
        };

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                values
                    .par_chunks_mut(CHUNK)
                    .zip(bytes.par_iter_mut())
                    .for_each(kernel);
            } else {
                values
                    .chunks_mut(CHUNK)
                    .zip(bytes.iter_mut())
                    .for_each(kernel);
            }
        }

        Self { bytes, len }
    }

    /// Undoes [`extract`](Self::extract): maps each value through the
    /// inverse transform and re-applies its recorded sign.
    ///
    /// # Panics
    /// Panics if `values` does not have the length that was extracted.
    pub fn restore<T: FloatT>(&self, values: &mut [T], transform: MagnitudeTransform) {
        assert_eq!(values.len(), self.len);

        let kernel = |(chunk, byte): (&mut [T], &u8)| {
            for (i, v) in chunk.iter_mut().enumerate() {
                let mag = transform.invert(*v);
                *v = if (*byte >> i) & 1 == 1 { -mag } else { mag };
            }
        };

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                values
                    .par_chunks_mut(CHUNK)
                    .zip(self.bytes.par_iter())
                    .for_each(kernel);
            } else {
                values
                    .chunks_mut(CHUNK)
                    .zip(self.bytes.iter())
                    .for_each(kernel);
            }
        }
    }

    /// number of recorded signs
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// true if value `i` was negative when extracted
    pub fn is_negative(&self, i: usize) -> bool {
        assert!(i < self.len);
        (self.bytes[i / CHUNK] >> (i % CHUNK)) & 1 == 1
    }

    /// packed storage, `ceil(len / 8)` bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
