//! Small helpers shared by the round engine: an elementwise XOR that falls
//! back to a parallel implementation for large buffers.

use rayon::prelude::*;

const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// `dst[i] ^= other[i]` for every byte. `dst` and `other` must be the same length.
pub(crate) fn xor_into(dst: &mut [u8], other: &[u8]) {
    debug_assert_eq!(dst.len(), other.len());
    if dst.len() > PARALLEL_THRESHOLD {
        dst.par_iter_mut().zip(other.par_iter()).for_each(|(d, o)| *d ^= o);
    } else {
        for (d, o) in dst.iter_mut().zip(other.iter()) {
            *d ^= o;
        }
    }
}
