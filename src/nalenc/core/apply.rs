//! Round-key application: XORs each 512-byte sub-block of a quarter against
//! a rotated view of a round-key row.

use rayon::prelude::*;

use crate::nalenc::error::{Error, Result};

const BLOCK: usize = 512;

/// Quarter length above which sub-blocks are processed in parallel.
const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// Apply `row`, rotated right by `(b + quarter_index) mod 512` per sub-block
/// `b`, against every 512-byte sub-block of `q`. Self-inverse for a fixed
/// `(row, quarter_index)`.
pub(crate) fn apply(q: &[u8], row: &[u8; BLOCK], quarter_index: usize) -> Result<Vec<u8>> {
    if q.is_empty() || q.len() % BLOCK != 0 {
        return Err(Error::InvalidQuarterLength { len: q.len() });
    }

    let mut out = vec![0u8; q.len()];

    if q.len() > PARALLEL_THRESHOLD {
        out.par_chunks_mut(BLOCK)
            .zip(q.par_chunks(BLOCK))
            .enumerate()
            .for_each(|(b, (dest, src))| {
                apply_block(dest, src, row, b + quarter_index);
            });
    } else {
        out.chunks_mut(BLOCK)
            .zip(q.chunks(BLOCK))
            .enumerate()
            .for_each(|(b, (dest, src))| {
                apply_block(dest, src, row, b + quarter_index);
            });
    }

    Ok(out)
}

#[inline(always)]
fn apply_block(dest: &mut [u8], src: &[u8], row: &[u8; BLOCK], shift: usize) {
    let shift = (shift % BLOCK) as isize;
    for j in 0..BLOCK {
        let rotated = (j as isize - shift).rem_euclid(BLOCK as isize) as usize;
        dest[j] = src[j] ^ row[rotated];
    }
}
