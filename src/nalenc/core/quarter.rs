//! Splits a framed buffer into four equal contiguous quarters, and rejoins
//! them. Pure view/concatenation operations.

use crate::nalenc::error::{Error, Result};

/// Split `buf` (length `4*q`, `q` a positive multiple of 512) into four
/// equal-length quarters.
pub(crate) fn split(buf: &[u8]) -> Result<[Vec<u8>; 4]> {
    if buf.is_empty() || buf.len() % 4 != 0 {
        return Err(Error::InvalidQuarterLength { len: buf.len() });
    }
    let q = buf.len() / 4;
    if q == 0 || q % 512 != 0 {
        return Err(Error::InvalidQuarterLength { len: q });
    }

    let mut chunks = buf.chunks_exact(q);
    let quarters = [
        chunks.next().unwrap().to_vec(),
        chunks.next().unwrap().to_vec(),
        chunks.next().unwrap().to_vec(),
        chunks.next().unwrap().to_vec(),
    ];
    Ok(quarters)
}

/// Concatenate four equal-length quarters back into a single buffer, in
/// index order.
pub(crate) fn join(quarters: [Vec<u8>; 4]) -> Vec<u8> {
    let mut out = Vec::with_capacity(quarters.iter().map(Vec::len).sum());
    for q in quarters {
        out.extend(q);
    }
    out
}
