//! Orchestrates the 256-round transformation: an inter-quarter cascade XOR,
//! a keyed per-quarter XOR against the round-key schedule, and a cyclic
//! rotation of the four quarters. Decryption runs the exact inverse.

use rayon::prelude::*;

use crate::nalenc::core::apply::apply;
use crate::nalenc::core::schedule::{ROUNDS, Schedule};
use crate::nalenc::core::util::xor_into;
use crate::nalenc::error::Result;

/// Run the 256 encryption rounds over `quarters`, returning the ciphertext quarters.
pub(crate) fn encrypt_rounds(mut quarters: [Vec<u8>; 4], schedule: &Schedule) -> Result<[Vec<u8>; 4]> {
    for i in 0..ROUNDS {
        cascade_fold(&mut quarters);
        quarters = keyed_xor(quarters, schedule.row(i))?;
        quarters = [
            quarters[3].clone(),
            quarters[0].clone(),
            quarters[1].clone(),
            quarters[2].clone(),
        ];
    }
    Ok(quarters)
}

/// Run the 256 decryption rounds over `quarters`, returning the framed plaintext quarters.
pub(crate) fn decrypt_rounds(mut quarters: [Vec<u8>; 4], schedule: &Schedule) -> Result<[Vec<u8>; 4]> {
    for i in 0..ROUNDS {
        quarters = [
            quarters[1].clone(),
            quarters[2].clone(),
            quarters[3].clone(),
            quarters[0].clone(),
        ];
        quarters = keyed_xor(quarters, schedule.row(ROUNDS - 1 - i))?;
        cascade_unfold(&mut quarters);
    }
    Ok(quarters)
}

/// Left-folding cascade: `Q0 ^= Q1 ^= Q2 ^= Q3` in that order, `Q3` unchanged.
fn cascade_fold(quarters: &mut [Vec<u8>; 4]) {
    for k in 0..3 {
        let (left, right) = quarters.split_at_mut(k + 1);
        xor_into(&mut left[k], &right[0]);
    }
}

/// Right-unfolding cascade: the exact inverse of [`cascade_fold`], updating
/// `Q2`, then `Q1`, then `Q0`.
fn cascade_unfold(quarters: &mut [Vec<u8>; 4]) {
    for k in 0..3 {
        let idx = 2 - k;
        let (left, right) = quarters.split_at_mut(idx + 1);
        xor_into(&mut left[idx], &right[0]);
    }
}

/// Apply the round-key transform to all four quarters independently; they
/// read disjoint slices and a shared schedule row, so this runs in parallel.
fn keyed_xor(quarters: [Vec<u8>; 4], row: &[u8; 512]) -> Result<[Vec<u8>; 4]> {
    let transformed: Vec<Vec<u8>> = quarters
        .into_par_iter()
        .enumerate()
        .map(|(c, q)| apply(&q, row, c))
        .collect::<Result<Vec<_>>>()?;

    Ok(transformed.try_into().expect("exactly four quarters in, four out"))
}
