//! Key schedule derivation. Expands a 512-byte key into 256 round-key rows of
//! 512 bytes each.

use crate::nalenc::key::{KEY_LEN, Key};

/// Number of round-key rows in a [`Schedule`].
pub const ROUNDS: usize = 256;

/// The `256 x 512`-byte round-key table derived from a [`Key`]. Row 0 is the
/// key itself; every later row is derived deterministically from the row two
/// steps earlier (row 1 is derived from row 0 as a special case). Immutable
/// once built, and safe to share across concurrent encrypt/decrypt calls.
pub(crate) struct Schedule {
    rows: Vec<[u8; KEY_LEN]>,
}

impl Schedule {
    /// Build the round-key table from `key`.
    pub(crate) fn build(key: &Key) -> Self {
        let mut rows = vec![[0u8; KEY_LEN]; ROUNDS];

        rows[0].copy_from_slice(key.as_bytes());

        // row 1: every column XORed with column 0, except column 1 itself.
        let p0_0 = rows[0][0];
        for j in 0..KEY_LEN {
            rows[1][j] = if j != 1 { rows[0][j] ^ p0_0 } else { rows[0][1] };
        }

        // row i+1 derived from row i-1 (two steps back), for i in 1..255.
        for i in 1..ROUNDS - 1 {
            let x = rows[i - 1][i];
            let prev = rows[i - 1];
            for j in 0..KEY_LEN {
                rows[i + 1][j] = if j != i { prev[j] ^ x } else { prev[i] };
            }
        }

        Self { rows }
    }

    /// Row `i` of the schedule (`i` in `0..256`).
    pub(crate) fn row(&self, i: usize) -> &[u8; KEY_LEN] {
        &self.rows[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_key() -> Key {
        let bytes: Vec<u8> = (0..KEY_LEN).map(|i| (i % 256) as u8).collect();
        Key::try_from_slice(&bytes).unwrap()
    }

    #[test]
    fn row_zero_is_the_key() {
        let key = seeded_key();
        let schedule = Schedule::build(&key);
        assert_eq!(schedule.row(0), &key.as_bytes()[..]);
    }

    #[test]
    fn schedule_invariants_hold_for_every_row() {
        let key = seeded_key();
        let schedule = Schedule::build(&key);

        for i in 1..ROUNDS - 1 {
            let x = schedule.row(i - 1)[i];
            let prev = schedule.row(i - 1);
            let next = schedule.row(i + 1);

            assert_eq!(next[i], prev[i], "column i must be left unchanged at row i+1");
            for j in 0..KEY_LEN {
                if j != i {
                    assert_eq!(next[j], prev[j] ^ x, "column {j} at row {}", i + 1);
                }
            }
        }
    }

    #[test]
    fn row_one_special_case() {
        let key = seeded_key();
        let schedule = Schedule::build(&key);
        let p0 = schedule.row(0);
        let p1 = schedule.row(1);
        assert_eq!(p1[1], p0[1]);
        for j in 0..KEY_LEN {
            if j != 1 {
                assert_eq!(p1[j], p0[j] ^ p0[0]);
            }
        }
    }
}
