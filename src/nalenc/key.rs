//! Defines the [`Key`] struct, which holds a validated 512-byte NALEnc key.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::nalenc::error::{Error, Result};

/// Length in bytes of a NALEnc key, and of every round-key row derived from it.
pub const KEY_LEN: usize = 512;

/// Contains a validated 512-byte NALEnc key. Required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> nalenc::Result<()> {
/// use nalenc::Key;
///
/// let key = Key::random()?;
/// assert_eq!(key.as_bytes().len(), 512);
///
/// let bytes = vec![0u8; 512];
/// let key = Key::try_from_slice(&bytes)?;
/// assert_eq!(key.as_bytes(), &bytes[..]);
///
/// assert!(Key::try_from_slice(&bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Generate a random 512-byte key. Returns `Error::Rng` if the OS RNG fails.
    pub fn random() -> Result<Self> {
        let mut k = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of bytes. Returns `Error::InvalidKeyLength`
    /// unless the slice is exactly 512 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength { len: bytes.len() });
        }
        let mut k = [0u8; KEY_LEN];
        k.copy_from_slice(bytes);
        Ok(Self { bytes: k })
    }

    /// Returns a reference to the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        let short = vec![0u8; 511];
        let long = vec![0u8; 513];
        assert!(matches!(
            Key::try_from_slice(&short),
            Err(Error::InvalidKeyLength { len: 511 })
        ));
        assert!(matches!(
            Key::try_from_slice(&long),
            Err(Error::InvalidKeyLength { len: 513 })
        ));
    }

    #[test]
    fn accepts_exact_length() -> Result<()> {
        let bytes = vec![7u8; KEY_LEN];
        let key = Key::try_from_slice(&bytes)?;
        assert_eq!(key.as_bytes(), &bytes[..]);
        Ok(())
    }

    #[test]
    fn random_keys_are_512_bytes_and_differ() -> Result<()> {
        let a = Key::random()?;
        let b = Key::random()?;
        assert_eq!(a.as_bytes().len(), KEY_LEN);
        assert_ne!(a, b, "two random keys colliding is astronomically unlikely");
        Ok(())
    }
}
