use crate::nalenc::core::{Schedule, decrypt_rounds, encrypt_rounds, pad, quarter};
use crate::nalenc::error::{Error, Result};
use crate::nalenc::key::Key;

/// Holds a prepared round-key schedule and exposes `encrypt`/`decrypt`.
/// Immutable after construction: safe to share and call concurrently from
/// multiple threads on the same instance.
pub struct Cipher {
    key: Key,
    schedule: Schedule,
}

impl Cipher {
    /// Build a cipher from `key`, eagerly deriving the 256-row round-key schedule.
    pub fn new(key: &Key) -> Self {
        Self {
            key: key.clone(),
            schedule: Schedule::build(key),
        }
    }

    /// Frame and encrypt `msg`. Output length is always a positive multiple of 2048.
    pub fn encrypt(&self, msg: &[u8]) -> Vec<u8> {
        let framed = pad::pad(msg, &self.key);
        let quarters = quarter::split(&framed).expect("pad() always yields a 2048-aligned buffer");
        let quarters =
            encrypt_rounds(quarters, &self.schedule).expect("quarters from split() are always 512-aligned");
        quarter::join(quarters)
    }

    /// Decrypt `ciphertext` and strip the framing, recovering the original message.
    ///
    /// Fails with `Error::MalformedCiphertext` if `ciphertext`'s length is not a
    /// positive multiple of 2048, or if the recovered pad-length header does not
    /// fit within the decrypted buffer.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % 2048 != 0 {
            return Err(Error::MalformedCiphertext {
                len: ciphertext.len(),
                context: "ciphertext length must be a positive multiple of 2048",
            });
        }

        let quarters = quarter::split(ciphertext)?;
        let quarters = decrypt_rounds(quarters, &self.schedule)?;
        let framed = quarter::join(quarters);
        pad::unpad(&framed)
    }
}
