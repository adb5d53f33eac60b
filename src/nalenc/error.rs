use thiserror::Error;

/// NALEnc Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// NALEnc Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a key with an input size that is not 512 bytes.
    #[error("invalid key length: {len} bytes (expected 512)")]
    InvalidKeyLength { len: usize },

    /// Provided ciphertext that did not match the expected framing format.
    #[error("malformed ciphertext: {len} bytes ({context})")]
    MalformedCiphertext { len: usize, context: &'static str },

    /// Internal guard: a quarter buffer handed to the round-key application was
    /// zero-length or not a multiple of 512 bytes. Unreachable through the public
    /// `Cipher` API; indicates a programming error in the round engine.
    #[error("invalid quarter length: {len} bytes (expected a positive multiple of 512)")]
    InvalidQuarterLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand::rand_core::OsError),

    /// ASCII-armored input did not match the expected banner/Base64 format.
    #[error("malformed ASCII armor: {0}")]
    Armor(String),
}
