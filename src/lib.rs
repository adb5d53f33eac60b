//! NALEnc is a symmetric block-oriented byte scrambler. Given a 512-byte key
//! and an arbitrary-length message, [`Cipher::encrypt`] produces a ciphertext
//! whose length is a multiple of 2048 bytes, from which the original message
//! is recovered exactly by [`Cipher::decrypt`] under the same key.
//!
//! This is not an authenticated encryption scheme: there is no integrity
//! check, no nonce handling, no key exchange, and no cryptographic security
//! claim. Ciphertexts produced by one conforming implementation round-trip
//! bit-for-bit under any other.
//!
//! ## Example
//! ```
//! use nalenc::{Cipher, Key};
//!
//! let key = Key::random().expect("OS RNG failed");
//! let cipher = Cipher::new(&key);
//!
//! let plaintext = b"Hello, World!";
//! let ciphertext = cipher.encrypt(plaintext);
//! assert_eq!(ciphertext.len() % 2048, 0);
//!
//! let decrypted = cipher.decrypt(&ciphertext).expect("malformed ciphertext");
//! assert_eq!(plaintext.as_slice(), decrypted.as_slice());
//! ```

mod nalenc;

pub use nalenc::{Cipher, Error, Key, Result, armor};
