//! ASCII/Base64 armoring with `BEGIN`/`END` banners, reproduced for
//! compatibility with hosts that want a text-safe wire format. The core
//! cipher never depends on this module; it exists purely for callers that
//! choose to expose an ASCII form.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::nalenc::error::{Error, Result};
use crate::nalenc::key::Key;

const KEY_HEADER: &str = "----BEGIN NAL KEY----";
const KEY_FOOTER: &str = "----END NAL KEY----";
const MESSAGE_HEADER: &str = "----BEGIN NAL MESSAGE----";
const MESSAGE_FOOTER: &str = "----END NAL MESSAGE----";
const WRAP_COLUMN: usize = 64;

/// Armor arbitrary `bytes` between `header`/`footer` banners, Base64-encoded
/// and wrapped at 64 columns, with a trailing newline.
fn encode(bytes: &[u8], header: &str, footer: &str) -> String {
    let encoded = STANDARD.encode(bytes);
    let mut out = String::with_capacity(header.len() + footer.len() + encoded.len() + encoded.len() / WRAP_COLUMN + 8);
    out.push_str(header);
    out.push('\n');
    for line in encoded.as_bytes().chunks(WRAP_COLUMN) {
        out.push_str(std::str::from_utf8(line).expect("base64 output is ASCII"));
        out.push('\n');
    }
    out.push_str(footer);
    out.push('\n');
    out
}

/// Strip and validate banners, decoding the Base64 body between them.
fn decode(text: &str, header: &str, footer: &str) -> Result<Vec<u8>> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.first() != Some(&header) || lines.last() != Some(&footer) {
        return Err(Error::Armor(format!("missing or mismatched {header}/{footer} banners")));
    }

    let body: String = lines[1..lines.len() - 1].concat();
    STANDARD
        .decode(body)
        .map_err(|e| Error::Armor(format!("invalid Base64 body: {e}")))
}

/// Armor a 512-byte key with `----BEGIN NAL KEY----` / `----END NAL KEY----` banners.
pub fn encode_key(key: &Key) -> String {
    encode(key.as_bytes(), KEY_HEADER, KEY_FOOTER)
}

/// Decode an ASCII-armored key, rejecting a decoded length other than 512 bytes.
pub fn decode_key(text: &str) -> Result<Key> {
    let bytes = decode(text, KEY_HEADER, KEY_FOOTER)?;
    Key::try_from_slice(&bytes)
}

/// Armor a message with `----BEGIN NAL MESSAGE----` / `----END NAL MESSAGE----` banners.
pub fn encode_message(bytes: &[u8]) -> String {
    encode(bytes, MESSAGE_HEADER, MESSAGE_FOOTER)
}

/// Decode an ASCII-armored message.
pub fn decode_message(text: &str) -> Result<Vec<u8>> {
    decode(text, MESSAGE_HEADER, MESSAGE_FOOTER)
}

/// Accept either raw 512-byte key material or its ASCII-armored form.
pub fn read_key_bytes(raw: &[u8]) -> Result<Key> {
    if let Ok(text) = std::str::from_utf8(raw) {
        if text.trim_start().starts_with(KEY_HEADER) {
            return decode_key(text);
        }
    }
    Key::try_from_slice(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_armor() {
        let key = Key::try_from_slice(&vec![0x42u8; 512]).unwrap();
        let armored = encode_key(&key);
        assert!(armored.starts_with(KEY_HEADER));
        assert!(armored.trim_end().ends_with(KEY_FOOTER));

        let decoded = decode_key(&armored).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn message_round_trips_through_armor() {
        let msg = b"NALEnc armors arbitrary byte sequences".to_vec();
        let armored = encode_message(&msg);
        let decoded = decode_message(&armored).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn rejects_mismatched_banners() {
        let msg = encode_message(b"hello");
        assert!(matches!(decode_key(&msg), Err(Error::Armor(_))));
    }

    #[test]
    fn rejects_wrong_decoded_key_length() {
        let short_key_armor = encode(&[0u8; 16], KEY_HEADER, KEY_FOOTER);
        assert!(matches!(decode_key(&short_key_armor), Err(Error::InvalidKeyLength { len: 16 })));
    }

    #[test]
    fn read_key_bytes_accepts_raw_and_armored() {
        let key = Key::try_from_slice(&vec![0x11u8; 512]).unwrap();
        assert_eq!(read_key_bytes(key.as_bytes()).unwrap(), key);
        assert_eq!(read_key_bytes(encode_key(&key).as_bytes()).unwrap(), key);
    }
}
