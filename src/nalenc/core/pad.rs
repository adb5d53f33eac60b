//! Padding and framing. Wraps a message in a 2-byte big-endian pad-length
//! header plus key-dependent trailing padding so the total length is a
//! positive multiple of 2048; [`unpad`] is the exact inverse.

use crate::nalenc::error::{Error, Result};
use crate::nalenc::key::Key;

const FRAME_ALIGN: usize = 2048;

/// Frame `msg` into a buffer whose length is a positive multiple of 2048.
///
/// `pad_len` is however many bytes are needed to round `len(msg) + 2` (the
/// header plus the message) up to the next multiple of 2048, using a full
/// extra block when the message plus header already lands exactly on one.
pub(crate) fn pad(msg: &[u8], key: &Key) -> Vec<u8> {
    let len = msg.len();
    let header_and_msg = len + 2;
    let pad_len = (FRAME_ALIGN - header_and_msg % FRAME_ALIGN) % FRAME_ALIGN;

    let mut buf = vec![0u8; len + pad_len + 2];
    buf[0] = (pad_len >> 8) as u8;
    buf[1] = (pad_len & 0xFF) as u8;
    buf[2..len + 2].copy_from_slice(msg);

    // synthesize trailing padding one byte at a time, tapping the buffer
    // written so far (including bytes this same loop just produced). The
    // very first byte of an empty message has nothing to tap yet, so it is
    // drawn straight from the key instead of the self-referential formula.
    let key_bytes = key.as_bytes();
    let mut current_len = len;
    for t in 0..pad_len {
        let k = key_bytes[t % key_bytes.len()] as usize;
        buf[len + 2 + t] = if current_len == 0 {
            key_bytes[(k + 1) % key_bytes.len()]
        } else {
            let a = buf[(k % current_len) + 2];
            let b = buf[((k + 1) % current_len) + 2];
            a ^ b
        };
        current_len += 1;
    }

    buf
}

/// Strip the framing added by [`pad`], discarding the trailing padding bytes
/// without validating their contents.
pub(crate) fn unpad(buf: &[u8]) -> Result<Vec<u8>> {
    if buf.len() < 2 {
        return Err(Error::MalformedCiphertext {
            len: buf.len(),
            context: "buffer shorter than the 2-byte pad-length header",
        });
    }

    let pad_len = ((buf[0] as usize) << 8) | buf[1] as usize;
    if buf.len() < pad_len + 2 {
        return Err(Error::MalformedCiphertext {
            len: buf.len(),
            context: "buffer shorter than header-declared pad length",
        });
    }

    Ok(buf[2..buf.len() - pad_len].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Key {
        Key::try_from_slice(&vec![0x5A; 512]).unwrap()
    }

    #[test]
    fn length_is_positive_multiple_of_2048() {
        for len in [0usize, 1, 2, 2045, 2046, 2047, 2048, 2049, 4095, 4096, 20000] {
            let msg = vec![0xABu8; len];
            let framed = pad(&msg, &key());
            assert!(framed.len() % 2048 == 0 && framed.len() > 0, "len={len}");
            assert!(framed.len() >= std::cmp::max(2048, len + 2), "len={len}");
        }
    }

    #[test]
    fn header_round_trips_with_unpad() {
        for len in [0usize, 1, 2, 2045, 2046, 2047, 2048, 2049, 4095, 4096, 20000] {
            let msg: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let framed = pad(&msg, &key());
            let recovered = unpad(&framed).unwrap();
            assert_eq!(recovered, msg, "len={len}");
        }
    }

    #[test]
    fn message_that_exactly_fills_a_block_with_its_header_gets_zero_pad() {
        // 2046 message bytes + the 2-byte header land exactly on 2048.
        let msg = vec![0x11u8; 2046];
        let framed = pad(&msg, &key());
        assert_eq!(framed.len(), 2048);
        assert_eq!(&framed[..2], &[0, 0]);
    }

    #[test]
    fn message_of_exactly_one_frame_needs_a_second_frame_for_its_header() {
        let msg = vec![0x11u8; 2048];
        let framed = pad(&msg, &key());
        assert_eq!(framed.len(), 4096);
    }

    #[test]
    fn empty_message_frames_to_one_block() {
        let framed = pad(&[], &key());
        assert_eq!(framed.len(), 2048);
        assert_eq!(unpad(&framed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn length_2047_pads_to_two_blocks() {
        let msg = vec![0x22u8; 2047];
        let framed = pad(&msg, &key());
        assert_eq!(framed.len(), 4096);
    }

    #[test]
    fn unpad_rejects_short_buffers() {
        assert!(matches!(
            unpad(&[0u8]),
            Err(Error::MalformedCiphertext { .. })
        ));
        assert!(matches!(
            unpad(&[0u8, 5, 1, 2]),
            Err(Error::MalformedCiphertext { .. })
        ));
    }
}
