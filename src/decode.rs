//! CB58 decoding module.
//! Validates every char against a precomputed table, Horner-accumulates into u64 limbs
//! (least significant first), then checks the trailing SHA-256 checksum.

use crate::{checksum, ALPHABET, CHECKSUM_LEN};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Char outside the Base58 alphabet, with its byte index.
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
    /// Recomputed checksum differs from the embedded one.
    #[error("checksum mismatch")]
    ChecksumMismatch,
    /// Decoded fewer than 4 bytes, so there is no checksum to check.
    #[error("decoded payload is shorter than the 4-byte checksum")]
    PayloadTooShort,
}

/// Decodes a CB58 string, returning the payload with the checksum stripped.
///
/// # Errors
/// - `InvalidCharacter`: non-alphabet char (including `0`, `O`, `I`, `l`).
/// - `PayloadTooShort`: fewer than 4 decoded bytes.
/// - `ChecksumMismatch`: last 4 bytes of SHA-256(payload) != embedded checksum.
#[inline]
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut output = decode_raw(input)?;
    if output.len() < CHECKSUM_LEN {
        tracing::debug!(len = output.len(), "cb58 payload too short");
        return Err(DecodeError::PayloadTooShort);
    }
    let split = output.len() - CHECKSUM_LEN;
    if checksum(&output[..split])[..] != output[split..] {
        tracing::debug!(len = input.len(), "cb58 checksum mismatch");
        return Err(DecodeError::ChecksumMismatch);
    }
    output.truncate(split);
    Ok(output)
}

/// Plain Base58 to bytes, no checksum.
pub(crate) fn decode_raw(input: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = input.as_bytes();
    // Validate chars upfront; everything before `index` is ASCII, so it is a char boundary.
    let mut vals = Vec::with_capacity(bytes.len());
    for (index, &ch) in bytes.iter().enumerate() {
        let val = DIGIT_TO_VAL.get(ch as usize).copied().unwrap_or(255);
        if val == 255 {
            let character = input[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(DecodeError::InvalidCharacter { character, index });
        }
        vals.push(val);
    }
    let zeros = vals.iter().take_while(|&&v| v == 0).count();
    let digits = &vals[zeros..];

    // Horner: num = num * 58 + val, LE limbs
    let mut num: Vec<u64> = Vec::with_capacity(digits.len() / 10 + 1);
    for &val in digits {
        let mut carry = u64::from(val);
        for limb in &mut num {
            let temp = u128::from(*limb) * 58 + u128::from(carry);
            #[allow(clippy::cast_possible_truncation)]
            {
                *limb = temp as u64;
                carry = (temp >> 64) as u64;
            }
        }
        if carry != 0 {
            num.push(carry);
        }
    }

    let mut output = Vec::with_capacity(zeros + num.len() * 8);
    output.extend(std::iter::repeat_n(0u8, zeros));
    let be: Vec<u8> = num.iter().rev().flat_map(|limb| limb.to_be_bytes()).collect();
    let first = be.iter().position(|&b| b != 0).unwrap_or(be.len());
    output.extend_from_slice(&be[first..]);
    Ok(output)
}

const DIGIT_TO_VAL: [u8; 128] = {
    let mut table = [255u8; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    #[test]
    fn decode_raw_known() {
        assert_eq!(decode_raw(""), Ok(vec![]));
        assert_eq!(decode_raw("1"), Ok(vec![0u8]));
        assert_eq!(decode_raw("45PJLL"), Ok(hex!("7852b855").to_vec()));
        assert_eq!(decode_raw("npGgxY"), Ok(hex!("07005ee879").to_vec()));
    }
    #[test]
    fn decode_known() {
        assert_eq!(decode("45PJLL"), Ok(vec![]));
        assert_eq!(decode("1c7hwa"), Ok(vec![0u8]));
        assert_eq!(decode("119LLELX"), Ok(hex!("000001").to_vec()));
        assert_eq!(decode("4hDZVarA8U"), Ok(b"ava".to_vec()));
    }
    #[test]
    fn decode_invalid_char() {
        assert_eq!(
            decode("0OIl"),
            Err(DecodeError::InvalidCharacter {
                character: '0',
                index: 0
            })
        );
        assert_eq!(
            decode("4hDZ!arA8U"),
            Err(DecodeError::InvalidCharacter {
                character: '!',
                index: 4
            })
        );
        assert_eq!(
            decode("45PJ\u{e9}LL"),
            Err(DecodeError::InvalidCharacter {
                character: '\u{e9}',
                index: 4
            })
        );
    }
    #[test]
    fn decode_too_short() {
        assert_eq!(decode(""), Err(DecodeError::PayloadTooShort));
        assert_eq!(decode("1"), Err(DecodeError::PayloadTooShort));
        assert_eq!(decode("111"), Err(DecodeError::PayloadTooShort));
        // Four zero bytes: long enough, but not the checksum of an empty buffer.
        assert_eq!(decode("1111"), Err(DecodeError::ChecksumMismatch));
    }
    #[test]
    fn decode_checksum_mismatch() {
        assert_eq!(decode("4hDZVarA8V"), Err(DecodeError::ChecksumMismatch));
    }
    #[test]
    fn digit_table() {
        for (i, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(DIGIT_TO_VAL[ch as usize] as usize, i);
        }
        for ch in [b'0', b'O', b'I', b'l', b'+', b'/'] {
            assert_eq!(DIGIT_TO_VAL[ch as usize], 255);
        }
    }
    #[test]
    fn mismatch_log_omits_input() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);
        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let input = "z".repeat(2000);
        let result = tracing::subscriber::with_default(subscriber, || decode(&input));
        assert_eq!(result, Err(DecodeError::ChecksumMismatch));

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("cb58 checksum mismatch"));
        assert!(logged.contains("len=2000"));
        assert!(!logged.contains("zzzz"));
    }
}
