//! CB58 encoding module.
//! Payload is `input || checksum`; leading zero bytes map to '1's.
//! Big integer held as u64 limbs (most significant first), divided by 58 with a u128 temp.
use crate::{checksum, ALPHABET, CHECKSUM_LEN};

/// Encodes `input` as CB58. Never fails; an empty input encodes its checksum alone.
#[must_use]
#[inline]
pub fn encode(input: &[u8]) -> String {
    let mut payload = Vec::with_capacity(input.len() + CHECKSUM_LEN);
    payload.extend_from_slice(input);
    payload.extend_from_slice(&checksum(input));
    encode_raw(&payload)
}

/// Plain Base58 of `input`, no checksum.
pub(crate) fn encode_raw(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let non_zero = &input[zeros..];
    if non_zero.is_empty() {
        return "1".repeat(zeros);
    }
    // Pack to u64 BE limbs; the first limb may be short.
    let mut num: Vec<u64> = non_zero
        .rchunks(8)
        .rev()
        .map(|chunk| chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
        .collect();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let mut output = Vec::with_capacity((non_zero.len() as f64 * 1.3658).ceil() as usize);
    while !num.is_empty() {
        let mut remainder = 0u64;
        for limb in &mut num {
            let temp = (u128::from(remainder) << 64) | u128::from(*limb);
            #[allow(clippy::cast_possible_truncation)]
            {
                *limb = (temp / 58) as u64;
                remainder = (temp % 58) as u64;
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        output.push(ALPHABET[remainder as usize]);
        // Trim exhausted high limbs
        let live = num.iter().position(|&limb| limb != 0).unwrap_or(num.len());
        num.drain(..live);
    }
    output.reverse();
    let mut result = String::with_capacity(zeros + output.len());
    result.extend(std::iter::repeat_n('1', zeros));
    result.extend(output.into_iter().map(char::from));
    result
}
