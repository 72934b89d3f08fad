//! CB58 checksum: trailing bytes of a single SHA-256 (not Base58Check's double hash).
use crate::CHECKSUM_LEN;
use sha2::{Digest, Sha256};

/// Returns the last [`CHECKSUM_LEN`] bytes of `SHA-256(data)`.
#[must_use]
#[inline]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}
