//! CB58 codec: Base58 (Bitcoin alphabet) over `payload || checksum`, where the
//! checksum is the last 4 bytes of SHA-256(payload).

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the trailing checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

mod checksum;
mod decode;
mod encode;
mod id;

pub use checksum::checksum;
pub use decode::{decode, DecodeError};
pub use encode::encode;
pub use id::{encode_name, Id, IdError, NameError, ID_LEN};
