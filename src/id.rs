//! 32-byte identifiers rendered as CB58, and the name-to-identifier helper.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{decode, encode, DecodeError};

/// Length of an [`Id`] in bytes.
pub const ID_LEN: usize = 32;

/// A name that does not fit in an [`Id`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name must be 32 bytes or less, got {len}")]
    TooLong { len: usize },
}

/// Failure parsing an [`Id`] from its CB58 form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("expected 32 bytes, decoded {0}")]
    Length(usize),
}

/// A fixed-width identifier, displayed as CB58.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id([u8; ID_LEN]);

impl Id {
    /// The all-zero identifier.
    pub const EMPTY: Self = Self([0u8; ID_LEN]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Builds an identifier from a display name by right-padding it with null bytes.
    ///
    /// The bound is on the UTF-8 byte length, so the padded buffer is always exactly
    /// [`ID_LEN`] bytes.
    ///
    /// # Errors
    /// `NameError::TooLong` if `name` is longer than [`ID_LEN`] bytes.
    pub fn from_name(name: &str) -> Result<Self, NameError> {
        let raw = name.as_bytes();
        if raw.len() > ID_LEN {
            return Err(NameError::TooLong { len: raw.len() });
        }
        let mut bytes = [0u8; ID_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        tracing::trace!(name, "padded name to id");
        Ok(Self(bytes))
    }

    /// The name this identifier was built from: bytes up to the trailing null padding.
    /// `None` when those bytes are not UTF-8.
    pub fn name(&self) -> Option<&str> {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        std::str::from_utf8(&self.0[..end]).ok()
    }
}

/// Encodes a display name (at most [`ID_LEN`] bytes) as a CB58 identifier.
///
/// # Errors
/// `NameError::TooLong` if the name does not fit; nothing is encoded in that case.
pub fn encode_name(name: &str) -> Result<String, NameError> {
    Id::from_name(name).map(|id| id.to_string())
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.0))
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({self})")
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode(s)?;
        let bytes: [u8; ID_LEN] = bytes
            .try_into()
            .map_err(|bytes: Vec<u8>| IdError::Length(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}
