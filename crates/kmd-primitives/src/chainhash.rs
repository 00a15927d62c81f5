//! 32-byte chain hash type for transaction ids and block hashes.
//!
//! Bytes are stored in internal (little-endian) order and displayed as
//! byte-reversed hex, following the convention inherited from Bitcoin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Size of a chain hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Maximum hex string length for a hash (64 characters).
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// A 32-byte hash identifying a transaction or block.
///
/// Internally little-endian; `Display` and `FromStr` use the reversed
/// (big-endian) hex form seen in explorers and configuration files.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Wrap a raw 32-byte array (internal byte order).
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a hash from a slice that must be exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Hash(arr))
    }

    /// Parse a byte-reversed hex string.
    ///
    /// Strings shorter than 64 characters are treated as having stripped
    /// leading zeros and are right-aligned; longer strings are rejected.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Ok(Hash::default());
        }
        if hex_str.len() > MAX_HASH_STRING_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "max hash string length is {} characters",
                MAX_HASH_STRING_SIZE
            )));
        }

        let padded = if hex_str.len() % 2 != 0 {
            format!("0{}", hex_str)
        } else {
            hex_str.to_string()
        };

        let decoded = hex::decode(&padded)?;
        let mut display_order = [0u8; HASH_SIZE];
        display_order[HASH_SIZE - decoded.len()..].copy_from_slice(&decoded);

        let mut internal = [0u8; HASH_SIZE];
        for i in 0..HASH_SIZE {
            internal[i] = display_order[HASH_SIZE - 1 - i];
        }
        Ok(Hash(internal))
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Return `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

/// Compute sha256d of the input and wrap it as a `Hash`.
pub fn double_hash(data: &[u8]) -> Hash {
    Hash(sha256d(data))
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
