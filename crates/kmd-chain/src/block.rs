//! Block headers and compact difficulty bits.

use num_bigint::BigUint;
use num_traits::Zero;

use kmd_primitives::chainhash::Hash;
use kmd_primitives::hash::sha256d;
use kmd_primitives::wire::{WireReader, WireWriter};
use kmd_primitives::PrimitivesError;

/// Serialized size of a block header in bytes.
pub const HEADER_SIZE: usize = 80;

/// An 80-byte block header.
///
/// Only the fields that contribute to the header hash are modeled; the
/// transaction list lives elsewhere. A header's identity is
/// `sha256d(to_bytes())`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: u32,
    pub prev_block: Hash,
    pub merkle_root: Hash,
    /// Block timestamp as seconds since the Unix epoch.
    pub time: u32,
    /// Difficulty target in compact form.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialize the header into its fixed 80-byte wire layout.
    ///
    /// All integers little-endian, hashes in internal byte order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(HEADER_SIZE);
        writer.write_u32_le(self.version);
        writer.write_hash(&self.prev_block);
        writer.write_hash(&self.merkle_root);
        writer.write_u32_le(self.time);
        writer.write_u32_le(self.bits);
        writer.write_u32_le(self.nonce);
        writer.into_bytes()
    }

    /// Parse a header from its 80-byte wire layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let mut reader = WireReader::new(bytes);
        let header = BlockHeader {
            version: reader.read_u32_le()?,
            prev_block: reader.read_hash()?,
            merkle_root: reader.read_hash()?,
            time: reader.read_u32_le()?,
            bits: reader.read_u32_le()?,
            nonce: reader.read_u32_le()?,
        };
        Ok(header)
    }

    /// Compute the block hash: sha256d over the 80-byte serialization.
    pub fn hash(&self) -> Hash {
        Hash::new(sha256d(&self.to_bytes()))
    }
}

/// Decode a compact-form difficulty target into a big integer.
///
/// The compact form packs a target as `mantissa * 256^(exponent - 3)`,
/// with the exponent in the top byte and a 23-bit mantissa below it.
pub fn decode_compact_bits(bits: u32) -> BigUint {
    let exponent = (bits >> 24) as usize;
    let mantissa = BigUint::from(bits & 0x007f_ffff);
    if exponent <= 3 {
        mantissa >> (8 * (3 - exponent))
    } else {
        mantissa << (8 * (exponent - 3))
    }
}

/// Return `true` if the compact form encodes a negative target.
///
/// Negative targets never occur in valid headers but the sign bit exists
/// in the encoding.
pub fn compact_bits_negative(bits: u32) -> bool {
    bits & 0x0080_0000 != 0 && !BigUint::from(bits & 0x007f_ffff).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Num;

    fn genesis_header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block: Hash::default(),
            merkle_root: Hash::from_hex(
                "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
            )
            .unwrap(),
            time: 1231006505,
            bits: 0x1d00ffff,
            nonce: 2083236893,
        }
    }

    #[test]
    fn test_genesis_header_hash() {
        assert_eq!(
            genesis_header().hash().to_string(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
    }

    #[test]
    fn test_header_serialization_roundtrip() {
        let header = genesis_header();
        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(BlockHeader::from_bytes(&bytes).unwrap(), header);
    }

    #[test]
    fn test_header_from_truncated_bytes() {
        let bytes = genesis_header().to_bytes();
        assert!(BlockHeader::from_bytes(&bytes[..79]).is_err());
    }

    #[test]
    fn test_every_field_contributes_to_hash() {
        let base = genesis_header();
        let base_hash = base.hash();

        let mut h = base.clone();
        h.version = 2;
        assert_ne!(h.hash(), base_hash);

        let mut h = base.clone();
        h.prev_block = Hash::from_hex("1").unwrap();
        assert_ne!(h.hash(), base_hash);

        let mut h = base.clone();
        h.merkle_root = Hash::default();
        assert_ne!(h.hash(), base_hash);

        let mut h = base.clone();
        h.time += 1;
        assert_ne!(h.hash(), base_hash);

        let mut h = base.clone();
        h.bits = 0x1d00fffe;
        assert_ne!(h.hash(), base_hash);

        let mut h = base;
        h.nonce += 1;
        assert_ne!(h.hash(), base_hash);
    }

    #[test]
    fn test_decode_compact_bits_max_target() {
        let target = decode_compact_bits(0x1d00ffff);
        let expected = BigUint::from_str_radix(
            "ffff0000000000000000000000000000000000000000000000000000",
            16,
        )
        .unwrap();
        assert_eq!(target, expected);
    }

    #[test]
    fn test_decode_compact_bits_small_exponent() {
        // Exponent 1 shifts the mantissa down by two bytes.
        assert_eq!(decode_compact_bits(0x01120000), BigUint::from(0x12u32));
        assert_eq!(decode_compact_bits(0x01003456), BigUint::zero());
        assert_eq!(decode_compact_bits(0x02008000), BigUint::from(0x80u32));
    }

    #[test]
    fn test_compact_bits_sign_flag() {
        assert!(!compact_bits_negative(0x1d00ffff));
        assert!(compact_bits_negative(0x04923456));
        // Sign bit with zero mantissa is not negative.
        assert!(!compact_bits_negative(0x00800000));
    }
}
