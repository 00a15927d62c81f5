//! secp256k1 public key.
//!
//! Supports compressed/uncompressed SEC1 serialization, Hash160 digests
//! for address derivation, and ECDSA verification. Address encoding itself
//! lives with the script layer, since the version byte is a network
//! parameter.

use std::fmt;

use k256::ecdsa::VerifyingKey;

use crate::ec::signature::Signature;
use crate::hash::hash160;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key for signature verification.
#[derive(Clone, Debug)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes do not
    /// represent a valid curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey bytes are empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the public key in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even Y) or 0x03 (odd Y), followed by the
    /// 32-byte X coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key in uncompressed SEC1 format (65 bytes).
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hex string (compressed).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Compute the Hash160 of the compressed public key.
    ///
    /// Hash160 = RIPEMD160(SHA256(compressed_pubkey)). This is the 20-byte
    /// digest that P2PKH addresses and locking scripts commit to.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    /// Verify an ECDSA signature against a 32-byte message digest.
    ///
    /// # Arguments
    /// * `digest` - The digest that was signed.
    /// * `sig` - The ECDSA signature to verify.
    ///
    /// # Returns
    /// `true` if the signature is valid for this digest and key.
    pub fn verify(&self, digest: &[u8; 32], sig: &Signature) -> bool {
        sig.verify(digest, self)
    }

    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PUB_HEX: &str =
        "03f29c0a6336ba2da1c9ee487da557221b42c16ccfec103f4acc2b5f75140d16a1";

    #[test]
    fn test_parse_compressed_and_uncompressed() {
        let pk = PublicKey::from_hex(SAMPLE_PUB_HEX).unwrap();
        assert_eq!(pk.to_hex(), SAMPLE_PUB_HEX);

        let uncompressed = pk.to_uncompressed();
        assert_eq!(uncompressed[0], 0x04);
        let reparsed = PublicKey::from_bytes(&uncompressed).unwrap();
        assert_eq!(reparsed, pk);
    }

    #[test]
    fn test_rejects_invalid_points() {
        assert!(PublicKey::from_bytes(&[]).is_err());
        assert!(PublicKey::from_bytes(&[0x05]).is_err());
        // X coordinate not on the curve.
        assert!(PublicKey::from_hex(
            "020000000000000000000000000000000000000000000000000000000000000005"
        )
        .is_err());
    }

    #[test]
    fn test_hash160_sample_key() {
        let pk = PublicKey::from_hex(SAMPLE_PUB_HEX).unwrap();
        assert_eq!(
            hex::encode(pk.hash160()),
            "5f12efe86ded831db26f6a80c4171b92d782cc08"
        );
    }

    #[test]
    fn test_equality() {
        let pk1 = PublicKey::from_hex(SAMPLE_PUB_HEX).unwrap();
        let pk2 = PublicKey::from_hex(
            "02ce0b14fb842b1ba549fdd675c98075f12e9c510f8ef52bd021a9a1f4809d3b4d",
        )
        .unwrap();
        assert_eq!(pk1, pk1);
        assert_ne!(pk1, pk2);
    }

    #[test]
    fn test_display_is_compressed_hex() {
        let pk = PublicKey::from_hex(SAMPLE_PUB_HEX).unwrap();
        assert_eq!(format!("{}", pk), SAMPLE_PUB_HEX);
    }
}
