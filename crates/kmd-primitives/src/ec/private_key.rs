//! secp256k1 private key with WIF import/export.
//!
//! Wraps a k256 signing key. The WIF version byte is network-specific, so
//! it is taken as a parameter on export and surfaced to the caller on
//! import rather than being hard-coded here.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key for signing.
///
/// Wraps a k256 `SigningKey` and adds WIF serialization with an explicit
/// network version byte.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    ///
    /// # Returns
    /// A new randomly generated `PrivateKey`.
    pub fn new() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_BYTES_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a 64-character hexadecimal string.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex or scalar is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Create a private key from a WIF (Wallet Import Format) string.
    ///
    /// Decodes the base58check string, validates the checksum, and extracts
    /// the 32-byte scalar. The leading version byte is returned alongside
    /// the key so callers can check it against their network parameters.
    ///
    /// # Arguments
    /// * `wif` - A base58check-encoded WIF string (compressed or uncompressed).
    ///
    /// # Returns
    /// `Ok((PrivateKey, version_byte))` on success, or an error if the WIF
    /// is malformed or the checksum fails.
    pub fn from_wif(wif: &str) -> Result<(Self, u8), PrimitivesError> {
        let payload = base58::check_decode(wif)
            .map_err(|e| match e {
                PrimitivesError::ChecksumMismatch => PrimitivesError::ChecksumMismatch,
                other => PrimitivesError::InvalidWif(other.to_string()),
            })?;

        // 1 version byte + 32 key bytes, plus an optional compression flag.
        match payload.len() {
            34 => {
                if payload[33] != COMPRESS_MAGIC {
                    return Err(PrimitivesError::InvalidWif(
                        "invalid compression flag".to_string(),
                    ));
                }
            }
            33 => {}
            n => {
                return Err(PrimitivesError::InvalidWif(format!(
                    "invalid payload length {}",
                    n
                )));
            }
        }

        let key = Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])?;
        Ok((key, payload[0]))
    }

    /// Encode the private key as a WIF string with the given network
    /// version byte.
    ///
    /// Always encodes for compressed public key format.
    ///
    /// # Arguments
    /// * `version` - The network WIF version byte.
    ///
    /// # Returns
    /// A base58check-encoded WIF string.
    pub fn to_wif(&self, version: u8) -> String {
        let mut payload = Vec::with_capacity(1 + PRIVATE_KEY_BYTES_LEN + 1);
        payload.push(version);
        payload.extend_from_slice(&self.to_bytes());
        payload.push(COMPRESS_MAGIC);
        base58::check_encode(&payload)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }

    /// Sign a 32-byte message digest using deterministic RFC6979 nonces.
    ///
    /// Produces a low-S normalized signature.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest to sign.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if signing fails.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature, PrimitivesError> {
        Signature::sign(digest, self)
    }

    /// Access the underlying k256 `SigningKey`.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // Overwrite the scalar bytes on drop.
        let mut bytes = self.inner.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
