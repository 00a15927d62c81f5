//! ECDSA signature with DER serialization and RFC6979 deterministic nonces.
//!
//! Signing always produces low-S normalized signatures; DER encoding is
//! strict about integer canonicalization since these bytes end up inside
//! unlocking scripts.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{self};

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// The secp256k1 curve order N.
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// Half of the secp256k1 curve order (N/2), used for low-S normalization.
const HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
    0x20, 0xA0,
];

/// An ECDSA signature with R and S components.
#[derive(Clone, Debug)]
pub struct Signature {
    /// The R component (32 bytes, big-endian).
    r: [u8; 32],
    /// The S component (32 bytes, big-endian).
    s: [u8; 32],
}

impl Signature {
    /// Create a signature from raw R and S 32-byte arrays.
    pub fn new(r: [u8; 32], s: [u8; 32]) -> Self {
        Signature { r, s }
    }

    /// Access the R component.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Access the S component.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Parse a DER-encoded ECDSA signature.
    ///
    /// Expected format: `0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>`.
    /// R and S must be non-zero and below the curve order.
    ///
    /// # Arguments
    /// * `bytes` - DER-encoded signature bytes.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if the encoding is malformed.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() < 8 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: too short".to_string(),
            ));
        }

        if bytes[0] != 0x30 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no header magic".to_string(),
            ));
        }

        let sig_len = bytes[1] as usize;
        if sig_len + 2 > bytes.len() || sig_len + 2 < 8 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: bad length".to_string(),
            ));
        }

        let data = &bytes[..sig_len + 2];
        let mut idx = 2;

        if data[idx] != 0x02 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no 1st int marker".to_string(),
            ));
        }
        idx += 1;
        let r_len = data[idx] as usize;
        idx += 1;
        if r_len == 0 || idx + r_len > data.len() - 3 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: bogus R length".to_string(),
            ));
        }
        let r_bytes = &data[idx..idx + r_len];
        idx += r_len;

        if data[idx] != 0x02 {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: no 2nd int marker".to_string(),
            ));
        }
        idx += 1;
        let s_len = data[idx] as usize;
        idx += 1;
        if s_len == 0 || idx + s_len > data.len() {
            return Err(PrimitivesError::InvalidSignature(
                "malformed signature: bogus S length".to_string(),
            ));
        }
        let s_bytes = &data[idx..idx + s_len];

        let r = to_32_bytes(r_bytes)?;
        let s = to_32_bytes(s_bytes)?;

        if is_zero(&r) {
            return Err(PrimitivesError::InvalidSignature(
                "signature R is zero".to_string(),
            ));
        }
        if is_zero(&s) {
            return Err(PrimitivesError::InvalidSignature(
                "signature S is zero".to_string(),
            ));
        }
        if !is_less_than(&r, &CURVE_ORDER) {
            return Err(PrimitivesError::InvalidSignature(
                "signature R is >= curve.N".to_string(),
            ));
        }
        if !is_less_than(&s, &CURVE_ORDER) {
            return Err(PrimitivesError::InvalidSignature(
                "signature S is >= curve.N".to_string(),
            ));
        }

        Ok(Signature { r, s })
    }

    /// Serialize the signature in DER format with low-S normalization.
    ///
    /// Output format: `0x30 <len> 0x02 <r_len> <r> 0x02 <s_len> <s>`.
    /// If S is above half the curve order it is replaced by N - S.
    ///
    /// # Returns
    /// A byte vector containing the DER-encoded signature.
    pub fn to_der(&self) -> Vec<u8> {
        let s = if is_greater_than(&self.s, &HALF_ORDER) {
            subtract_from_order(&self.s)
        } else {
            self.s
        };

        let rb = canonicalize_int(&self.r);
        let sb = canonicalize_int(&s);

        let total_len = 6 + rb.len() + sb.len();
        let mut out = Vec::with_capacity(total_len);
        out.push(0x30);
        out.push((total_len - 2) as u8);
        out.push(0x02);
        out.push(rb.len() as u8);
        out.extend_from_slice(&rb);
        out.push(0x02);
        out.push(sb.len() as u8);
        out.extend_from_slice(&sb);
        out
    }

    /// Sign a 32-byte digest using RFC6979 deterministic nonces.
    ///
    /// Produces a low-S normalized signature.
    ///
    /// # Arguments
    /// * `digest` - The 32-byte digest to sign.
    /// * `priv_key` - The private key to sign with.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or an error if signing fails.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let (k256_sig, _recovery_id) = priv_key
            .signing_key()
            .sign_prehash_recoverable(digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;

        let (r_bytes, s_bytes) = k256_sig.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);

        if is_greater_than(&s, &HALF_ORDER) {
            s = subtract_from_order(&s);
        }

        Ok(Signature { r, s })
    }

    /// Verify this signature against a 32-byte digest and public key.
    ///
    /// # Returns
    /// `true` if the signature is valid.
    pub fn verify(&self, digest: &[u8; 32], pub_key: &PublicKey) -> bool {
        let k256_sig = match ecdsa::Signature::from_scalars(
            k256::FieldBytes::from(self.r),
            k256::FieldBytes::from(self.s),
        ) {
            Ok(sig) => sig,
            Err(_) => return false,
        };

        pub_key
            .verifying_key()
            .verify_prehash(digest, &k256_sig)
            .is_ok()
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.s == other.s
    }
}

impl Eq for Signature {}

/// Canonicalize an integer for DER encoding.
///
/// Strips leading zeros from the big-endian representation and prepends a
/// 0x00 byte if the high bit is set, so the value is not read as negative.
fn canonicalize_int(val: &[u8; 32]) -> Vec<u8> {
    let mut start = 0;
    while start < 31 && val[start] == 0 {
        start += 1;
    }
    let trimmed = &val[start..];

    if trimmed[0] & 0x80 != 0 {
        let mut out = Vec::with_capacity(trimmed.len() + 1);
        out.push(0x00);
        out.extend_from_slice(trimmed);
        out
    } else {
        trimmed.to_vec()
    }
}

/// Convert a variable-length big-endian byte slice to a fixed 32-byte array.
///
/// Strips any leading zero-padding and left-pads to 32 bytes.
fn to_32_bytes(bytes: &[u8]) -> Result<[u8; 32], PrimitivesError> {
    let mut trimmed = bytes;
    while trimmed.len() > 1 && trimmed[0] == 0 {
        trimmed = &trimmed[1..];
    }
    if trimmed.len() > 32 {
        return Err(PrimitivesError::InvalidSignature(
            "integer value too large for 32 bytes".to_string(),
        ));
    }
    let mut out = [0u8; 32];
    out[32 - trimmed.len()..].copy_from_slice(trimmed);
    Ok(out)
}

/// Check if a 32-byte big-endian integer is zero.
fn is_zero(val: &[u8; 32]) -> bool {
    val.iter().all(|&b| b == 0)
}

/// Compare two 32-byte big-endian integers: a < b.
fn is_less_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    for i in 0..32 {
        if a[i] < b[i] {
            return true;
        }
        if a[i] > b[i] {
            return false;
        }
    }
    false
}

/// Compare two 32-byte big-endian integers: a > b.
fn is_greater_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    for i in 0..32 {
        if a[i] > b[i] {
            return true;
        }
        if a[i] < b[i] {
            return false;
        }
    }
    false
}

/// Compute N - val where N is the secp256k1 curve order.
fn subtract_from_order(val: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;
    for i in (0..32).rev() {
        let diff = CURVE_ORDER[i] as i32 - val[i] as i32 - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    fn hex_to_32(s: &str) -> [u8; 32] {
        let bytes = hex::decode(s).unwrap();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    #[test]
    fn test_der_parsing() {
        let valid_sig = hex::decode(
            "304402204e45e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd41\
             0220181522ec8eca07de4860a4acdd12909d831cc56cbbac4622082221a8768d1d09",
        )
        .unwrap();
        let sig = Signature::from_der(&valid_sig).unwrap();
        assert_eq!(
            hex::encode(sig.r()),
            "4e45e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd41"
        );

        assert!(Signature::from_der(&[]).is_err());

        let mut bad_magic = valid_sig.clone();
        bad_magic[0] = 0x31;
        assert!(Signature::from_der(&bad_magic).is_err());

        let mut bad_marker = valid_sig.clone();
        bad_marker[2] = 0x03;
        assert!(Signature::from_der(&bad_marker).is_err());
    }

    #[test]
    fn test_der_serialize_roundtrip() {
        let sig = Signature::new(
            hex_to_32("4e45e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd41"),
            hex_to_32("181522ec8eca07de4860a4acdd12909d831cc56cbbac4622082221a8768d1d09"),
        );
        let der = sig.to_der();
        assert_eq!(Signature::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn test_der_low_s_normalization() {
        // S above half the order gets replaced by N - S on encode.
        let sig = Signature::new(
            hex_to_32("a196ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404"),
            hex_to_32("971729c7fa944b465b35250c6570a2f31acbb14b13d1565fab7330dcb2b3dfb1"),
        );
        let expected = hex::decode(
            "3045022100a196ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404\
             022068e8d638056bb4b9a4cadaf39a8f5d0b9fe32b9b9b7749dc145f2db01d826190",
        )
        .unwrap();
        assert_eq!(sig.to_der(), expected);
    }

    #[test]
    fn test_rfc6979_known_vectors() {
        // Published deterministic-nonce vectors (Trezor/CoreBitcoin).
        let tests = vec![
            (
                "0000000000000000000000000000000000000000000000000000000000000001",
                "Satoshi Nakamoto",
                "3045022100934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d802202442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5",
            ),
            (
                "f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181",
                "Alan Turing",
                "304402207063ae83e7f62bbb171798131b4a0564b956930092b33b07b395615d9ec7e15c022058dfcc1e00a35e1572f366ffe34ba0fc47db1e7189759b9fb233c5b05ab388ea",
            ),
            (
                "cca9fbcc1b41e5a95d369eaa6ddcff73b61a4efaa279cfc6567e8daa39cbaf50",
                "sample",
                "3045022100af340daf02cc15c8d5d08d7735dfe6b98a474ed373bdb5fbecf7571be52b384202205009fb27f37034a9b24b707b7c6b79ca23ddef9e25f7282e8a797efe53a8f124",
            ),
        ];

        for (key_hex, msg, expected_der) in tests {
            let key = PrivateKey::from_hex(key_hex).unwrap();
            let digest = sha256(msg.as_bytes());
            let sig = key.sign(&digest).unwrap();
            assert_eq!(hex::encode(sig.to_der()), expected_der, "message '{}'", msg);
            assert!(key.pub_key().verify(&digest, &sig));
        }
    }

    #[test]
    fn test_verify_rejects_tampered_digest() {
        let key = PrivateKey::new();
        let digest = sha256(b"original");
        let sig = key.sign(&digest).unwrap();
        assert!(key.pub_key().verify(&digest, &sig));
        assert!(!key.pub_key().verify(&sha256(b"tampered"), &sig));
    }
}
