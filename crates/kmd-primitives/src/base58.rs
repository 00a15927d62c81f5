//! Base58 and base58check encoding.
//!
//! Base58check appends a 4-byte double-SHA-256 checksum and is used for
//! addresses and exported (WIF) private keys.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Encode bytes to a Base58 string using the Bitcoin alphabet.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode a Base58 string to bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Encode bytes with a trailing 4-byte sha256d checksum (base58check).
///
/// `data` is typically a version byte followed by a payload.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = data.to_vec();
    payload.extend_from_slice(&checksum[..4]);
    encode(&payload)
}

/// Decode a base58check string, verifying and stripping the checksum.
///
/// Returns the payload without the trailing 4 checksum bytes.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < 4 {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = sha256d(payload);
    if checksum != &expected[..4] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_basics() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(encode(&[0x00, 0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd]), "111233QC4");
    }

    #[test]
    fn test_decode_rejects_bad_characters() {
        assert!(decode("0OIl").is_err());
        assert!(decode("1234!@#").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let payload = hex::decode("3c5f12efe86ded831db26f6a80c4171b92d782cc08").unwrap();
        let decoded = decode(&encode(&payload)).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_check_encode_known_address() {
        // Version byte 0x3c + pkh produces the sample "R" address.
        let payload = hex::decode("3c5f12efe86ded831db26f6a80c4171b92d782cc08").unwrap();
        assert_eq!(check_encode(&payload), "RHwtxWrVn15pyQQnznEAgGEdZ6Qn8HssHN");
        assert_eq!(check_decode("RHwtxWrVn15pyQQnznEAgGEdZ6Qn8HssHN").unwrap(), payload);
    }

    #[test]
    fn test_check_decode_detects_tampering() {
        let payload = vec![0xbc, 0x01, 0x02, 0x03];
        let mut encoded = check_encode(&payload);
        let last = encoded.pop().unwrap();
        encoded.push(if last == '1' { '2' } else { '1' });
        assert!(matches!(
            check_decode(&encoded),
            Err(PrimitivesError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_check_decode_too_short() {
        assert!(check_decode("1").is_err());
    }
}
