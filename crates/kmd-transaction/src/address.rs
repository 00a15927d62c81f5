//! P2PKH address encoding and validation.
//!
//! An address is base58check over `version_byte || hash160(pubkey)`.
//! The version byte is network-specific, so every conversion takes the
//! `NetworkParams` it is encoding for or validating against.

use kmd_chain::NetworkParams;
use kmd_primitives::base58;
use kmd_primitives::ec::PublicKey;
use kmd_primitives::hash::sha256d;

use crate::AddressError;

/// Decoded payload length: version byte + 20-byte hash + 4-byte checksum.
const ADDRESS_DECODED_LEN: usize = 25;

/// A validated P2PKH address.
///
/// Holds both the base58check text and the public key hash it encodes.
/// Constructing one always goes through network validation, so a value
/// of this type is known to belong to the network it was decoded for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The base58check address string.
    pub text: String,

    /// The 20-byte hash160 of the compressed public key.
    pub public_key_hash: [u8; 20],
}

impl Address {
    /// Decode and validate an address string against a network.
    ///
    /// # Arguments
    /// * `s` - The base58check address text.
    /// * `params` - The network the address must belong to.
    ///
    /// # Returns
    /// `Ok(Address)`, or a distinct `AddressError` for malformed base58,
    /// wrong payload length, checksum failure, or a version byte from
    /// another network.
    pub fn from_string(s: &str, params: &NetworkParams) -> Result<Self, AddressError> {
        let decoded =
            base58::decode(s).map_err(|e| AddressError::MalformedBase58(e.to_string()))?;

        if decoded.len() != ADDRESS_DECODED_LEN {
            return Err(AddressError::BadLength(decoded.len()));
        }

        let (payload, checksum) = decoded.split_at(ADDRESS_DECODED_LEN - 4);
        let expected = sha256d(payload);
        if checksum != &expected[..4] {
            return Err(AddressError::BadChecksum);
        }

        if payload[0] != params.address_version() {
            return Err(AddressError::WrongNetwork {
                expected: params.address_version(),
                found: payload[0],
            });
        }

        let mut public_key_hash = [0u8; 20];
        public_key_hash.copy_from_slice(&payload[1..]);

        Ok(Address {
            text: s.to_string(),
            public_key_hash,
        })
    }

    /// Encode a 20-byte public key hash as an address for a network.
    ///
    /// # Arguments
    /// * `pkh` - The hash160 of the compressed public key.
    /// * `params` - The network whose version byte to use.
    pub fn from_public_key_hash(pkh: &[u8; 20], params: &NetworkParams) -> Self {
        let mut payload = Vec::with_capacity(21);
        payload.push(params.address_version());
        payload.extend_from_slice(pkh);

        Address {
            text: base58::check_encode(&payload),
            public_key_hash: *pkh,
        }
    }

    /// Derive the address of a public key for a network.
    ///
    /// Uses the hash160 of the compressed (33-byte) encoding.
    pub fn from_public_key(public_key: &PublicKey, params: &NetworkParams) -> Self {
        Self::from_public_key_hash(&public_key.hash160(), params)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ADDRESS: &str = "RHwtxWrVn15pyQQnznEAgGEdZ6Qn8HssHN";
    const SAMPLE_PKH_HEX: &str = "5f12efe86ded831db26f6a80c4171b92d782cc08";
    const SAMPLE_PUB_HEX: &str =
        "03f29c0a6336ba2da1c9ee487da557221b42c16ccfec103f4acc2b5f75140d16a1";

    fn sample_pkh() -> [u8; 20] {
        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&hex::decode(SAMPLE_PKH_HEX).unwrap());
        pkh
    }

    #[test]
    fn test_decode_known_address() {
        let params = NetworkParams::mainnet_shared();
        let addr = Address::from_string(SAMPLE_ADDRESS, params).unwrap();
        assert_eq!(addr.text, SAMPLE_ADDRESS);
        assert_eq!(addr.public_key_hash, sample_pkh());
    }

    #[test]
    fn test_encode_public_key_hash() {
        let params = NetworkParams::mainnet_shared();
        let addr = Address::from_public_key_hash(&sample_pkh(), params);
        assert_eq!(addr.text, SAMPLE_ADDRESS);
    }

    #[test]
    fn test_from_public_key() {
        let params = NetworkParams::mainnet_shared();
        let pk = PublicKey::from_hex(SAMPLE_PUB_HEX).unwrap();
        let addr = Address::from_public_key(&pk, params);
        assert_eq!(addr.text, SAMPLE_ADDRESS);
        assert_eq!(addr.public_key_hash, sample_pkh());
    }

    #[test]
    fn test_rejects_malformed_base58() {
        let params = NetworkParams::mainnet_shared();
        assert!(matches!(
            Address::from_string("R0OIl", params),
            Err(AddressError::MalformedBase58(_))
        ));
    }

    #[test]
    fn test_rejects_bad_length() {
        let params = NetworkParams::mainnet_shared();
        let short = base58::encode(&[0x3c, 0x01, 0x02, 0x03, 0x04]);
        assert!(matches!(
            Address::from_string(&short, params),
            Err(AddressError::BadLength(5))
        ));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let params = NetworkParams::mainnet_shared();
        // Re-encode a valid payload with a corrupted checksum.
        let mut decoded = base58::decode(SAMPLE_ADDRESS).unwrap();
        let last = decoded.len() - 1;
        decoded[last] ^= 0x01;
        let tampered = base58::encode(&decoded);
        assert!(matches!(
            Address::from_string(&tampered, params),
            Err(AddressError::BadChecksum)
        ));
    }

    #[test]
    fn test_rejects_wrong_network_version() {
        let params = NetworkParams::mainnet_shared();
        // A Bitcoin-style version-0x00 address over the same hash.
        let mut payload = vec![0x00];
        payload.extend_from_slice(&sample_pkh());
        let foreign = base58::check_encode(&payload);
        match Address::from_string(&foreign, params) {
            Err(AddressError::WrongNetwork { expected, found }) => {
                assert_eq!(expected, 0x3c);
                assert_eq!(found, 0x00);
            }
            other => panic!("expected WrongNetwork, got {:?}", other),
        }
    }
}
