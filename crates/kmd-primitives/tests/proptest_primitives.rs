use proptest::prelude::*;

use kmd_primitives::base58;
use kmd_primitives::chainhash::Hash;
use kmd_primitives::ec::private_key::PrivateKey;
use kmd_primitives::ec::signature::Signature;
use kmd_primitives::hash::sha256;
use kmd_primitives::wire::{VarInt, WireReader, WireWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn private_key_wif_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        version in any::<u8>()
    ) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let wif = pk.to_wif(version);
            let (pk2, decoded_version) = PrivateKey::from_wif(&wif).unwrap();
            prop_assert_eq!(pk.to_hex(), pk2.to_hex());
            prop_assert_eq!(decoded_version, version);
        }
    }

    #[test]
    fn ecdsa_sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let digest = sha256(&msg);
            let sig = pk.sign(&digest).unwrap();
            prop_assert!(pk.pub_key().verify(&digest, &sig));
            // DER re-parse preserves the signature.
            let reparsed = Signature::from_der(&sig.to_der()).unwrap();
            prop_assert!(pk.pub_key().verify(&digest, &reparsed));
        }
    }

    #[test]
    fn hash_hex_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
        let hash = Hash::new(bytes);
        let hash2 = Hash::from_hex(&hash.to_string()).unwrap();
        prop_assert_eq!(hash.as_bytes(), hash2.as_bytes());
    }

    #[test]
    fn base58check_rejects_truncation(payload in prop::collection::vec(any::<u8>(), 1..64)) {
        let encoded = base58::check_encode(&payload);
        prop_assert_eq!(base58::check_decode(&encoded).unwrap(), payload);
        // Dropping the final character invalidates the checksum.
        let truncated = &encoded[..encoded.len() - 1];
        prop_assert!(base58::check_decode(truncated).is_err());
    }

    #[test]
    fn varint_reader_roundtrip(value in any::<u64>()) {
        let mut writer = WireWriter::new();
        writer.write_varint(VarInt(value));
        let data = writer.into_bytes();
        prop_assert_eq!(data.len(), VarInt(value).length());

        let mut reader = WireReader::new(&data);
        prop_assert_eq!(reader.read_varint().unwrap(), VarInt(value));
        prop_assert_eq!(reader.remaining(), 0);
    }
}
