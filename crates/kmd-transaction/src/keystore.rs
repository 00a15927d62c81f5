//! Key lookup seam for transaction signing.
//!
//! The builder never owns keys; it asks a `KeyStore` for the key behind
//! each input address. The in-memory store covers tests and simple
//! wallets, and the trait lets callers plug in hardware or remote
//! signers without touching the builder.

use std::collections::HashMap;

use kmd_chain::NetworkParams;
use kmd_primitives::ec::PrivateKey;

use crate::address::Address;
use crate::AddressError;

/// Resolves an address to the private key that can spend from it.
pub trait KeyStore {
    /// Look up the signing key for an address.
    ///
    /// # Arguments
    /// * `address` - The base58check address text.
    ///
    /// # Returns
    /// `Some(PrivateKey)` when the store holds the key, `None` otherwise.
    fn lookup(&self, address: &str) -> Option<PrivateKey>;
}

/// A `KeyStore` backed by a hash map, populated from WIF strings.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    keys: HashMap<String, PrivateKey>,
}

impl MemoryKeyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryKeyStore {
            keys: HashMap::new(),
        }
    }

    /// Import a WIF-encoded private key.
    ///
    /// The WIF version byte must match `params.wif_version()`; a key
    /// exported for another network is rejected with `WrongNetwork`.
    /// The key is indexed by the address it derives under `params`.
    ///
    /// # Arguments
    /// * `params` - The network the key belongs to.
    /// * `wif` - The WIF string.
    ///
    /// # Returns
    /// `Ok(Address)` of the imported key.
    pub fn insert_wif(
        &mut self,
        params: &NetworkParams,
        wif: &str,
    ) -> Result<Address, AddressError> {
        let (key, version) = PrivateKey::from_wif(wif)?;
        if version != params.wif_version() {
            return Err(AddressError::WrongNetwork {
                expected: params.wif_version(),
                found: version,
            });
        }

        let address = Address::from_public_key(&key.pub_key(), params);
        self.keys.insert(address.text.clone(), key);
        Ok(address)
    }

    /// Number of keys in the store.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeyStore for MemoryKeyStore {
    fn lookup(&self, address: &str) -> Option<PrivateKey> {
        self.keys.get(address).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_WIF: &str = "Uq5C4ufwvDVGbEDr7dw6XmbAku8uujZ4ba58LXe3DfGa8YWKtE4x";
    const SAMPLE_ADDRESS: &str = "RHwtxWrVn15pyQQnznEAgGEdZ6Qn8HssHN";

    #[test]
    fn test_insert_and_lookup() {
        let params = NetworkParams::mainnet_shared();
        let mut store = MemoryKeyStore::new();
        let address = store.insert_wif(params, SAMPLE_WIF).unwrap();
        assert_eq!(address.text, SAMPLE_ADDRESS);
        assert_eq!(store.len(), 1);

        let key = store.lookup(SAMPLE_ADDRESS).unwrap();
        assert_eq!(
            key.to_hex(),
            "1fb6c9fa137958409e39b5170d59c6ed1c512b82d0a031aef71e451b4abdd6ea"
        );
    }

    #[test]
    fn test_lookup_unknown_address() {
        let store = MemoryKeyStore::new();
        assert!(store.lookup(SAMPLE_ADDRESS).is_none());
    }

    #[test]
    fn test_rejects_foreign_wif_version() {
        let params = NetworkParams::mainnet_shared();
        let (key, _) = PrivateKey::from_wif(SAMPLE_WIF).unwrap();
        // Re-export under the Bitcoin version byte.
        let foreign_wif = key.to_wif(0x80);

        let mut store = MemoryKeyStore::new();
        match store.insert_wif(params, &foreign_wif) {
            Err(AddressError::WrongNetwork { expected, found }) => {
                assert_eq!(expected, 0xbc);
                assert_eq!(found, 0x80);
            }
            other => panic!("expected WrongNetwork, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_garbage_wif() {
        let params = NetworkParams::mainnet_shared();
        let mut store = MemoryKeyStore::new();
        assert!(store.insert_wif(params, "not-a-wif").is_err());
    }
}
