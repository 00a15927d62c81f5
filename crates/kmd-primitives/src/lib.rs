/// Cryptographic and codec primitives for the KMD UTXO SDK.
///
/// Hash functions, base58/base58check, the 32-byte chain hash type,
/// the wire-format reader/writer, and secp256k1 keys and signatures.

pub mod base58;
pub mod chainhash;
pub mod ec;
pub mod hash;
pub mod wire;

mod error;
pub use error::PrimitivesError;
