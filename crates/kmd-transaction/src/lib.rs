/// KMD UTXO SDK - Transaction building, signing, and serialization.
///
/// Provides the Script and Address types, the keystore seam, the
/// Transaction type with binary/hex serialization, the legacy signature
/// hash, the P2PKH unlocking template, and the `TxBuilder` front door
/// that turns spendable inputs plus desired outputs into a fully signed
/// transaction.

pub mod address;
pub mod builder;
pub mod chunk;
pub mod input;
pub mod keystore;
pub mod opcodes;
pub mod output;
pub mod script;
pub mod sighash;
pub mod template;
pub mod transaction;

mod error;
pub use error::{AddressError, BuildError, ScriptError, TransactionError};

pub use address::Address;
pub use builder::{DesiredOutput, SpendableInput, TxBuilder};
pub use chunk::ScriptChunk;
pub use input::TransactionInput;
pub use keystore::{KeyStore, MemoryKeyStore};
pub use output::TransactionOutput;
pub use script::Script;
pub use transaction::{Transaction, TxPurpose, TxSource};
