/// Consensus parameters for the KMD UTXO SDK.
///
/// Block headers and their proof-of-work bits, checkpoint tables, and the
/// self-checking `NetworkParams` bundle that the address and transaction
/// layers take by reference.

pub mod block;
pub mod checkpoints;
pub mod params;

mod error;
pub use error::ChainError;

pub use block::{decode_compact_bits, BlockHeader};
pub use checkpoints::CheckpointTable;
pub use params::NetworkParams;
