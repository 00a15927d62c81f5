//! Checkpoint table: known block hashes pinned at fixed heights.

use std::collections::BTreeMap;

use kmd_primitives::chainhash::Hash;

use crate::ChainError;

/// An ordered map of block height to expected block hash.
///
/// Heights are unique; inserting a height that is already present replaces
/// the previous hash (last write wins) and hands the old value back, so a
/// curated table can restate a height after a notarization update without
/// failing to load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointTable {
    entries: BTreeMap<u32, Hash>,
}

impl CheckpointTable {
    /// Create an empty table.
    pub fn new() -> Self {
        CheckpointTable {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a checkpoint from its display-order hex hash.
    ///
    /// An optional `0x` prefix is stripped; the remainder must be exactly
    /// 64 hex characters. Returns the hash that was replaced, if the
    /// height was already present.
    ///
    /// # Arguments
    /// * `height` - Block height being pinned.
    /// * `hash_hex` - Byte-reversed hex hash, optionally `0x`-prefixed.
    pub fn insert(&mut self, height: u32, hash_hex: &str) -> Result<Option<Hash>, ChainError> {
        let trimmed = hash_hex.strip_prefix("0x").unwrap_or(hash_hex);
        if trimmed.len() != 64 {
            return Err(ChainError::InvalidCheckpointHash(format!(
                "height {}: expected 64 hex chars, got {}",
                height,
                trimmed.len()
            )));
        }
        let hash = Hash::from_hex(trimmed)
            .map_err(|e| ChainError::InvalidCheckpointHash(format!("height {}: {}", height, e)))?;
        Ok(self.entries.insert(height, hash))
    }

    /// Look up the pinned hash at a height.
    pub fn get(&self, height: u32) -> Option<&Hash> {
        self.entries.get(&height)
    }

    /// Number of checkpointed heights.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no checkpoints are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest checkpointed height, if any.
    pub fn last_height(&self) -> Option<u32> {
        self.entries.keys().next_back().copied()
    }

    /// Iterate over `(height, hash)` pairs in ascending height order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash)> {
        self.entries.iter().map(|(h, hash)| (*h, hash))
    }
}
