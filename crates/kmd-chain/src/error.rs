use kmd_primitives::PrimitivesError;

/// Errors raised while constructing or validating network parameters.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// The genesis block embedded in a network definition does not hash to
    /// the expected value. The definition is unusable.
    #[error("genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch { expected: String, computed: String },

    #[error("invalid checkpoint hash: {0}")]
    InvalidCheckpointHash(String),

    #[error(transparent)]
    Primitives(#[from] PrimitivesError),
}
