use kmd_primitives::PrimitivesError;

/// Error types for script operations.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Generic invalid script error.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// Attempted to append a push-data opcode through `append_opcode`.
    #[error("use append_push_data for push data opcodes: {0}")]
    InvalidOpcodeType(String),

    /// Not enough data in the script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data exceeds the maximum encodable size.
    #[error("data too big")]
    DataTooBig,

    /// The script is not a standard P2PKH locking script.
    #[error("not a P2PKH script")]
    NotP2pkh,

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Error types for address encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// The string is not valid base58.
    #[error("malformed base58: {0}")]
    MalformedBase58(String),

    /// The decoded payload has the wrong length for a P2PKH address.
    #[error("invalid payload length: {0} bytes")]
    BadLength(usize),

    /// The trailing 4-byte checksum does not match the payload.
    #[error("checksum mismatch")]
    BadChecksum,

    /// The version byte belongs to a different network than the one the
    /// caller is building for.
    #[error("wrong network: expected version 0x{expected:02x}, found 0x{found:02x}")]
    WrongNetwork { expected: u8, found: u8 },

    /// The key material behind the address is invalid.
    #[error("invalid key: {0}")]
    Key(#[from] PrimitivesError),
}

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction structure is invalid (e.g. an out-of-range input index).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// An error occurred during input signing.
    #[error("signing error: {0}")]
    SigningError(String),

    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// An underlying script error.
    #[error("script error: {0}")]
    Script(#[from] ScriptError),

    /// An underlying primitives error.
    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

/// Error types raised by `TxBuilder::build`.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The input or output list is empty.
    #[error("transaction needs at least one input and one output")]
    EmptyTransaction,

    /// An input or output carries a zero value.
    #[error("zero value for {0}")]
    ZeroValue(String),

    /// The same outpoint appears more than once in the input list.
    #[error("duplicate outpoint {txid}:{vout}")]
    DuplicateOutpoint { txid: String, vout: u32 },

    /// Summing the output values overflowed u64.
    #[error("output value overflow")]
    ValueOverflow,

    /// An outpoint txid could not be parsed.
    #[error("invalid outpoint: {0}")]
    InvalidOutpoint(String),

    /// The keystore has no key for the claimed input address.
    #[error("no key for address {0}")]
    UnknownKey(String),

    /// The keystore returned a key that does not hash to the claimed address.
    #[error("key does not match address {0}")]
    KeyMismatch(String),

    /// An address failed to decode or belongs to the wrong network.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// A signing or serialization failure below the builder.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
