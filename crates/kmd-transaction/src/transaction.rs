//! The transaction type and its wire serialization.

use kmd_primitives::chainhash::Hash;
use kmd_primitives::hash::sha256d;
use kmd_primitives::wire::{VarInt, WireReader, WireWriter};

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::TransactionError;

/// Where a transaction was first seen. Caller annotation only; has no
/// effect on the encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxSource {
    #[default]
    Unknown,
    /// Received from a peer.
    Network,
    /// Created by the local wallet.
    Wallet,
}

/// Why a transaction was created. Caller annotation only; has no effect
/// on the encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxPurpose {
    #[default]
    Unknown,
    /// A payment initiated by the user.
    UserPayment,
}

/// A transaction: versioned lists of inputs and outputs plus a lock time.
///
/// # Wire format
///
/// | Field     | Size          |
/// |-----------|---------------|
/// | version   | 4 bytes (LE)  |
/// | #inputs   | VarInt        |
/// | inputs    | variable      |
/// | #outputs  | VarInt        |
/// | outputs   | variable      |
/// | lock_time | 4 bytes (LE)  |
#[derive(Clone, Debug)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,

    /// Where this transaction came from. Not serialized.
    pub source: TxSource,

    /// Why this transaction exists. Not serialized.
    pub purpose: TxPurpose,
}

impl Transaction {
    /// Create an empty version-1 transaction.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
            source: TxSource::Unknown,
            purpose: TxPurpose::Unknown,
        }
    }

    /// Append an input.
    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    /// Append an output.
    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Number of inputs.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of outputs.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Sum of all output values, saturating on overflow.
    pub fn total_output_value(&self) -> u64 {
        self.outputs
            .iter()
            .fold(0u64, |acc, o| acc.saturating_add(o.value))
    }

    /// Serialize the transaction to its wire-format bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(self.size());

        writer.write_u32_le(self.version);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(&mut writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(&mut writer);
        }

        writer.write_u32_le(self.lock_time);
        writer.into_bytes()
    }

    /// Serialize the transaction to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a transaction from wire-format bytes.
    ///
    /// Rejects truncated input and trailing bytes; the parse must consume
    /// the buffer exactly.
    ///
    /// # Arguments
    /// * `bytes` - The complete serialized transaction.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = WireReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() > 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Parse a transaction from a hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserialize a transaction from a `WireReader`.
    ///
    /// The source and purpose annotations are not on the wire and come
    /// back as `Unknown`.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let version = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading version: {}", e))
        })?;

        let input_count = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading input count: {}", e))
        })?;
        let mut inputs = Vec::with_capacity(input_count.value().min(1024) as usize);
        for _ in 0..input_count.value() {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading output count: {}", e))
        })?;
        let mut outputs = Vec::with_capacity(output_count.value().min(1024) as usize);
        for _ in 0..output_count.value() {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading lock time: {}", e))
        })?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
            source: TxSource::Unknown,
            purpose: TxPurpose::Unknown,
        })
    }

    /// Compute the transaction ID: sha256d over the serialization,
    /// internal byte order.
    pub fn txid(&self) -> Hash {
        Hash::new(sha256d(&self.to_bytes()))
    }

    /// The transaction ID in byte-reversed display hex.
    pub fn txid_hex(&self) -> String {
        self.txid().to_string()
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> usize {
        let mut size = 4 + 4;
        size += VarInt::from(self.inputs.len()).length();
        for input in &self.inputs {
            let script_len = input
                .unlocking_script
                .as_ref()
                .map(|s| s.len())
                .unwrap_or(0);
            size += 32 + 4 + VarInt::from(script_len).length() + script_len + 4;
        }
        size += VarInt::from(self.outputs.len()).length();
        for output in &self.outputs {
            let script_len = output.locking_script.len();
            size += 8 + VarInt::from(script_len).length() + script_len;
        }
        size
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;

    /// One input (outpoint aa..aa:0, unsigned), one 1000-unit P2PKH
    /// output, assembled field by field.
    fn known_tx_hex() -> String {
        [
            "01000000",                                                         // version
            "01",                                                               // 1 input
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", // prev txid
            "00000000",                                                         // prev index
            "00",                                                               // empty script
            "ffffffff",                                                         // sequence
            "01",                                                               // 1 output
            "e803000000000000",                                                 // 1000 units
            "19",                                                               // 25-byte script
            "76a9145f12efe86ded831db26f6a80c4171b92d782cc0888ac",
            "00000000",                                                         // lock time
        ]
        .concat()
    }

    fn known_tx() -> Transaction {
        let mut tx = Transaction::new();
        tx.add_input(TransactionInput::new([0xaa; 32], 0));
        tx.add_output(TransactionOutput::new(
            1000,
            Script::from_hex("76a9145f12efe86ded831db26f6a80c4171b92d782cc0888ac").unwrap(),
        ));
        tx
    }

    #[test]
    fn test_known_layout() {
        let tx = known_tx();
        assert_eq!(tx.to_hex(), known_tx_hex());
        assert_eq!(tx.size(), tx.to_bytes().len());
    }

    #[test]
    fn test_parse_known_layout() {
        let tx = Transaction::from_hex(&known_tx_hex()).unwrap();
        assert_eq!(tx.version, 1);
        assert_eq!(tx.input_count(), 1);
        assert_eq!(tx.output_count(), 1);
        assert_eq!(tx.lock_time, 0);
        assert_eq!(tx.inputs[0].prev_txid, [0xaa; 32]);
        assert!(tx.inputs[0].unlocking_script.is_none());
        assert_eq!(tx.outputs[0].value, 1000);
        assert_eq!(tx.source, TxSource::Unknown);
        assert_eq!(tx.purpose, TxPurpose::Unknown);
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let extended = format!("{}deadbeef", known_tx_hex());
        assert!(matches!(
            Transaction::from_hex(&extended),
            Err(TransactionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_rejects_truncation() {
        let bytes = known_tx().to_bytes();
        for cut in [0, 3, 10, bytes.len() - 1] {
            assert!(Transaction::from_bytes(&bytes[..cut]).is_err());
        }
    }

    #[test]
    fn test_rejects_invalid_hex() {
        assert!(Transaction::from_hex("not hex").is_err());
    }

    #[test]
    fn test_rejects_oversized_input_script_length() {
        // One input whose script-length varint claims u64::MAX with no
        // script bytes behind it. Must come back as an error, not a panic.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes()); // version
        bytes.push(0x01); // 1 input
        bytes.extend_from_slice(&[0xaa; 32]); // prev txid
        bytes.extend_from_slice(&0u32.to_le_bytes()); // prev index
        bytes.extend_from_slice(&[0xff; 9]); // varint: u64::MAX script length

        assert!(matches!(
            Transaction::from_bytes(&bytes),
            Err(TransactionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_output_script_length() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes()); // version
        bytes.push(0x00); // 0 inputs
        bytes.push(0x01); // 1 output
        bytes.extend_from_slice(&1000u64.to_le_bytes()); // value
        bytes.extend_from_slice(&[0xfe, 0xff, 0xff, 0xff, 0xff]); // varint: u32::MAX

        assert!(matches!(
            Transaction::from_bytes(&bytes),
            Err(TransactionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_txid_display_order() {
        let tx = known_tx();
        let txid = tx.txid();
        let txid_hex = tx.txid_hex();
        assert_eq!(txid_hex.len(), 64);

        let mut reversed = *txid.as_bytes();
        reversed.reverse();
        assert_eq!(hex::encode(reversed), txid_hex);
    }

    #[test]
    fn test_total_output_value() {
        let mut tx = known_tx();
        tx.add_output(TransactionOutput::new(500, Script::new()));
        assert_eq!(tx.total_output_value(), 1500);
    }

    #[test]
    fn test_empty_transaction_layout() {
        let tx = Transaction::new();
        let bytes = tx.to_bytes();
        // version(4) + varint(0)(1) + varint(0)(1) + locktime(4)
        assert_eq!(bytes.len(), 10);
        let reparsed = Transaction::from_bytes(&bytes).unwrap();
        assert_eq!(reparsed.input_count(), 0);
        assert_eq!(reparsed.output_count(), 0);
    }
}
