//! Transaction input referencing a previous output.

use kmd_primitives::wire::{VarInt, WireReader, WireWriter};

use crate::script::Script;
use crate::TransactionError;

/// Default sequence number indicating a finalized input (no relative lock-time).
pub const DEFAULT_SEQUENCE: u32 = 0xFFFF_FFFF;

/// A single transaction input.
///
/// References an output of a previous transaction by its transaction ID
/// (`prev_txid`, internal byte order) and output index (`prev_index`).
/// The `unlocking_script` (scriptSig) supplies the data that satisfies
/// the referenced output's locking script; `None` means the input has
/// not been signed yet.
///
/// # Wire format
///
/// | Field            | Size          |
/// |------------------|---------------|
/// | prev_txid        | 32 bytes      |
/// | prev_index       | 4 bytes (LE)  |
/// | script length    | VarInt        |
/// | unlocking_script | variable      |
/// | sequence         | 4 bytes (LE)  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// The 32-byte txid of the output being spent, internal byte order.
    pub prev_txid: [u8; 32],

    /// Index of the output within the previous transaction.
    pub prev_index: u32,

    /// The unlocking script, or `None` before signing.
    pub unlocking_script: Option<Script>,

    /// Sequence number. Defaults to `0xFFFFFFFF` (finalized).
    pub sequence: u32,
}

impl TransactionInput {
    /// Create an input spending a given outpoint, unsigned and finalized.
    pub fn new(prev_txid: [u8; 32], prev_index: u32) -> Self {
        TransactionInput {
            prev_txid,
            prev_index,
            unlocking_script: None,
            sequence: DEFAULT_SEQUENCE,
        }
    }

    /// Deserialize an input from a `WireReader`.
    ///
    /// # Arguments
    /// * `reader` - The reader positioned at the start of an encoded input.
    ///
    /// # Returns
    /// `Ok(TransactionInput)`, or a `TransactionError` when the data is
    /// truncated.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let txid_bytes = reader.read_bytes(32).map_err(|e| {
            TransactionError::SerializationError(format!("reading prev txid: {}", e))
        })?;
        let mut prev_txid = [0u8; 32];
        prev_txid.copy_from_slice(txid_bytes);

        let prev_index = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output index: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;
        let script_bytes = reader.read_bytes(script_len.value() as usize).map_err(|e| {
            TransactionError::SerializationError(format!("reading unlocking script: {}", e))
        })?;

        let sequence = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading sequence: {}", e))
        })?;

        let unlocking_script = if script_bytes.is_empty() {
            None
        } else {
            Some(Script::from_bytes(script_bytes))
        };

        Ok(TransactionInput {
            prev_txid,
            prev_index,
            unlocking_script,
            sequence,
        })
    }

    /// Serialize this input into a `WireWriter`.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.prev_txid);
        writer.write_u32_le(self.prev_index);

        match &self.unlocking_script {
            Some(script) => {
                writer.write_varint(VarInt::from(script.len()));
                writer.write_bytes(script.as_bytes());
            }
            None => writer.write_varint(VarInt::from(0u64)),
        }

        writer.write_u32_le(self.sequence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_input_roundtrip() {
        let input = TransactionInput::new([0xab; 32], 3);
        let mut writer = WireWriter::new();
        input.write_to(&mut writer);
        // txid(32) + index(4) + varint(1) + seq(4)
        assert_eq!(writer.len(), 41);

        let mut reader = WireReader::new(writer.as_bytes());
        let parsed = TransactionInput::read_from(&mut reader).unwrap();
        assert_eq!(parsed, input);
        assert_eq!(parsed.sequence, DEFAULT_SEQUENCE);
        assert!(parsed.unlocking_script.is_none());
    }

    #[test]
    fn test_signed_input_roundtrip() {
        let mut input = TransactionInput::new([0x01; 32], 0);
        input.unlocking_script = Some(Script::from_bytes(&[0x51, 0x52]));
        let mut writer = WireWriter::new();
        input.write_to(&mut writer);

        let mut reader = WireReader::new(writer.as_bytes());
        let parsed = TransactionInput::read_from(&mut reader).unwrap();
        assert_eq!(parsed.unlocking_script, input.unlocking_script);
    }

    #[test]
    fn test_truncated_input() {
        let input = TransactionInput::new([0x02; 32], 1);
        let mut writer = WireWriter::new();
        input.write_to(&mut writer);
        let bytes = writer.into_bytes();

        let mut reader = WireReader::new(&bytes[..bytes.len() - 1]);
        assert!(TransactionInput::read_from(&mut reader).is_err());
    }
}
