//! Transaction output with value and locking script.

use kmd_primitives::wire::{VarInt, WireReader, WireWriter};

use crate::script::Script;
use crate::TransactionError;

/// A single transaction output.
///
/// # Wire format
///
/// | Field          | Size          |
/// |----------------|---------------|
/// | value          | 8 bytes (LE)  |
/// | script length  | VarInt        |
/// | locking_script | variable      |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionOutput {
    /// The value locked by this output, in the smallest coin unit.
    pub value: u64,

    /// The locking script (scriptPubKey) defining spending conditions.
    pub locking_script: Script,
}

impl TransactionOutput {
    /// Create an output with a value and locking script.
    pub fn new(value: u64, locking_script: Script) -> Self {
        TransactionOutput {
            value,
            locking_script,
        }
    }

    /// Deserialize an output from a `WireReader`.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let value = reader.read_u64_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output value: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;
        let script_bytes = reader.read_bytes(script_len.value() as usize).map_err(|e| {
            TransactionError::SerializationError(format!("reading locking script: {}", e))
        })?;

        Ok(TransactionOutput {
            value,
            locking_script: Script::from_bytes(script_bytes),
        })
    }

    /// Serialize this output into a `WireWriter`.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_u64_le(self.value);
        writer.write_varint(VarInt::from(self.locking_script.len()));
        writer.write_bytes(self.locking_script.as_bytes());
    }

    /// Serialize this output to a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        self.write_to(&mut writer);
        writer.into_bytes()
    }
}
