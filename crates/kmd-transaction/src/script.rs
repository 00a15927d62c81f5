//! The Script byte-vector newtype.
//!
//! Scripts are opaque byte strings on the wire; this type layers push
//! construction, P2PKH recognition, and chunk decoding over them.

use crate::chunk::{decode_script, push_data_prefix, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// Length of a standard P2PKH locking script.
const P2PKH_SCRIPT_LEN: usize = 25;

/// A transaction script: locking (scriptPubKey) or unlocking (scriptSig).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Create a script from a hex string.
    ///
    /// # Arguments
    /// * `hex_str` - Lowercase or uppercase hex, no prefix.
    ///
    /// # Returns
    /// `Ok(Script)` or a hex decoding error.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    /// Borrow the raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Copy out the raw script bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Return the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Script length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the script is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append `data` as a minimal push: prefix then bytes.
    ///
    /// # Arguments
    /// * `data` - The bytes to push.
    ///
    /// # Returns
    /// `Ok(())`, or `ScriptError::DataTooBig` when the data cannot be
    /// encoded in a single push.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append a single non-push opcode.
    ///
    /// # Arguments
    /// * `op` - The opcode byte. Push-data opcodes are rejected; use
    ///   `append_push_data` for those.
    pub fn append_opcode(&mut self, op: u8) -> Result<(), ScriptError> {
        if (OP_DATA_1..=OP_PUSHDATA4).contains(&op) {
            return Err(ScriptError::InvalidOpcodeType(format!("0x{:02x}", op)));
        }
        self.0.push(op);
        Ok(())
    }

    /// Return `true` if this is a standard 25-byte P2PKH locking script.
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == P2PKH_SCRIPT_LEN
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Extract the 20-byte public key hash from a P2PKH locking script.
    ///
    /// # Returns
    /// `Ok([u8; 20])`, or `ScriptError::NotP2pkh` when the script does
    /// not match the standard pattern.
    pub fn public_key_hash(&self) -> Result<[u8; 20], ScriptError> {
        if !self.is_p2pkh() {
            return Err(ScriptError::NotP2pkh);
        }
        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&self.0[3..23]);
        Ok(pkh)
    }

    /// Decode the script into opcode/data chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PKH_HEX: &str = "5f12efe86ded831db26f6a80c4171b92d782cc08";

    fn sample_p2pkh() -> Script {
        Script::from_hex(&format!("76a914{}88ac", SAMPLE_PKH_HEX)).unwrap()
    }

    #[test]
    fn test_hex_roundtrip() {
        let script = sample_p2pkh();
        assert_eq!(
            script.to_hex(),
            format!("76a914{}88ac", SAMPLE_PKH_HEX)
        );
        assert_eq!(Script::from_hex(&script.to_hex()).unwrap(), script);
    }

    #[test]
    fn test_is_p2pkh() {
        assert!(sample_p2pkh().is_p2pkh());
        assert!(!Script::new().is_p2pkh());
        // Right length, wrong leading opcode.
        let mut bytes = sample_p2pkh().to_bytes();
        bytes[0] = OP_HASH160;
        assert!(!Script::from_bytes(&bytes).is_p2pkh());
    }

    #[test]
    fn test_public_key_hash_extraction() {
        let pkh = sample_p2pkh().public_key_hash().unwrap();
        assert_eq!(hex::encode(pkh), SAMPLE_PKH_HEX);
        assert!(matches!(
            Script::new().public_key_hash(),
            Err(ScriptError::NotP2pkh)
        ));
    }

    #[test]
    fn test_append_push_data() {
        let mut script = Script::new();
        script.append_push_data(&[0xaa; 3]).unwrap();
        assert_eq!(script.as_bytes(), &[0x03, 0xaa, 0xaa, 0xaa]);

        let mut large = Script::new();
        large.append_push_data(&[0x00; 80]).unwrap();
        assert_eq!(large.as_bytes()[0], OP_PUSHDATA1);
        assert_eq!(large.as_bytes()[1], 80);
        assert_eq!(large.len(), 82);
    }

    #[test]
    fn test_append_opcode_rejects_pushes() {
        let mut script = Script::new();
        script.append_opcode(OP_DUP).unwrap();
        script.append_opcode(OP_CHECKSIG).unwrap();
        assert_eq!(script.as_bytes(), &[OP_DUP, OP_CHECKSIG]);
        assert!(script.append_opcode(OP_DATA_20).is_err());
        assert!(script.append_opcode(OP_PUSHDATA1).is_err());
    }

    #[test]
    fn test_chunks_of_unlocking_script() {
        let mut script = Script::new();
        script.append_push_data(&[0x30; 71]).unwrap();
        script.append_push_data(&[0x02; 33]).unwrap();
        let chunks = script.chunks().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].data.as_ref().unwrap().len(), 71);
        assert_eq!(chunks[1].data.as_ref().unwrap().len(), 33);
    }
}
