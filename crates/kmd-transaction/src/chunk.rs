//! Script chunk decoding.
//!
//! A chunk is one opcode together with the data it pushes, if any.
//! Decoding a script into chunks is how tests and callers pull the
//! signature and public key back out of an unlocking script.

use crate::opcodes::*;
use crate::ScriptError;

/// One decoded script element: an opcode and its pushed data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte.
    pub op: u8,
    /// The bytes pushed by this opcode, or `None` for non-push opcodes.
    pub data: Option<Vec<u8>>,
}

/// Decode raw script bytes into a sequence of chunks.
///
/// # Arguments
/// * `bytes` - The raw script bytes.
///
/// # Returns
/// `Ok(Vec<ScriptChunk>)`, or `ScriptError::DataTooSmall` when a push
/// runs past the end of the script.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0usize;

    while pos < bytes.len() {
        let op = bytes[pos];
        pos += 1;

        let push_len = match op {
            len @ OP_DATA_1..=OP_DATA_75 => Some(len as usize),
            OP_PUSHDATA1 => {
                if pos + 1 > bytes.len() {
                    return Err(ScriptError::DataTooSmall);
                }
                let len = bytes[pos] as usize;
                pos += 1;
                Some(len)
            }
            OP_PUSHDATA2 => {
                if pos + 2 > bytes.len() {
                    return Err(ScriptError::DataTooSmall);
                }
                let len = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize;
                pos += 2;
                Some(len)
            }
            OP_PUSHDATA4 => {
                if pos + 4 > bytes.len() {
                    return Err(ScriptError::DataTooSmall);
                }
                let len = u32::from_le_bytes([
                    bytes[pos],
                    bytes[pos + 1],
                    bytes[pos + 2],
                    bytes[pos + 3],
                ]) as usize;
                pos += 4;
                Some(len)
            }
            _ => None,
        };

        match push_len {
            Some(len) => {
                if pos + len > bytes.len() {
                    return Err(ScriptError::DataTooSmall);
                }
                chunks.push(ScriptChunk {
                    op,
                    data: Some(bytes[pos..pos + len].to_vec()),
                });
                pos += len;
            }
            None => chunks.push(ScriptChunk { op, data: None }),
        }
    }

    Ok(chunks)
}

/// Build the minimal push prefix for `len` bytes of data.
///
/// Lengths up to 75 use a direct-push opcode; larger pushes use
/// `OP_PUSHDATA1/2/4` as needed.
///
/// # Arguments
/// * `len` - The number of bytes about to be pushed.
///
/// # Returns
/// `Ok(Vec<u8>)` holding the prefix bytes, or `ScriptError::DataTooBig`
/// when `len` does not fit a 4-byte length.
pub fn push_data_prefix(len: usize) -> Result<Vec<u8>, ScriptError> {
    if len <= OP_DATA_75 as usize {
        Ok(vec![len as u8])
    } else if len <= 0xFF {
        Ok(vec![OP_PUSHDATA1, len as u8])
    } else if len <= 0xFFFF {
        let mut prefix = vec![OP_PUSHDATA2];
        prefix.extend_from_slice(&(len as u16).to_le_bytes());
        Ok(prefix)
    } else if len <= 0xFFFF_FFFF {
        let mut prefix = vec![OP_PUSHDATA4];
        prefix.extend_from_slice(&(len as u32).to_le_bytes());
        Ok(prefix)
    } else {
        Err(ScriptError::DataTooBig)
    }
}
