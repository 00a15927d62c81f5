//! Legacy signature hash computation.
//!
//! The digest signed by ECDSA to authorize spending an input. This is
//! the original two-pass scheme: a modified copy of the transaction is
//! serialized with the sighash type appended, then double-SHA256 hashed.
//! The function is pure; it never mutates the transaction it is given.

use kmd_primitives::hash::sha256d;
use kmd_primitives::wire::{VarInt, WireWriter};

use crate::transaction::Transaction;
use crate::TransactionError;

// ----- Sighash flag constants -----

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u32 = 0x01;

/// Sign all inputs but no outputs, allowing outputs to be modified.
pub const SIGHASH_NONE: u32 = 0x02;

/// Sign all inputs and only the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u32 = 0x03;

/// Combined with a base flag: only sign the current input, allowing other
/// inputs to be added later.
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// Mask applied to extract the base sighash type (ALL, NONE, SINGLE).
pub const SIGHASH_MASK: u32 = 0x1f;

/// Value substituted for blanked outputs under `SIGHASH_SINGLE`.
const BLANKED_OUTPUT_VALUE: u64 = 0xFFFF_FFFF_FFFF_FFFF;

/// Compute the legacy signature hash for one input.
///
/// Serializes a modified view of the transaction: every input script is
/// blanked except the signed input, which carries `script_code` (the
/// locking script of the output being spent); outputs and sequence
/// numbers are adjusted per the base sighash type; `ANYONECANPAY` drops
/// all inputs but the signed one. The sighash type is appended as 4 LE
/// bytes and the whole preimage double-hashed.
///
/// `SIGHASH_SINGLE` with no matching output reproduces the historical
/// behavior of signing the digest `1`.
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `input_index` - Index of the input being signed.
/// * `script_code` - The locking script of the output being spent.
/// * `sighash_type` - The combined sighash flags.
///
/// # Returns
/// The 32-byte digest to sign.
pub fn legacy_signature_hash(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    sighash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let base_type = sighash_type & SIGHASH_MASK;
    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;

    // The historical quirk: SINGLE with no output at the input's index
    // hashes to the little-endian number 1 instead of a preimage digest.
    if base_type == SIGHASH_SINGLE && input_index >= tx.outputs.len() {
        let mut one = [0u8; 32];
        one[0] = 1;
        return Ok(one);
    }

    let mut writer = WireWriter::with_capacity(tx.size() + script_code.len() + 4);

    writer.write_u32_le(tx.version);

    // Inputs.
    if anyone_can_pay {
        writer.write_varint(VarInt::from(1u64));
        write_input(&mut writer, tx, input_index, script_code, base_type, input_index);
    } else {
        writer.write_varint(VarInt::from(tx.inputs.len()));
        for i in 0..tx.inputs.len() {
            write_input(&mut writer, tx, i, script_code, base_type, input_index);
        }
    }

    // Outputs.
    match base_type {
        SIGHASH_NONE => writer.write_varint(VarInt::from(0u64)),
        SIGHASH_SINGLE => {
            writer.write_varint(VarInt::from(input_index + 1));
            // Earlier outputs are blanked: max value, empty script.
            for _ in 0..input_index {
                writer.write_u64_le(BLANKED_OUTPUT_VALUE);
                writer.write_varint(VarInt::from(0u64));
            }
            tx.outputs[input_index].write_to(&mut writer);
        }
        _ => {
            writer.write_varint(VarInt::from(tx.outputs.len()));
            for output in &tx.outputs {
                output.write_to(&mut writer);
            }
        }
    }

    writer.write_u32_le(tx.lock_time);
    writer.write_u32_le(sighash_type);

    Ok(sha256d(writer.as_bytes()))
}

/// Serialize input `i` into the sighash preimage.
///
/// The signed input carries `script_code`; all others are blanked, and
/// under NONE/SINGLE their sequence numbers are zeroed as well.
fn write_input(
    writer: &mut WireWriter,
    tx: &Transaction,
    i: usize,
    script_code: &[u8],
    base_type: u32,
    signed_index: usize,
) {
    let input = &tx.inputs[i];
    writer.write_bytes(&input.prev_txid);
    writer.write_u32_le(input.prev_index);

    if i == signed_index {
        writer.write_varint(VarInt::from(script_code.len()));
        writer.write_bytes(script_code);
        writer.write_u32_le(input.sequence);
    } else {
        writer.write_varint(VarInt::from(0u64));
        let sequence = if base_type == SIGHASH_NONE || base_type == SIGHASH_SINGLE {
            0
        } else {
            input.sequence
        };
        writer.write_u32_le(sequence);
    }
}
