//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Builds the standard locking script (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and signs inputs into `<sig> <pubkey>`
//! unlocking scripts.

use kmd_primitives::ec::PrivateKey;

use crate::address::Address;
use crate::opcodes::*;
use crate::script::Script;
use crate::sighash::{legacy_signature_hash, SIGHASH_ALL};
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Create a P2PKH locking script for an address.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
pub fn lock(address: &Address) -> Script {
    lock_script_for_hash(&address.public_key_hash)
}

fn lock_script_for_hash(pkh: &[u8; 20]) -> Script {
    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(pkh);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);
    Script::from_bytes(&bytes)
}

/// Create a P2PKH unlocker for signing transaction inputs.
///
/// # Arguments
/// * `private_key` - The key that controls the output being spent.
/// * `sighash_flag` - Optional sighash flags. Defaults to `SIGHASH_ALL`.
pub fn unlock(private_key: PrivateKey, sighash_flag: Option<u32>) -> P2pkhUnlocker {
    P2pkhUnlocker {
        private_key,
        sighash_flag: sighash_flag.unwrap_or(SIGHASH_ALL),
    }
}

/// P2PKH signing template holding a private key and sighash flags.
///
/// Produces unlocking scripts of the form
/// `<DER_signature || sighash_byte> <compressed_pubkey>`.
pub struct P2pkhUnlocker {
    private_key: PrivateKey,
    sighash_flag: u32,
}

impl UnlockingScriptTemplate for P2pkhUnlocker {
    /// Sign the specified input.
    ///
    /// The script code is the P2PKH lock script over the key's own
    /// public key hash; the digest is the legacy signature hash over it.
    fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TransactionError> {
        if input_index >= tx.inputs.len() {
            return Err(TransactionError::SigningError(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                tx.inputs.len()
            )));
        }

        let pub_key = self.private_key.pub_key();

        // The script code is the lock script this key can satisfy.
        let script_code = lock_script_for_hash(&pub_key.hash160());

        let digest =
            legacy_signature_hash(tx, input_index, script_code.as_bytes(), self.sighash_flag)?;
        let signature = self.private_key.sign(&digest)?;

        let der_sig = signature.to_der();
        let mut sig_buf = Vec::with_capacity(der_sig.len() + 1);
        sig_buf.extend_from_slice(&der_sig);
        sig_buf.push(self.sighash_flag as u8);

        let mut script = Script::new();
        script.append_push_data(&sig_buf)?;
        script.append_push_data(&pub_key.to_compressed())?;

        Ok(script)
    }

    /// Estimate the unlocking script length.
    ///
    /// 1 (push) + up to 72 (DER sig + sighash byte) + 1 (push) + 33
    /// (compressed pubkey) = 107 bytes worst case.
    fn estimate_length(&self, _tx: &Transaction, _input_index: usize) -> usize {
        107
    }
}
