//! Transaction builder: spendable inputs plus desired outputs in, a
//! fully signed transaction out.
//!
//! The builder borrows the `NetworkParams` it validates addresses
//! against and a `KeyStore` that resolves input addresses to signing
//! keys. A failed build returns an error and no transaction.

use std::collections::HashSet;

use tracing::{debug, warn};

use kmd_chain::NetworkParams;
use kmd_primitives::chainhash::Hash;

use crate::address::Address;
use crate::input::TransactionInput;
use crate::keystore::KeyStore;
use crate::output::TransactionOutput;
use crate::sighash::SIGHASH_ALL;
use crate::template::p2pkh;
use crate::template::UnlockingScriptTemplate;
use crate::transaction::{Transaction, TxPurpose, TxSource};
use crate::BuildError;

/// A confirmed output the caller wants to spend.
#[derive(Clone, Debug)]
pub struct SpendableInput {
    /// The funding transaction's id in display-order hex.
    pub txid: String,

    /// The output index within the funding transaction.
    pub vout: u32,

    /// The address the output pays to. The keystore must hold its key.
    pub address: String,

    /// The output's value in the smallest coin unit.
    pub value: u64,
}

/// A payment the caller wants the transaction to make.
#[derive(Clone, Debug)]
pub struct DesiredOutput {
    /// The destination address.
    pub address: String,

    /// The value to send, in the smallest coin unit.
    pub value: u64,
}

/// Builds and signs P2PKH transactions for one network.
#[derive(Clone, Debug)]
pub struct TxBuilder<'a> {
    params: &'a NetworkParams,
    version: u32,
    lock_time: u32,
    sighash_flag: u32,
    source: TxSource,
    purpose: TxPurpose,
}

impl<'a> TxBuilder<'a> {
    /// Create a builder for a network with default settings: version 1,
    /// lock time 0, `SIGHASH_ALL`.
    pub fn new(params: &'a NetworkParams) -> Self {
        TxBuilder {
            params,
            version: 1,
            lock_time: 0,
            sighash_flag: SIGHASH_ALL,
            source: TxSource::Unknown,
            purpose: TxPurpose::Unknown,
        }
    }

    /// Set the transaction version.
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set the transaction lock time.
    pub fn lock_time(mut self, lock_time: u32) -> Self {
        self.lock_time = lock_time;
        self
    }

    /// Set the sighash flags used for every input signature.
    pub fn sighash_flag(mut self, sighash_flag: u32) -> Self {
        self.sighash_flag = sighash_flag;
        self
    }

    /// Set the source annotation stamped on the built transaction.
    pub fn source(mut self, source: TxSource) -> Self {
        self.source = source;
        self
    }

    /// Set the purpose annotation stamped on the built transaction.
    pub fn purpose(mut self, purpose: TxPurpose) -> Self {
        self.purpose = purpose;
        self
    }

    /// Build and sign a transaction.
    ///
    /// Validates the lists, resolves every destination address against
    /// the builder's network, lays down the complete input skeleton, and
    /// then signs each input with the key the keystore returns for its
    /// address. An output total exceeding the input total is allowed but
    /// logged; fee policy is the caller's concern.
    ///
    /// # Arguments
    /// * `inputs` - The outputs being spent.
    /// * `outputs` - The payments to make.
    /// * `keystore` - Resolves input addresses to signing keys.
    ///
    /// # Returns
    /// The fully signed transaction.
    pub fn build(
        &self,
        inputs: &[SpendableInput],
        outputs: &[DesiredOutput],
        keystore: &dyn KeyStore,
    ) -> Result<Transaction, BuildError> {
        debug!(
            network = self.params.id(),
            inputs = inputs.len(),
            outputs = outputs.len(),
            "building transaction"
        );

        if inputs.is_empty() || outputs.is_empty() {
            return Err(BuildError::EmptyTransaction);
        }

        let mut input_total = 0u64;
        let mut seen = HashSet::new();
        for input in inputs {
            if input.value == 0 {
                return Err(BuildError::ZeroValue(format!(
                    "input {}:{}",
                    input.txid, input.vout
                )));
            }
            if !seen.insert((input.txid.to_ascii_lowercase(), input.vout)) {
                return Err(BuildError::DuplicateOutpoint {
                    txid: input.txid.clone(),
                    vout: input.vout,
                });
            }
            input_total = input_total.saturating_add(input.value);
        }

        let mut output_total = 0u64;
        for output in outputs {
            if output.value == 0 {
                return Err(BuildError::ZeroValue(format!(
                    "output to {}",
                    output.address
                )));
            }
            output_total = output_total
                .checked_add(output.value)
                .ok_or(BuildError::ValueOverflow)?;
        }

        if output_total > input_total {
            warn!(
                input_total,
                output_total, "outputs exceed inputs; transaction cannot pay for itself"
            );
        }

        let mut tx = Transaction::new();
        tx.version = self.version;
        tx.lock_time = self.lock_time;

        // Output pass: resolve destinations and lay down lock scripts.
        for output in outputs {
            let address = Address::from_string(&output.address, self.params)?;
            tx.add_output(TransactionOutput::new(output.value, p2pkh::lock(&address)));
        }

        // Input pass, first half: the legacy sighash covers every
        // outpoint, so the full skeleton goes in before any signing.
        for input in inputs {
            tx.add_input(TransactionInput::new(
                parse_outpoint_txid(&input.txid)?,
                input.vout,
            ));
        }

        // Input pass, second half: sign each input.
        for (index, input) in inputs.iter().enumerate() {
            let claimed = Address::from_string(&input.address, self.params)?;
            let key = keystore
                .lookup(&input.address)
                .ok_or_else(|| BuildError::UnknownKey(input.address.clone()))?;
            if key.pub_key().hash160() != claimed.public_key_hash {
                return Err(BuildError::KeyMismatch(input.address.clone()));
            }

            let unlocker = p2pkh::unlock(key, Some(self.sighash_flag));
            let unlocking_script = unlocker.sign(&tx, index)?;
            tx.inputs[index].unlocking_script = Some(unlocking_script);
        }

        tx.source = self.source;
        tx.purpose = self.purpose;

        debug!(txid = %tx.txid_hex(), "transaction built");
        Ok(tx)
    }
}

/// Parse a display-order txid into internal byte order.
fn parse_outpoint_txid(txid: &str) -> Result<[u8; 32], BuildError> {
    if txid.len() != 64 {
        return Err(BuildError::InvalidOutpoint(format!(
            "txid must be 64 hex chars, got {}",
            txid.len()
        )));
    }
    let hash = Hash::from_hex(txid)
        .map_err(|e| BuildError::InvalidOutpoint(format!("{}: {}", txid, e)))?;
    Ok(*hash.as_bytes())
}
