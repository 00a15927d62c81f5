//! Script templates for standard spend types.
//!
//! A template knows how to produce the unlocking script for an input it
//! controls. Only P2PKH is implemented; the trait is the seam for
//! anything else.

pub mod p2pkh;

use crate::script::Script;
use crate::transaction::Transaction;
use crate::TransactionError;

/// A signing strategy that produces unlocking scripts.
pub trait UnlockingScriptTemplate {
    /// Produce an unlocking script for the given input.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed, with all inputs present.
    /// * `input_index` - The index of the input to sign.
    ///
    /// # Returns
    /// `Ok(Script)` containing the unlocking script.
    fn sign(&self, tx: &Transaction, input_index: usize) -> Result<Script, TransactionError>;

    /// Estimated byte length of the unlocking script, for sizing a
    /// transaction before it is signed.
    fn estimate_length(&self, tx: &Transaction, input_index: usize) -> usize;
}
