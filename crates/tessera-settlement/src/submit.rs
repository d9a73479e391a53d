//! Ledger submission trait seam.
//!
//! The settlement core never talks to a network. Whoever owns the wallet
//! session implements [`LedgerSubmitter`] and carries the batch the rest of
//! the way: signature collection, broadcast, and confirmation polling all
//! live behind this trait.

use crate::batch::SettlementBatch;
use crate::Result;

/// A ledger transaction signature, as returned by the submission layer.
pub type TxSignature = String;

/// Submits a settlement batch to the ledger as one atomic transaction.
pub trait LedgerSubmitter {
    /// Submit the batch and return the transaction signature.
    ///
    /// # Errors
    ///
    /// - [`crate::SettlementError::Submission`] for any wallet or network
    ///   failure; the batch itself is never partially applied
    fn submit(&self, batch: &SettlementBatch) -> Result<TxSignature>;
}
