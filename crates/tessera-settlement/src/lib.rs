//! # tessera-settlement
//!
//! The submission boundary between the pure royalty math and the external
//! ledger. This crate converts decimal payouts into integer minor units
//! (rounding exactly once per sale), encodes the marketplace program
//! instructions, composes the atomic settlement batch for one purchase, and
//! defines the [`submit::LedgerSubmitter`] seam the wallet/network layer
//! implements. Nothing in this crate performs I/O.
//!
//! ## Modules
//!
//! - [`minor_units`] — Decimal to minor-unit conversion
//! - [`instruction`] — Marketplace program instruction encoding
//! - [`batch`] — Atomic purchase-batch composition
//! - [`submit`] — Ledger submission trait seam
//! - [`records`] — Caller-owned purchase log

pub mod batch;
pub mod instruction;
pub mod minor_units;
pub mod records;
pub mod submit;

use rust_decimal::Decimal;

/// Error types for settlement operations.
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    /// Royalty computation failed.
    #[error(transparent)]
    Royalty(#[from] tessera_royalty::RoyaltyError),

    /// A decimal amount does not fit the minor-unit integer range.
    #[error("amount {amount} does not fit in u64 minor units")]
    AmountOverflow {
        /// The offending decimal amount in whole tokens.
        amount: Decimal,
    },

    /// The listing cannot be settled as given.
    #[error("invalid listing: {0}")]
    InvalidListing(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The submission collaborator reported a failure.
    #[error("submission failed: {0}")]
    Submission(String),
}

/// Convenience result type for settlement operations.
pub type Result<T> = std::result::Result<T, SettlementError>;
