//! # tessera-royalty
//!
//! Royalty distribution for marketplace sales.
//!
//! Given a sale price and a fee configuration (creator %, platform %,
//! optional referral %), this crate deterministically partitions the price
//! among creator, platform, and referrer, and emits the ordered list of
//! value transfers the settlement layer turns into a ledger batch. The
//! referral bonus is carved out of the platform share, never added on top,
//! so the emitted amounts always sum exactly to the sale price.
//!
//! All amounts are [`rust_decimal::Decimal`] at full precision. Conversion
//! to the settlement medium's integer minor units is the settlement layer's
//! job and happens exactly once, at that boundary.
//!
//! ## Modules
//!
//! - [`config`] — Fee configuration and validation
//! - [`distribution`] — Royalty distribution computation
//! - [`operations`] — Ordered transfer-operation list

pub mod config;
pub mod distribution;
pub mod operations;

use rust_decimal::Decimal;

/// Error types for royalty operations.
#[derive(Debug, thiserror::Error)]
pub enum RoyaltyError {
    /// Fee percentages malformed: negative, not summing to 100, or a
    /// referral share exceeding the platform share. Not retryable; the
    /// configuration must be fixed first.
    #[error("invalid fee config: {0}")]
    InvalidConfig(String),

    /// Negative sale price.
    #[error("sale price must be non-negative, got {amount}")]
    InvalidAmount {
        /// The offending price.
        amount: Decimal,
    },

    /// A positive referral amount was computed but no referrer identity was
    /// supplied. Indicates an inconsistent call site.
    #[error("distribution carries a referral of {amount} but no referrer identity was supplied")]
    MissingRecipient {
        /// The referral amount with no recipient.
        amount: Decimal,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in royalty calculation")]
    Overflow,
}

/// Convenience result type for royalty operations.
pub type Result<T> = std::result::Result<T, RoyaltyError>;
