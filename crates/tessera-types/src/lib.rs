//! # tessera-types
//!
//! Shared domain types used across the Tessera workspace: dataset listings,
//! license terms, and purchase records.
//!
//! ## Modules
//!
//! - [`listing`] — Dataset listings
//! - [`license`] — License terms and predefined presets
//! - [`purchase`] — Purchase records

pub mod license;
pub mod listing;
pub mod purchase;

/// An opaque ledger identity (e.g. a wallet address), 32 bytes.
pub type Address = [u8; 32];

/// A dataset listing identifier, 32 bytes.
pub type DatasetId = [u8; 32];

/// Minor units per whole settlement token (1 token = 10^9 minor units).
pub const MINOR_UNITS_PER_TOKEN: u64 = 1_000_000_000;
