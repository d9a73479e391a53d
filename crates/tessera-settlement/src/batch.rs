//! Atomic purchase-batch composition.
//!
//! One purchase settles as a single atomic unit: the ordered minor-unit
//! transfers (buyer to creator, platform, and optionally referrer) followed
//! by one record-purchase program call. The batch is complete before any
//! network interaction begins; signing and broadcast belong to the
//! [`crate::submit::LedgerSubmitter`] implementation.

use serde::{Deserialize, Serialize};
use tessera_royalty::config::FeeConfig;
use tessera_royalty::distribution::{compute_distribution, RoyaltyDistribution};
use tessera_royalty::operations::{build_transfer_operations, Recipients};
use tessera_types::listing::DatasetListing;
use tessera_types::Address;

use crate::instruction::{record_purchase_instruction, Instruction};
use crate::minor_units::convert_operations;
use crate::{Result, SettlementError};

/// One minor-unit value transfer inside a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorTransfer {
    pub from: Address,
    pub to: Address,
    /// Amount in minor units.
    pub amount: u64,
}

/// The atomic submission unit for one purchase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettlementBatch {
    /// Ordered transfers: creator, platform (net), referrer.
    pub transfers: Vec<MinorTransfer>,
    /// The record-purchase call, always last.
    pub instruction: Instruction,
}

/// Compose the settlement batch for one purchase.
///
/// The fee configuration is derived from the listing's royalty share, so
/// the advertised royalty and the settled split cannot diverge. Returns the
/// batch together with the full-precision distribution for display and
/// audit.
///
/// # Errors
///
/// - [`SettlementError::InvalidListing`] if the listing is inactive
/// - [`SettlementError::Royalty`] if the derived fee configuration or the
///   price is rejected by the royalty engine
/// - [`SettlementError::AmountOverflow`] if an amount does not fit in minor
///   units
pub fn compose_purchase(
    program_id: Address,
    buyer: Address,
    listing: &DatasetListing,
    platform: Address,
    referrer: Option<Address>,
) -> Result<(SettlementBatch, RoyaltyDistribution)> {
    if !listing.is_active {
        return Err(SettlementError::InvalidListing(format!(
            "listing {} is not active",
            hex::encode(listing.id)
        )));
    }

    let config = FeeConfig::from_creator_share(listing.royalty_pct);
    let distribution = compute_distribution(listing.price, &config, referrer.is_some())?;
    let recipients = Recipients {
        creator: listing.creator,
        platform,
        referrer,
    };
    let operations = build_transfer_operations(&distribution, &recipients)?;
    let amounts = convert_operations(distribution.total_price, &operations)?;

    let transfers: Vec<MinorTransfer> = operations
        .iter()
        .zip(&amounts)
        .filter(|(_, amount)| **amount > 0)
        .map(|(op, amount)| MinorTransfer {
            from: buyer,
            to: op.recipient,
            amount: *amount,
        })
        .collect();

    let instruction = record_purchase_instruction(program_id, buyer, listing, platform, referrer);

    tracing::info!(
        dataset = %hex::encode(listing.id),
        buyer = %hex::encode(buyer),
        transfers = transfers.len(),
        total = %distribution.total_price,
        "purchase batch composed"
    );

    Ok((
        SettlementBatch {
            transfers,
            instruction,
        },
        distribution,
    ))
}
