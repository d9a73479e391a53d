//! Marketplace program instruction encoding.
//!
//! The marketplace program understands two instructions, selected by a
//! one-byte discriminator:
//!
//! - `0` create-listing: `[0 | price_minor u64 LE | creator_share u8 |
//!   title | metadata_uri]`
//! - `1` record-purchase: `[1 | dataset_id 32B | referrer 32B or zeroed]`
//!
//! Account order matters to the program and is part of the wire contract.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tessera_types::listing::DatasetListing;
use tessera_types::Address;

use crate::minor_units::to_minor_units;
use crate::{Result, SettlementError};

/// Discriminator for the create-listing instruction.
pub const IX_CREATE_LISTING: u8 = 0;

/// Discriminator for the record-purchase instruction.
pub const IX_RECORD_PURCHASE: u8 = 1;

/// The ledger's native transfer program (the all-zero address).
pub const SYSTEM_PROGRAM_ID: Address = [0u8; 32];

/// One account reference carried by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub pubkey: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn signer(pubkey: Address, is_writable: bool) -> Self {
        Self {
            pubkey,
            is_signer: true,
            is_writable,
        }
    }

    pub fn writable(pubkey: Address) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: true,
        }
    }

    pub fn readonly(pubkey: Address) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: false,
        }
    }
}

/// An opaque program call, ready for the submission layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub program_id: Address,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// Encode the create-listing instruction for a listing.
///
/// # Errors
///
/// - [`SettlementError::AmountOverflow`] if the price does not fit in u64
///   minor units
/// - [`SettlementError::InvalidListing`] if the royalty share cannot be
///   encoded as a whole percentage byte
pub fn create_listing_instruction(
    program_id: Address,
    listing: &DatasetListing,
) -> Result<Instruction> {
    let price_minor = to_minor_units(listing.price)?;
    let creator_share = listing
        .royalty_pct
        .floor()
        .to_u8()
        .filter(|share| *share <= 100)
        .ok_or_else(|| {
            SettlementError::InvalidListing(format!(
                "royalty share {} is not encodable as a percentage byte",
                listing.royalty_pct
            ))
        })?;

    let mut data =
        Vec::with_capacity(1 + 8 + 1 + listing.title.len() + listing.metadata_uri.len());
    data.push(IX_CREATE_LISTING);
    data.extend_from_slice(&price_minor.to_le_bytes());
    data.push(creator_share);
    data.extend_from_slice(listing.title.as_bytes());
    data.extend_from_slice(listing.metadata_uri.as_bytes());

    Ok(Instruction {
        program_id,
        accounts: vec![
            AccountMeta::signer(listing.creator, false),
            AccountMeta::writable(listing.id),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data,
    })
}

/// Encode the record-purchase instruction for a settled sale.
///
/// The referrer slot in the payload is zero-filled when no referrer took
/// part, so the data length is fixed.
pub fn record_purchase_instruction(
    program_id: Address,
    buyer: Address,
    listing: &DatasetListing,
    platform: Address,
    referrer: Option<Address>,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::signer(buyer, true),
        AccountMeta::writable(listing.creator),
        AccountMeta::writable(listing.id),
        AccountMeta::writable(platform),
    ];
    if let Some(referrer) = referrer {
        accounts.push(AccountMeta::writable(referrer));
    }
    accounts.push(AccountMeta::readonly(SYSTEM_PROGRAM_ID));

    let mut data = Vec::with_capacity(1 + 32 + 32);
    data.push(IX_RECORD_PURCHASE);
    data.extend_from_slice(&listing.id);
    data.extend_from_slice(&referrer.unwrap_or([0u8; 32]));

    Instruction {
        program_id,
        accounts,
        data,
    }
}
