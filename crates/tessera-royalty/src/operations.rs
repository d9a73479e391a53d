//! Ordered transfer-operation list.
//!
//! [`build_transfer_operations`] turns a computed distribution into the
//! exact sequence of value transfers the settlement layer submits:
//!
//! 1. Creator, 2. Platform (net of referral), 3. Referrer.
//!
//! Downstream batch semantics depend on this order (fee estimation and
//! display both walk the list front to back), so it is part of the
//! contract. Zero-amount steps are never emitted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tessera_types::Address;

use crate::distribution::RoyaltyDistribution;
use crate::{Result, RoyaltyError};

/// Who a payout goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutRole {
    Creator,
    Platform,
    Referrer,
}

/// The ledger identities receiving the payouts of one sale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Recipients {
    pub creator: Address,
    pub platform: Address,
    /// Must be present iff the distribution carries a positive referral.
    pub referrer: Option<Address>,
}

/// One entry in the ordered payout list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferOperation {
    pub role: PayoutRole,
    pub recipient: Address,
    /// Non-negative decimal amount in whole settlement tokens.
    pub amount: Decimal,
}

/// Build the ordered transfer list for a distribution.
///
/// The emitted amounts always sum exactly to `distribution.total_price`:
/// creator + (platform − referral) + referral collapses to creator +
/// platform, and the validated percentages sum to 100.
///
/// # Errors
///
/// - [`RoyaltyError::MissingRecipient`] if the distribution carries a
///   positive referral amount but `recipients.referrer` is `None`
pub fn build_transfer_operations(
    distribution: &RoyaltyDistribution,
    recipients: &Recipients,
) -> Result<Vec<TransferOperation>> {
    let mut ops = Vec::with_capacity(3);

    if distribution.creator_amount > Decimal::ZERO {
        ops.push(TransferOperation {
            role: PayoutRole::Creator,
            recipient: recipients.creator,
            amount: distribution.creator_amount,
        });
    }

    let platform_net = distribution.platform_net_amount();
    if platform_net > Decimal::ZERO {
        ops.push(TransferOperation {
            role: PayoutRole::Platform,
            recipient: recipients.platform,
            amount: platform_net,
        });
    }

    if distribution.referral_amount > Decimal::ZERO {
        let referrer = recipients
            .referrer
            .ok_or(RoyaltyError::MissingRecipient {
                amount: distribution.referral_amount,
            })?;
        ops.push(TransferOperation {
            role: PayoutRole::Referrer,
            recipient: referrer,
            amount: distribution.referral_amount,
        });
    }

    Ok(ops)
}
