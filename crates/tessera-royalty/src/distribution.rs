//! Royalty distribution computation.
//!
//! [`compute_distribution`] is a pure function: it validates the fee
//! configuration, applies the percentage formulas at full decimal
//! precision, and returns an immutable [`RoyaltyDistribution`]. No rounding
//! happens here; the settlement layer converts to integer minor units
//! exactly once, at its own boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FeeConfig;
use crate::{Result, RoyaltyError};

/// The percentages a distribution was computed from, kept for display and
/// audit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub creator_pct: Decimal,
    pub platform_pct: Decimal,
    /// Zero when no referrer took part.
    pub referral_pct: Decimal,
}

/// Immutable result of one royalty calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoyaltyDistribution {
    /// The input sale price.
    pub total_price: Decimal,
    /// Amount owed to the creator.
    pub creator_amount: Decimal,
    /// Gross platform share, before the referral carve-out.
    pub platform_amount: Decimal,
    /// Referral carve-out; zero when no referrer took part.
    pub referral_amount: Decimal,
    pub breakdown: FeeBreakdown,
}

impl RoyaltyDistribution {
    /// Net platform payout after the referral carve-out.
    pub fn platform_net_amount(&self) -> Decimal {
        self.platform_amount - self.referral_amount
    }
}

/// Compute the royalty distribution for one sale.
///
/// When `has_referrer` is false the referral percentage is ignored and the
/// referral amount is forced to zero, even if the config carries one.
///
/// # Errors
///
/// - [`RoyaltyError::InvalidConfig`] if the fee configuration is malformed
/// - [`RoyaltyError::InvalidAmount`] if `total_price` is negative
/// - [`RoyaltyError::Overflow`] on decimal overflow
pub fn compute_distribution(
    total_price: Decimal,
    config: &FeeConfig,
    has_referrer: bool,
) -> Result<RoyaltyDistribution> {
    config.validate()?;
    if total_price < Decimal::ZERO {
        return Err(RoyaltyError::InvalidAmount {
            amount: total_price,
        });
    }

    let creator_amount = share_of(total_price, config.creator_royalty_pct)?;
    let platform_amount = share_of(total_price, config.platform_fee_pct)?;

    let referral_pct = if has_referrer {
        config.referral_fee_pct.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let referral_amount = share_of(total_price, referral_pct)?;

    tracing::debug!(
        %total_price,
        %creator_amount,
        %platform_amount,
        %referral_amount,
        "royalty distribution computed"
    );

    Ok(RoyaltyDistribution {
        total_price,
        creator_amount,
        platform_amount,
        referral_amount,
        breakdown: FeeBreakdown {
            creator_pct: config.creator_royalty_pct,
            platform_pct: config.platform_fee_pct,
            referral_pct,
        },
    })
}

/// `amount * pct / 100` with checked decimal arithmetic.
fn share_of(amount: Decimal, pct: Decimal) -> Result<Decimal> {
    amount
        .checked_mul(pct)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(RoyaltyError::Overflow)
}
