//! Decimal to minor-unit conversion.
//!
//! The royalty core keeps full decimal precision; the ledger moves integer
//! minor units. The conversion happens here and only here, once per sale:
//! every operation except the leading one is floored, and the leading
//! operation absorbs the rounding remainder so the minor-unit amounts still
//! sum to the floored total. Operations are ordered creator-first, so the
//! remainder lands with the creator.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tessera_royalty::operations::TransferOperation;
use tessera_types::MINOR_UNITS_PER_TOKEN;

use crate::{Result, SettlementError};

/// Convert a non-negative decimal token amount to minor units, flooring.
///
/// # Errors
///
/// - [`SettlementError::AmountOverflow`] if the scaled amount does not fit
///   in `u64` (or is negative)
pub fn to_minor_units(amount: Decimal) -> Result<u64> {
    amount
        .checked_mul(Decimal::from(MINOR_UNITS_PER_TOKEN))
        .map(|scaled| scaled.floor())
        .and_then(|floored| floored.to_u64())
        .ok_or(SettlementError::AmountOverflow { amount })
}

/// Convert an ordered operation list to minor-unit amounts, parallel to the
/// input slice.
///
/// `total_price` is the decimal sale price the operations sum to. The
/// returned amounts sum to `to_minor_units(total_price)` exactly; the
/// leading operation receives whatever the floors of the others leave over.
pub fn convert_operations(total_price: Decimal, ops: &[TransferOperation]) -> Result<Vec<u64>> {
    if ops.is_empty() {
        return Ok(Vec::new());
    }

    let total_minor = to_minor_units(total_price)?;
    let mut amounts = Vec::with_capacity(ops.len());
    let mut tail_sum = 0u64;
    for op in &ops[1..] {
        let minor = to_minor_units(op.amount)?;
        tail_sum += minor;
        amounts.push(minor);
    }

    // Floors are superadditive, so the tail never exceeds the total.
    amounts.insert(0, total_minor - tail_sum);
    Ok(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tessera_royalty::config::FeeConfig;
    use tessera_royalty::distribution::compute_distribution;
    use tessera_royalty::operations::{build_transfer_operations, Recipients};

    fn recipients() -> Recipients {
        Recipients {
            creator: [0x01; 32],
            platform: [0x02; 32],
            referrer: Some([0x03; 32]),
        }
    }

    #[test]
    fn test_whole_token_conversion() {
        assert_eq!(to_minor_units(dec!(1)).expect("convert"), 1_000_000_000);
        assert_eq!(to_minor_units(dec!(2.5)).expect("convert"), 2_500_000_000);
        assert_eq!(to_minor_units(dec!(0)).expect("convert"), 0);
    }

    #[test]
    fn test_sub_minor_precision_floors() {
        // 0.007 tokens = 7_000_000 minor units exactly; 0.0000000001 floors to 0.
        assert_eq!(to_minor_units(dec!(0.007)).expect("convert"), 7_000_000);
        assert_eq!(to_minor_units(dec!(0.0000000001)).expect("convert"), 0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(to_minor_units(dec!(-1)).is_err());
    }

    #[test]
    fn test_overflow_rejected() {
        // u64::MAX minor units is ~18.4e9 tokens.
        assert!(to_minor_units(dec!(99_000_000_000)).is_err());
    }

    #[test]
    fn test_convert_operations_conserves_total() {
        let dist = compute_distribution(dec!(2.5), &FeeConfig::default(), true).expect("dist");
        let ops = build_transfer_operations(&dist, &recipients()).expect("ops");
        let amounts = convert_operations(dec!(2.5), &ops).expect("convert");

        assert_eq!(amounts, vec![1_750_000_000, 700_000_000, 50_000_000]);
        assert_eq!(amounts.iter().sum::<u64>(), 2_500_000_000);
    }

    #[test]
    fn test_remainder_goes_to_leading_operation() {
        // 0.000000001 tokens at 70/30: creator 0.7 minor units, platform
        // 0.3. Platform floors to 0; the single minor unit stays with the
        // creator.
        let dist = compute_distribution(dec!(0.000000001), &FeeConfig::default(), false)
            .expect("dist");
        let ops = build_transfer_operations(&dist, &recipients()).expect("ops");
        let amounts = convert_operations(dec!(0.000000001), &ops).expect("convert");

        assert_eq!(amounts, vec![1, 0]);
    }

    #[test]
    fn test_awkward_shares_still_conserve() {
        let config = FeeConfig::from_creator_share(dec!(33.33));
        for price in [dec!(0.123456789), dec!(1), dec!(7.77), dec!(1234.000000001)] {
            let dist = compute_distribution(price, &config, true).expect("dist");
            let ops = build_transfer_operations(&dist, &recipients()).expect("ops");
            let amounts = convert_operations(price, &ops).expect("convert");
            assert_eq!(
                amounts.iter().sum::<u64>(),
                to_minor_units(price).expect("total"),
                "minor-unit conservation failed for {price}"
            );
        }
    }

    #[test]
    fn test_convert_empty_operations() {
        let amounts = convert_operations(dec!(0), &[]).expect("convert");
        assert!(amounts.is_empty());
    }
}
