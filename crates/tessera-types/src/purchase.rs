//! Purchase records.
//!
//! A purchase record is the caller-owned audit entry for one settled sale.
//! The amounts are the decimal payouts as distributed, not the minor-unit
//! integers that went on the wire; the record exists for display and audit,
//! never as an authoritative balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, DatasetId};

/// Audit record of one completed purchase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Ledger transaction signature returned by the submitter.
    pub signature: String,
    pub dataset_id: DatasetId,
    pub buyer: Address,
    /// Sale price in whole settlement tokens.
    pub total_price: Decimal,
    /// Amount paid to the creator.
    pub creator_paid: Decimal,
    /// Amount paid to the platform, net of any referral carve-out.
    pub platform_paid: Decimal,
    /// Amount paid to the referrer; zero when no referrer took part.
    pub referral_paid: Decimal,
    /// Unix timestamp when the record was appended.
    pub recorded_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_serde_round_trip() {
        let record = PurchaseRecord {
            signature: "3nGq...demo".to_string(),
            dataset_id: [0x07; 32],
            buyer: [0x09; 32],
            total_price: dec!(2.5),
            creator_paid: dec!(1.75),
            platform_paid: dec!(0.70),
            referral_paid: dec!(0.05),
            recorded_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let back: PurchaseRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.total_price, record.total_price);
        assert_eq!(
            back.creator_paid + back.platform_paid + back.referral_paid,
            back.total_price
        );
    }
}
