//! Caller-owned purchase log.
//!
//! An append-only in-memory list of [`PurchaseRecord`]s with a JSON
//! snapshot round-trip. The log never touches the filesystem itself; the
//! caller decides where and when snapshots are written. This replaces any
//! notion of the marketplace owning a database.

use tessera_royalty::distribution::RoyaltyDistribution;
use tessera_types::purchase::PurchaseRecord;
use tessera_types::{Address, DatasetId};

use crate::submit::TxSignature;
use crate::{Result, SettlementError};

/// Append-only purchase history for one caller.
#[derive(Clone, Debug, Default)]
pub struct PurchaseLog {
    records: Vec<PurchaseRecord>,
}

impl PurchaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the audit record for a settled sale.
    pub fn record_sale(
        &mut self,
        signature: TxSignature,
        dataset_id: DatasetId,
        buyer: Address,
        distribution: &RoyaltyDistribution,
        recorded_at: u64,
    ) -> &PurchaseRecord {
        let record = PurchaseRecord {
            signature,
            dataset_id,
            buyer,
            total_price: distribution.total_price,
            creator_paid: distribution.creator_amount,
            platform_paid: distribution.platform_net_amount(),
            referral_paid: distribution.referral_amount,
            recorded_at,
        };
        tracing::debug!(
            dataset = %hex::encode(dataset_id),
            total = %record.total_price,
            "purchase recorded"
        );
        let idx = self.records.len();
        self.records.push(record);
        &self.records[idx]
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    /// Records made by one buyer, in append order.
    pub fn for_buyer(&self, buyer: &Address) -> Vec<&PurchaseRecord> {
        self.records.iter().filter(|r| r.buyer == *buyer).collect()
    }

    /// Serialize the full log to a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.records)
            .map_err(|e| SettlementError::Serialization(e.to_string()))
    }

    /// Restore a log from a JSON snapshot.
    pub fn from_json(snapshot: &str) -> Result<Self> {
        let records: Vec<PurchaseRecord> = serde_json::from_str(snapshot)
            .map_err(|e| SettlementError::Serialization(e.to_string()))?;
        Ok(Self { records })
    }
}
