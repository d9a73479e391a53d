//! Dataset listings.
//!
//! A listing advertises one dataset for sale: the creator's identity, the
//! asking price in whole settlement tokens, and the royalty percentage the
//! creator keeps on each sale. Listings are plain data; validation happens
//! where a listing is consumed (the settlement composer rejects inactive or
//! malformed listings before building a batch).

use rand::RngCore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, DatasetId};

/// A dataset offered for sale on the marketplace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetListing {
    /// Fresh random identifier assigned at listing time.
    pub id: DatasetId,
    /// The content creator's ledger identity.
    pub creator: Address,
    /// Asking price in whole settlement tokens.
    pub price: Decimal,
    /// Percentage of each sale paid to the creator, in [0, 100].
    pub royalty_pct: Decimal,
    pub title: String,
    /// URI of the off-ledger dataset metadata document.
    pub metadata_uri: String,
    pub is_active: bool,
}

impl DatasetListing {
    /// Create an active listing with a fresh random identifier.
    pub fn new(
        creator: Address,
        price: Decimal,
        royalty_pct: Decimal,
        title: impl Into<String>,
        metadata_uri: impl Into<String>,
    ) -> Self {
        Self {
            id: new_dataset_id(),
            creator,
            price,
            royalty_pct,
            title: title.into(),
            metadata_uri: metadata_uri.into(),
            is_active: true,
        }
    }
}

/// Generate a fresh random dataset identifier.
pub fn new_dataset_id() -> DatasetId {
    let mut id = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut id);
    id
}
