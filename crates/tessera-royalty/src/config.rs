//! Fee configuration and validation.
//!
//! A [`FeeConfig`] states how one sale is split:
//!
//! - **Creator**: Default 70%
//! - **Platform**: Default 30%
//! - **Referral**: Default 2%, paid out of the platform share when a
//!   referrer took part in the sale
//!
//! Creator and platform percentages must always sum to 100; the referral
//! percentage must not exceed the platform share it is carved from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, RoyaltyError};

/// Default creator royalty percentage.
pub const DEFAULT_CREATOR_ROYALTY_PCT: u8 = 70;

/// Default platform fee percentage.
pub const DEFAULT_PLATFORM_FEE_PCT: u8 = 30;

/// Default referral bonus percentage (carved out of the platform share).
pub const DEFAULT_REFERRAL_FEE_PCT: u8 = 2;

/// Per-sale fee configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Percentage of the price paid to the content creator, in [0, 100].
    pub creator_royalty_pct: Decimal,
    /// Percentage paid to the operating platform, in [0, 100].
    pub platform_fee_pct: Decimal,
    /// Optional referral percentage; applies only when a referrer is
    /// present, and comes out of the platform share.
    pub referral_fee_pct: Option<Decimal>,
}

impl Default for FeeConfig {
    /// The marketplace default split: creator 70, platform 30, referral 2.
    fn default() -> Self {
        Self {
            creator_royalty_pct: Decimal::from(DEFAULT_CREATOR_ROYALTY_PCT),
            platform_fee_pct: Decimal::from(DEFAULT_PLATFORM_FEE_PCT),
            referral_fee_pct: Some(Decimal::from(DEFAULT_REFERRAL_FEE_PCT)),
        }
    }
}

impl FeeConfig {
    /// Derive a per-sale config from a listing's creator royalty share.
    ///
    /// The platform takes the complement (`100 - creator_share`) and the
    /// default referral bonus stays available. This is the single source of
    /// truth tying a listing's advertised royalty to the purchase path.
    pub fn from_creator_share(creator_share: Decimal) -> Self {
        Self {
            creator_royalty_pct: creator_share,
            platform_fee_pct: Decimal::ONE_HUNDRED - creator_share,
            referral_fee_pct: Some(Decimal::from(DEFAULT_REFERRAL_FEE_PCT)),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// - [`RoyaltyError::InvalidConfig`] if any percentage is negative, if
    ///   creator + platform do not sum to exactly 100, or if the referral
    ///   percentage exceeds the platform share
    pub fn validate(&self) -> Result<()> {
        if self.creator_royalty_pct < Decimal::ZERO {
            return Err(RoyaltyError::InvalidConfig(format!(
                "creator royalty is negative: {}",
                self.creator_royalty_pct
            )));
        }
        if self.platform_fee_pct < Decimal::ZERO {
            return Err(RoyaltyError::InvalidConfig(format!(
                "platform fee is negative: {}",
                self.platform_fee_pct
            )));
        }

        let total = self.creator_royalty_pct + self.platform_fee_pct;
        if total != Decimal::ONE_HUNDRED {
            return Err(RoyaltyError::InvalidConfig(format!(
                "creator + platform percentages must sum to 100, got {total}"
            )));
        }

        if let Some(referral) = self.referral_fee_pct {
            if referral < Decimal::ZERO {
                return Err(RoyaltyError::InvalidConfig(format!(
                    "referral fee is negative: {referral}"
                )));
            }
            if referral > self.platform_fee_pct {
                return Err(RoyaltyError::InvalidConfig(format!(
                    "referral fee {referral} exceeds platform share {}",
                    self.platform_fee_pct
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config_valid() {
        let config = FeeConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.creator_royalty_pct, dec!(70));
        assert_eq!(config.platform_fee_pct, dec!(30));
        assert_eq!(config.referral_fee_pct, Some(dec!(2)));
    }

    #[test]
    fn test_from_creator_share_complements_platform() {
        let config = FeeConfig::from_creator_share(dec!(85));
        config.validate().expect("derived config should be valid");
        assert_eq!(config.platform_fee_pct, dec!(15));
    }

    #[test]
    fn test_from_creator_share_fractional() {
        let config = FeeConfig::from_creator_share(dec!(72.5));
        config.validate().expect("fractional share should be valid");
        assert_eq!(config.platform_fee_pct, dec!(27.5));
    }

    #[test]
    fn test_validate_sum_not_100() {
        let config = FeeConfig {
            creator_royalty_pct: dec!(60),
            platform_fee_pct: dec!(30),
            referral_fee_pct: None,
        };
        assert!(config.validate().is_err(), "60 + 30 = 90 should be rejected");
    }

    #[test]
    fn test_validate_negative_creator() {
        let config = FeeConfig {
            creator_royalty_pct: dec!(-10),
            platform_fee_pct: dec!(110),
            referral_fee_pct: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_referral() {
        let config = FeeConfig {
            referral_fee_pct: Some(dec!(-1)),
            ..FeeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_referral_exceeds_platform() {
        let config = FeeConfig {
            referral_fee_pct: Some(dec!(31)),
            ..FeeConfig::default()
        };
        assert!(config.validate().is_err(), "referral must fit in the platform share");
    }

    #[test]
    fn test_validate_referral_equal_to_platform() {
        let config = FeeConfig {
            referral_fee_pct: Some(dec!(30)),
            ..FeeConfig::default()
        };
        config
            .validate()
            .expect("referral equal to the full platform share is allowed");
    }

    #[test]
    fn test_all_creator_split_valid() {
        let config = FeeConfig::from_creator_share(dec!(100));
        // Referral (2) now exceeds the platform share (0).
        assert!(config.validate().is_err());

        let config = FeeConfig {
            creator_royalty_pct: dec!(100),
            platform_fee_pct: dec!(0),
            referral_fee_pct: None,
        };
        config.validate().expect("100/0 without referral is valid");
    }
}
