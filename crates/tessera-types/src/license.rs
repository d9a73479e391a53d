//! License terms and predefined presets.
//!
//! Every purchase grants the buyer a license over the dataset. Terms are
//! described declaratively so the marketplace UI can render them and the
//! purchase log can snapshot them alongside the payment record.

use serde::{Deserialize, Serialize};

use crate::{Address, DatasetId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseType {
    Commercial,
    Research,
    OpenSource,
    Custom,
}

/// A single granted usage right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageRight {
    Training,
    Inference,
    Redistribution,
    Modification,
    CommercialUse,
    ResearchOnly,
}

/// Declarative license terms attached to a listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LicenseTerms {
    /// Stable preset identifier (e.g. `"commercial-full"`).
    pub id: String,
    pub license_type: LicenseType,
    pub name: String,
    pub description: String,
    pub usage_rights: Vec<UsageRight>,
    pub restrictions: Vec<String>,
    pub attribution_required: bool,
    pub commercial_use: bool,
    pub redistribution_allowed: bool,
    pub modification_allowed: bool,
    /// Unix timestamp; `None` for perpetual licenses.
    pub expires_at: Option<u64>,
    pub max_users: Option<u32>,
    pub geographic_restrictions: Vec<String>,
    pub custom_terms: Option<String>,
}

/// A license granted to a buyer for one dataset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetLicense {
    pub dataset_id: DatasetId,
    pub terms: LicenseTerms,
    /// Unix timestamp of the purchase that granted this license.
    pub purchased_at: u64,
    pub buyer: Address,
    pub license_key: String,
    pub is_active: bool,
    pub usage: Option<UsageTracking>,
}

/// Optional per-license usage accounting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsageTracking {
    pub downloads_used: u32,
    pub max_downloads: u32,
    /// Unix timestamp of the last access.
    pub last_accessed_at: u64,
}

/// The four marketplace license presets.
pub fn predefined_licenses() -> Vec<LicenseTerms> {
    vec![
        LicenseTerms {
            id: "commercial-full".to_string(),
            license_type: LicenseType::Commercial,
            name: "Commercial Full License".to_string(),
            description: "Full commercial rights including training, inference, and redistribution".to_string(),
            usage_rights: vec![
                UsageRight::Training,
                UsageRight::Inference,
                UsageRight::Redistribution,
                UsageRight::Modification,
                UsageRight::CommercialUse,
            ],
            restrictions: vec![],
            attribution_required: false,
            commercial_use: true,
            redistribution_allowed: true,
            modification_allowed: true,
            expires_at: None,
            max_users: None,
            geographic_restrictions: vec![],
            custom_terms: None,
        },
        LicenseTerms {
            id: "research-only".to_string(),
            license_type: LicenseType::Research,
            name: "Research Only License".to_string(),
            description: "For academic and research purposes only, no commercial use".to_string(),
            usage_rights: vec![
                UsageRight::Training,
                UsageRight::Inference,
                UsageRight::ResearchOnly,
            ],
            restrictions: vec![
                "No commercial use".to_string(),
                "Academic institutions only".to_string(),
                "Results must be published openly".to_string(),
            ],
            attribution_required: true,
            commercial_use: false,
            redistribution_allowed: false,
            modification_allowed: true,
            expires_at: None,
            max_users: None,
            geographic_restrictions: vec![],
            custom_terms: None,
        },
        LicenseTerms {
            id: "open-source".to_string(),
            license_type: LicenseType::OpenSource,
            name: "Open Source License (MIT-style)".to_string(),
            description: "Open source license with attribution requirement".to_string(),
            usage_rights: vec![
                UsageRight::Training,
                UsageRight::Inference,
                UsageRight::Redistribution,
                UsageRight::Modification,
                UsageRight::CommercialUse,
            ],
            restrictions: vec![
                "Must include original license".to_string(),
                "Must provide attribution".to_string(),
            ],
            attribution_required: true,
            commercial_use: true,
            redistribution_allowed: true,
            modification_allowed: true,
            expires_at: None,
            max_users: None,
            geographic_restrictions: vec![],
            custom_terms: None,
        },
        LicenseTerms {
            id: "training-only".to_string(),
            license_type: LicenseType::Commercial,
            name: "Training Only License".to_string(),
            description: "For model training only, no redistribution of dataset".to_string(),
            usage_rights: vec![UsageRight::Training, UsageRight::CommercialUse],
            restrictions: vec![
                "No redistribution of original dataset".to_string(),
                "No sharing of raw data".to_string(),
                "Trained models can be used commercially".to_string(),
            ],
            attribution_required: false,
            commercial_use: true,
            redistribution_allowed: false,
            modification_allowed: false,
            expires_at: None,
            max_users: None,
            geographic_restrictions: vec![],
            custom_terms: None,
        },
    ]
}
