//! Per-subscription inspectors.
//!
//! - [`quota`] - regional vCPU quota
//! - [`sku`] - VM size family availability
//! - [`provider`] - resource provider and feature registration

pub mod provider;
pub mod quota;
pub mod sku;

pub use provider::{
    check_feature, check_provider, check_providers, ProviderCheck, ProviderInspector,
    RegistrationStatus,
};
pub use quota::{get_vcpu_quota, quota_report, QuotaInspector};
pub use sku::{filter_premium_families, inspect_sku_families, sku_lines, SkuFamilyInspector};
