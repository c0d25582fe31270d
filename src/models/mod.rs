//! Data models for Azure CLI responses.
//!
//! - [`Account`] and [`SubscriptionContext`] - session and subscription handles
//! - [`UsageEntry`] and [`QuotaReport`] - regional compute quota
//! - [`Sku`] - VM size availability and restrictions
//! - [`ProviderRegistration`] and [`FeatureRegistration`] - registration state
//! - [`AzVersionInfo`] and [`CliVersion`] - installed CLI version

mod account;
mod provider;
mod sku;
mod usage;
mod version;

// Re-export public types
pub use account::{Account, AccountUser, SubscriptionContext};
pub use provider::{
    is_registered, state_display, FeatureProperties, FeatureRegistration, ProviderRegistration,
    REGISTERED,
};
pub use sku::{
    format_restrictions, is_premium_family_name, LocationInfo, Restriction, RestrictionInfo, Sku,
};
pub use usage::{Count, QuotaReport, UsageEntry, UsageName};
pub use version::{AzVersionInfo, CliVersion};
