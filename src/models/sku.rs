//! Compute SKU catalog models from `az vm list-skus`.

use crate::config;
use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static SKU_FAMILY_REGEX: OnceLock<Regex> = OnceLock::new();

fn sku_family_regex() -> &'static Regex {
    SKU_FAMILY_REGEX
        .get_or_init(|| Regex::new(config::SKU_FAMILY_PATTERN).expect("Invalid Regex"))
}

/// A VM size (or other compute resource) offered in a region.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    pub name: String,
    pub resource_type: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    /// Per location availability. The CLI emits `null` or `[]` when unknown.
    #[serde(default)]
    pub location_info: Option<Vec<LocationInfo>>,
    #[serde(default)]
    pub restrictions: Option<Vec<Restriction>>,
}

/// Availability of a SKU in one location.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub location: String,
    #[serde(default)]
    pub zones: Option<Vec<String>>,
}

/// A reason a SKU can not be used somewhere.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    /// `Location` or `Zone`.
    #[serde(rename = "type")]
    pub kind: String,
    /// e.g. `NotAvailableForSubscription` or `QuotaId`.
    #[serde(default)]
    pub reason_code: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
    #[serde(default)]
    pub restriction_info: Option<RestrictionInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RestrictionInfo {
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    #[serde(default)]
    pub zones: Option<Vec<String>>,
}

impl Sku {
    /// True for VM sizes of the B and F families with premium storage.
    pub fn is_premium_family_vm(&self) -> bool {
        self.resource_type == config::VM_RESOURCE_TYPE && is_premium_family_name(&self.name)
    }

    /// Location entries, empty when the catalog has none.
    pub fn locations(&self) -> &[LocationInfo] {
        self.location_info.as_deref().unwrap_or_default()
    }
}

/// Check a size name against the family pattern.
pub fn is_premium_family_name(name: &str) -> bool {
    sku_family_regex().is_match(name)
}

impl LocationInfo {
    /// Zones joined by `, `, or `None`.
    pub fn zones_display(&self) -> String {
        match self.zones.as_deref() {
            Some(zones) if !zones.is_empty() => zones.iter().join(", "),
            _ => "None".to_string(),
        }
    }
}

impl Restriction {
    /// Locations the restriction applies to.
    ///
    /// `restrictionInfo.locations` when present, otherwise `values`.
    pub fn locations(&self) -> &[String] {
        self.restriction_info
            .as_ref()
            .and_then(|info| info.locations.as_deref())
            .or(self.values.as_deref())
            .unwrap_or_default()
    }
}

/// Render restrictions as `Type: X, Reason: Y, Locations: Z` joined by `; `.
///
/// An absent or empty list renders as `None`.
pub fn format_restrictions(restrictions: Option<&[Restriction]>) -> String {
    match restrictions {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|r| {
                format!(
                    "Type: {}, Reason: {}, Locations: {}",
                    r.kind,
                    r.reason_code.as_deref().unwrap_or("None"),
                    r.locations().iter().join(", ")
                )
            })
            .join("; "),
        _ => "None".to_string(),
    }
}
