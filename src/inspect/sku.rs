//! Availability of the B and F VM size families.

use crate::azure::{AzResult, AzureApi};
use crate::logger::{Logger, Severity};
use crate::models::{format_restrictions, Sku, SubscriptionContext};
use crate::runner::Inspector;

/// VM sizes of the premium storage B and F families.
pub fn filter_premium_families(skus: &[Sku]) -> Vec<&Sku> {
    skus.iter().filter(|s| s.is_premium_family_vm()).collect()
}

/// Status lines for one SKU: one per location, or one noting there are none.
pub fn sku_lines(sku: &Sku) -> Vec<(Severity, String)> {
    let locations = sku.locations();
    if locations.is_empty() {
        return vec![(
            Severity::Warning,
            format!("SKU: {} | No location information available", sku.name),
        )];
    }

    let restrictions = format_restrictions(sku.restrictions.as_deref());
    locations
        .iter()
        .map(|loc| {
            (
                Severity::Info,
                format!(
                    "SKU: {} | Location: {} | Zones: {} | Restrictions: {}",
                    sku.name,
                    loc.location,
                    loc.zones_display(),
                    restrictions
                ),
            )
        })
        .collect()
}

/// Log availability of every matching SKU in a region.
///
/// # Returns
/// * `Ok(usize)` - number of matching SKUs
/// * `Err` - if the SKU catalog could not be read
pub fn inspect_sku_families(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    region: &str,
    log: &Logger,
) -> AzResult<usize> {
    let skus = api.list_skus(ctx, region)?;
    let matching = filter_premium_families(&skus);
    log::debug!(
        "{} of {} SKUs in {region} match the family filter",
        matching.len(),
        skus.len()
    );

    for sku in &matching {
        for (severity, line) in sku_lines(sku) {
            log.write(&line, severity);
        }
    }
    Ok(matching.len())
}

/// Reports availability of the B and F families in one region.
pub struct SkuFamilyInspector {
    region: String,
}

impl SkuFamilyInspector {
    pub fn new(region: &str) -> SkuFamilyInspector {
        SkuFamilyInspector {
            region: region.to_string(),
        }
    }
}

impl Inspector for SkuFamilyInspector {
    fn name(&self) -> &str {
        "VM SKU families"
    }

    fn inspect(&self, api: &dyn AzureApi, ctx: &SubscriptionContext, log: &Logger) {
        log.info(&format!("Checking VM SKU families in region {}", self.region));
        match inspect_sku_families(api, ctx, &self.region, log) {
            Ok(0) => log.warning(&format!("No matching VM SKUs found in region {}", self.region)),
            Ok(n) => log.info(&format!("{n} matching VM SKUs in region {}", self.region)),
            Err(e) => log.error(&format!(
                "Failed to retrieve VM SKUs for region {}: {e}",
                self.region
            )),
        }
    }
}
