//! Regional vCPU quota.

use crate::azure::{AzError, AzResult, AzureApi};
use crate::config;
use crate::logger::Logger;
use crate::models::{Count, QuotaReport, SubscriptionContext, UsageEntry};
use crate::runner::Inspector;

fn coerce(field: &str, count: &Count) -> AzResult<i64> {
    count.as_i64().ok_or_else(|| AzError::InvalidNumber {
        field: field.to_string(),
        value: count.to_string(),
    })
}

/// Turn a usage entry into a report with the remaining capacity.
pub fn quota_report(entry: &UsageEntry) -> AzResult<QuotaReport> {
    let current = coerce("currentValue", &entry.current_value)?;
    let limit = coerce("limit", &entry.limit)?;
    QuotaReport::new(&entry.name.value, current, limit)
        .ok_or(AzError::QuotaOverflow { current, limit })
}

fn fetch_vcpu_quota(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    region: &str,
    detailed: bool,
    log: &Logger,
) -> AzResult<Option<QuotaReport>> {
    let entries = api.list_usage(ctx, region)?;
    log::debug!("{} usage entries in {region}", entries.len());

    if detailed {
        for entry in &entries {
            log.info(&format!(
                "Quota: {} | Current: {} | Limit: {}",
                entry
                    .name
                    .localized_value
                    .as_deref()
                    .unwrap_or(&entry.name.value),
                entry.current_value,
                entry.limit
            ));
        }
    }

    entries
        .iter()
        .find(|e| e.name.value == config::CORES_USAGE_NAME)
        .map(quota_report)
        .transpose()
}

/// Total regional vCPU quota of a subscription.
///
/// A missing `cores` entry logs a Warning, any failure logs an Error; both
/// return `None`.
pub fn get_vcpu_quota(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    region: &str,
    detailed: bool,
    log: &Logger,
) -> Option<QuotaReport> {
    match fetch_vcpu_quota(api, ctx, region, detailed, log) {
        Ok(Some(report)) => Some(report),
        Ok(None) => {
            log.warning(&format!(
                "No '{}' quota entry found for region {region}",
                config::CORES_USAGE_NAME
            ));
            None
        }
        Err(e) => {
            log.error(&format!(
                "Failed to retrieve vCPU quota for region {region}: {e}"
            ));
            None
        }
    }
}

/// Reports the vCPU quota of one region.
pub struct QuotaInspector {
    region: String,
    detailed: bool,
}

impl QuotaInspector {
    pub fn new(region: &str, detailed: bool) -> QuotaInspector {
        QuotaInspector {
            region: region.to_string(),
            detailed,
        }
    }
}

impl Inspector for QuotaInspector {
    fn name(&self) -> &str {
        "vCPU quota"
    }

    fn inspect(&self, api: &dyn AzureApi, ctx: &SubscriptionContext, log: &Logger) {
        match get_vcpu_quota(api, ctx, &self.region, self.detailed, log) {
            Some(report) => log.info(&format!("vCPU quota in {}: {report}", self.region)),
            None => log.warning(&format!("No vCPU quota data for region {}", self.region)),
        }
    }
}
