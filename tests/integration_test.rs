//! Integration tests for azure-quota-check
//!
//! These tests run both tools end to end against a scripted Azure backend.

use azure_quota_check::azure::cli::parse_json;
use azure_quota_check::inspect::{
    get_vcpu_quota, ProviderInspector, QuotaInspector, SkuFamilyInspector,
};
use azure_quota_check::models::{Sku, SubscriptionContext, UsageEntry};
use azure_quota_check::runner::{EXIT_FATAL, EXIT_OK};
use azure_quota_check::testing::{MockAzure, MockSubscription};
use azure_quota_check::{Logger, Runner, Severity, ToolSettings};

fn fixture<T: serde::de::DeserializeOwned>(file: &str) -> T {
    let bytes = std::fs::read(format!("src/tests/test_data/{file}"))
        .unwrap_or_else(|e| panic!("Error reading fixture {file}: {e}"));
    parse_json(&bytes).unwrap_or_else(|e| panic!("Error parsing fixture {file}: {e}"))
}

fn settings(ids: &[&str]) -> ToolSettings {
    ToolSettings {
        subscriptions: ids.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_skip_then_zero_available() {
    let api = MockAzure::new().with_subscription("sub-ok", MockSubscription::new("ok").with_cores(10, 10));
    let log = Logger::capture();
    let runner = Runner::new(&api, &log).with_inspector(QuotaInspector::new("westus3", false));

    let code = runner.run_tool(&settings(&["sub-missing", "sub-ok"]));

    assert_eq!(code, EXIT_OK);
    assert!(log.contains("[Error] Failed to set subscription context sub-missing"));
    assert!(log.contains("[Warning] Skipping subscription sub-missing"));
    assert!(log.contains("[Info] vCPU quota in westus3: Current=10, Limit=10, Available=0"));
    assert!(log.contains("All subscriptions processed: 1 inspected, 1 skipped"));
    assert!(!api.called("usage sub-missing"));
}

#[test]
fn test_quota_tool_with_real_output() {
    let usage: Vec<UsageEntry> = fixture("vm_list_usage_westus3.json");
    let skus: Vec<Sku> = fixture("vm_list_skus_westus3.json");
    let api = MockAzure::new().with_subscription(
        "sub-1",
        MockSubscription::new("platform").with_usage(usage).with_skus(skus),
    );
    let log = Logger::capture();
    let runner = Runner::new(&api, &log)
        .with_inspector(QuotaInspector::new("westus3", true))
        .with_inspector(SkuFamilyInspector::new("westus3"));

    assert_eq!(runner.run_tool(&settings(&["sub-1"])), EXIT_OK);

    assert!(log.contains("Quota: Standard BS Family vCPUs | Current: 4 | Limit: 10"));
    assert!(log.contains("vCPU quota in westus3: Current=5, Limit=20, Available=15"));
    assert!(log.contains("SKU: Standard_B2s | Location: westus3 | Zones: None | Restrictions: None"));
    assert!(log.contains("SKU: Standard_B4ms | No location information available"));
    assert!(log.contains("3 matching VM SKUs in region westus3"));
    assert!(!log.contains("Standard_E4s_v3"));
    assert!(!log.contains("Standard_F2s_v2"));
    assert_eq!(log.count(Severity::Error), 0);
}

#[test]
fn test_inspector_failures_do_not_stop_run() {
    let api = MockAzure::new()
        .with_subscription(
            "sub-1",
            MockSubscription::new("one")
                .usage_error("ResourceNotFound")
                .sku_error("ResourceNotFound"),
        )
        .with_subscription("sub-2", MockSubscription::new("two").with_cores(3, 8));
    let log = Logger::capture();
    let runner = Runner::new(&api, &log)
        .with_inspector(QuotaInspector::new("westus3", false))
        .with_inspector(SkuFamilyInspector::new("westus3"));

    let code = runner.run_tool(&settings(&["sub-1", "sub-2"]));

    assert_eq!(code, EXIT_OK);
    assert_eq!(log.count(Severity::Error), 2);
    assert!(log.contains("Available=5"));
    assert!(log.contains("All subscriptions processed: 2 inspected, 0 skipped"));
}

#[test]
fn test_provider_tool() {
    let api = MockAzure::new().with_subscription(
        "sub-1",
        MockSubscription::new("one")
            .with_provider("Microsoft.Compute", Some("Registered"))
            .with_provider("Microsoft.Network", Some("NotRegistered"))
            .with_provider("Microsoft.Storage", Some("Registered"))
            .with_feature("Microsoft.Compute", "EncryptionAtHost", Some("Registered")),
    );
    let log = Logger::capture();
    let providers: Vec<String> = ["Microsoft.Compute", "Microsoft.Network", "Microsoft.Storage"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let runner = Runner::new(&api, &log).with_inspector(ProviderInspector::new(&providers));

    assert_eq!(runner.run_tool(&settings(&["sub-1"])), EXIT_OK);

    let lines: Vec<String> = log.lines().into_iter().map(|(_, l)| l).collect();
    let position = |needle: &str| {
        lines
            .iter()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("missing line: {needle}"))
    };
    let compute = position("Resource provider 'Microsoft.Compute' is registered");
    let feature = position("Feature 'EncryptionAtHost' under 'Microsoft.Compute' is registered");
    let network = position("[Warning] Resource provider 'Microsoft.Network' is NOT registered (state: NotRegistered)");
    let storage = position("Resource provider 'Microsoft.Storage' is registered");
    assert!(compute < feature && feature < network && network < storage);
    assert_eq!(api.calls().iter().filter(|c| c.starts_with("feature")).count(), 1);
}

#[test]
fn test_missing_cli_exits_before_login() {
    let api = MockAzure::new().without_cli();
    let log = Logger::capture();
    let runner = Runner::new(&api, &log).with_inspector(QuotaInspector::new("westus3", false));

    assert_eq!(runner.run_tool(&settings(&["sub-1"])), EXIT_FATAL);
    assert_eq!(api.calls(), vec!["version".to_string()]);
    assert!(log.contains("[Error] Azure CLI is not available"));
}

#[test]
fn test_interactive_login_then_run() {
    let api = MockAzure::new()
        .logged_out()
        .with_subscription("sub-1", MockSubscription::new("one").with_cores(1, 4));
    let log = Logger::capture();
    let runner = Runner::new(&api, &log).with_inspector(QuotaInspector::new("westus3", false));

    assert_eq!(runner.run_tool(&settings(&["sub-1"])), EXIT_OK);
    assert!(api.called("login"));
    assert!(log.contains("Available=3"));
}

#[test]
fn test_quota_reads_fixture_directly() {
    let usage: Vec<UsageEntry> = fixture("vm_list_usage_westus3.json");
    let api = MockAzure::new().with_subscription("s", MockSubscription::new("s").with_usage(usage));
    let ctx = SubscriptionContext {
        subscription_id: "s".to_string(),
        name: "s".to_string(),
        tenant_id: "t".to_string(),
    };
    let log = Logger::capture();
    let report = get_vcpu_quota(&api, &ctx, "westus3", false, &log).expect("cores entry in fixture");
    assert_eq!((report.current, report.limit, report.available), (5, 20, 15));
}
