//! In-memory [`AzureApi`] for tests.
//!
//! Subscriptions are scripted up front; unknown subscription IDs fail the
//! way `az account show --subscription` does for an inaccessible ID.

use crate::azure::{AzError, AzResult, AzureApi};
use crate::models::{
    Account, AccountUser, AzVersionInfo, Count, FeatureProperties, FeatureRegistration,
    ProviderRegistration, Sku, SubscriptionContext, UsageEntry, UsageName,
};
use std::cell::RefCell;
use std::collections::HashMap;

fn failure(message: &str) -> AzError {
    AzError::CommandFailure {
        code: Some(1),
        stderr: message.to_string(),
    }
}

/// Build a usage entry the way `az vm list-usage` reports it.
pub fn usage_entry(name: &str, current: i64, limit: i64) -> UsageEntry {
    UsageEntry {
        name: UsageName {
            value: name.to_string(),
            localized_value: Some(name.to_string()),
        },
        current_value: Count::Text(current.to_string()),
        limit: Count::Text(limit.to_string()),
        local_name: None,
    }
}

fn account(id: &str, name: &str) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        tenant_id: "tenant-0".to_string(),
        state: Some("Enabled".to_string()),
        is_default: false,
        user: Some(AccountUser {
            name: "ops@example.com".to_string(),
            kind: Some("user".to_string()),
        }),
    }
}

/// Scripted responses of one subscription.
#[derive(Debug, Clone)]
pub struct MockSubscription {
    name: String,
    state: String,
    usage: Result<Vec<UsageEntry>, String>,
    skus: Result<Vec<Sku>, String>,
    providers: HashMap<String, Result<Option<String>, String>>,
    features: HashMap<(String, String), Result<Option<String>, String>>,
}

impl MockSubscription {
    pub fn new(name: &str) -> MockSubscription {
        MockSubscription {
            name: name.to_string(),
            state: "Enabled".to_string(),
            usage: Ok(Vec::new()),
            skus: Ok(Vec::new()),
            providers: HashMap::new(),
            features: HashMap::new(),
        }
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    pub fn with_usage(mut self, entries: Vec<UsageEntry>) -> Self {
        self.usage = Ok(entries);
        self
    }

    /// Shortcut for a region with a single `cores` entry.
    pub fn with_cores(self, current: i64, limit: i64) -> Self {
        self.with_usage(vec![usage_entry("cores", current, limit)])
    }

    pub fn usage_error(mut self, message: &str) -> Self {
        self.usage = Err(message.to_string());
        self
    }

    pub fn with_skus(mut self, skus: Vec<Sku>) -> Self {
        self.skus = Ok(skus);
        self
    }

    pub fn sku_error(mut self, message: &str) -> Self {
        self.skus = Err(message.to_string());
        self
    }

    /// Provider with the given state; `None` means the field is missing.
    pub fn with_provider(mut self, namespace: &str, state: Option<&str>) -> Self {
        self.providers
            .insert(namespace.to_string(), Ok(state.map(String::from)));
        self
    }

    pub fn provider_error(mut self, namespace: &str, message: &str) -> Self {
        self.providers
            .insert(namespace.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_feature(mut self, namespace: &str, feature: &str, state: Option<&str>) -> Self {
        self.features.insert(
            (namespace.to_string(), feature.to_string()),
            Ok(state.map(String::from)),
        );
        self
    }

    pub fn feature_error(mut self, namespace: &str, feature: &str, message: &str) -> Self {
        self.features.insert(
            (namespace.to_string(), feature.to_string()),
            Err(message.to_string()),
        );
        self
    }
}

/// Scripted [`AzureApi`] that records every call.
#[derive(Debug)]
pub struct MockAzure {
    version: Option<AzVersionInfo>,
    session: Option<Account>,
    login_ok: bool,
    subscriptions: HashMap<String, MockSubscription>,
    calls: RefCell<Vec<String>>,
}

impl Default for MockAzure {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAzure {
    /// CLI 2.61.0 with `azure-cli-core`, signed in to `default-sub`.
    pub fn new() -> MockAzure {
        let mut version = AzVersionInfo {
            cli: "2.61.0".to_string(),
            ..Default::default()
        };
        version.components.insert(
            "azure-cli-core".to_string(),
            serde_json::Value::String("2.61.0".to_string()),
        );
        MockAzure {
            version: Some(version),
            session: Some(account("default-sub", "default")),
            login_ok: true,
            subscriptions: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without_cli(mut self) -> Self {
        self.version = None;
        self
    }

    pub fn with_version(mut self, version: AzVersionInfo) -> Self {
        self.version = Some(version);
        self
    }

    pub fn logged_out(mut self) -> Self {
        self.session = None;
        self
    }

    pub fn login_fails(mut self) -> Self {
        self.login_ok = false;
        self
    }

    pub fn with_subscription(mut self, id: &str, subscription: MockSubscription) -> Self {
        self.subscriptions.insert(id.to_string(), subscription);
        self
    }

    /// Every call so far, e.g. `usage sub-1 westus3`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// True if any call starts with `prefix`.
    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn sub(&self, ctx: &SubscriptionContext) -> AzResult<&MockSubscription> {
        self.subscriptions
            .get(&ctx.subscription_id)
            .ok_or_else(|| failure(&format!("Subscription '{}' not found", ctx.subscription_id)))
    }
}

impl AzureApi for MockAzure {
    fn cli_version(&self) -> AzResult<AzVersionInfo> {
        self.record("version".to_string());
        self.version.clone().ok_or(AzError::AzNotInstalled)
    }

    fn current_account(&self) -> AzResult<Option<Account>> {
        self.record("account show".to_string());
        Ok(self.session.clone())
    }

    fn login(&self) -> AzResult<Account> {
        self.record("login".to_string());
        if self.login_ok {
            Ok(account("default-sub", "default"))
        } else {
            Err(failure("AADSTS50126: Invalid username or password."))
        }
    }

    fn subscription(&self, subscription_id: &str) -> AzResult<Account> {
        self.record(format!("subscription {subscription_id}"));
        let sub = self.subscriptions.get(subscription_id).ok_or_else(|| {
            failure(&format!(
                "Subscription '{subscription_id}' not found. Check the spelling and casing and try again."
            ))
        })?;
        let mut acc = account(subscription_id, &sub.name);
        acc.state = Some(sub.state.clone());
        Ok(acc)
    }

    fn list_usage(&self, ctx: &SubscriptionContext, region: &str) -> AzResult<Vec<UsageEntry>> {
        self.record(format!("usage {} {region}", ctx.subscription_id));
        self.sub(ctx)?.usage.clone().map_err(|e| failure(&e))
    }

    fn list_skus(&self, ctx: &SubscriptionContext, region: &str) -> AzResult<Vec<Sku>> {
        self.record(format!("skus {} {region}", ctx.subscription_id));
        self.sub(ctx)?.skus.clone().map_err(|e| failure(&e))
    }

    fn provider(
        &self,
        ctx: &SubscriptionContext,
        namespace: &str,
    ) -> AzResult<ProviderRegistration> {
        self.record(format!("provider {} {namespace}", ctx.subscription_id));
        let state = match self.sub(ctx)?.providers.get(namespace) {
            Some(Ok(state)) => state.clone(),
            Some(Err(e)) => return Err(failure(e)),
            None => {
                return Err(failure(&format!(
                    "The resource provider '{namespace}' was not found"
                )))
            }
        };
        Ok(ProviderRegistration {
            namespace: namespace.to_string(),
            registration_state: state,
        })
    }

    fn feature(
        &self,
        ctx: &SubscriptionContext,
        namespace: &str,
        feature: &str,
    ) -> AzResult<FeatureRegistration> {
        self.record(format!("feature {} {namespace}/{feature}", ctx.subscription_id));
        let key = (namespace.to_string(), feature.to_string());
        let state = match self.sub(ctx)?.features.get(&key) {
            Some(Ok(state)) => state.clone(),
            Some(Err(e)) => return Err(failure(e)),
            None => {
                return Err(failure(&format!(
                    "The feature '{feature}' could not be found"
                )))
            }
        };
        Ok(FeatureRegistration {
            name: format!("{namespace}/{feature}"),
            properties: Some(FeatureProperties { state }),
        })
    }
}
