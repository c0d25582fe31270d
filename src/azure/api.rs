//! Read-only Azure management queries.
//!
//! [`AzureApi`] is the seam between the tools and Azure. [`AzCli`] implements
//! it with the Azure CLI. Every per-subscription query takes an explicit
//! [`SubscriptionContext`] and passes `--subscription`, so the CLI default
//! subscription is never switched.

use super::cli;
use super::error::{AzError, AzResult};
use crate::models::{
    Account, AzVersionInfo, FeatureRegistration, ProviderRegistration, Sku, SubscriptionContext,
    UsageEntry,
};

pub trait AzureApi {
    /// Installed CLI version and components.
    fn cli_version(&self) -> AzResult<AzVersionInfo>;

    /// The signed in account, `None` when there is no session.
    fn current_account(&self) -> AzResult<Option<Account>>;

    /// Sign in interactively and return the new default account.
    fn login(&self) -> AzResult<Account>;

    /// Look up a subscription the signed in principal can access.
    fn subscription(&self, subscription_id: &str) -> AzResult<Account>;

    /// Compute usage entries of a region.
    fn list_usage(&self, ctx: &SubscriptionContext, region: &str) -> AzResult<Vec<UsageEntry>>;

    /// VM SKUs offered in a region.
    fn list_skus(&self, ctx: &SubscriptionContext, region: &str) -> AzResult<Vec<Sku>>;

    fn provider(&self, ctx: &SubscriptionContext, namespace: &str)
        -> AzResult<ProviderRegistration>;

    fn feature(
        &self,
        ctx: &SubscriptionContext,
        namespace: &str,
        feature: &str,
    ) -> AzResult<FeatureRegistration>;
}

/// [`AzureApi`] backed by the `az` executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct AzCli;

impl AzureApi for AzCli {
    fn cli_version(&self) -> AzResult<AzVersionInfo> {
        cli::az(&["version", "-o", "json"])
    }

    fn current_account(&self) -> AzResult<Option<Account>> {
        let output = cli::output(&["account", "show", "-o", "json"])?;
        if !output.status.success() {
            log::debug!(
                "No active az session: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }
        cli::parse_json(&output.stdout).map(Some)
    }

    fn login(&self) -> AzResult<Account> {
        cli::run_interactive(&["login", "-o", "none"])?;
        self.current_account()?.ok_or(AzError::NotLoggedIn)
    }

    fn subscription(&self, subscription_id: &str) -> AzResult<Account> {
        cli::az(&[
            "account",
            "show",
            "--subscription",
            subscription_id,
            "-o",
            "json",
        ])
    }

    fn list_usage(&self, ctx: &SubscriptionContext, region: &str) -> AzResult<Vec<UsageEntry>> {
        cli::az(&[
            "vm",
            "list-usage",
            "--location",
            region,
            "--subscription",
            ctx.subscription_id.as_str(),
            "-o",
            "json",
        ])
    }

    fn list_skus(&self, ctx: &SubscriptionContext, region: &str) -> AzResult<Vec<Sku>> {
        cli::az(&[
            "vm",
            "list-skus",
            "--location",
            region,
            "--resource-type",
            crate::config::VM_RESOURCE_TYPE,
            "--all",
            "--subscription",
            ctx.subscription_id.as_str(),
            "-o",
            "json",
        ])
    }

    fn provider(
        &self,
        ctx: &SubscriptionContext,
        namespace: &str,
    ) -> AzResult<ProviderRegistration> {
        cli::az(&[
            "provider",
            "show",
            "--namespace",
            namespace,
            "--subscription",
            ctx.subscription_id.as_str(),
            "-o",
            "json",
        ])
    }

    fn feature(
        &self,
        ctx: &SubscriptionContext,
        namespace: &str,
        feature: &str,
    ) -> AzResult<FeatureRegistration> {
        cli::az(&[
            "feature",
            "show",
            "--namespace",
            namespace,
            "--name",
            feature,
            "--subscription",
            ctx.subscription_id.as_str(),
            "-o",
            "json",
        ])
    }
}
