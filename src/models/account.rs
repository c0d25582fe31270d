//! Azure account and subscription context models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account record as returned by `az account show`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Subscription ID.
    pub id: String,
    /// Subscription display name.
    pub name: String,
    /// Tenant the subscription belongs to.
    pub tenant_id: String,
    /// Subscription state, e.g. `Enabled`.
    #[serde(default)]
    pub state: Option<String>,
    /// Whether this is the CLI default subscription.
    #[serde(default)]
    pub is_default: bool,
    /// Signed in principal.
    #[serde(default)]
    pub user: Option<AccountUser>,
}

/// Principal signed in to the Azure CLI.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountUser {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Account {
    /// Name of the signed in principal, or `unknown`.
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("unknown")
    }
}

/// Handle for one subscription, passed to every per-subscription query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionContext {
    pub subscription_id: String,
    pub name: String,
    pub tenant_id: String,
}

impl From<Account> for SubscriptionContext {
    fn from(account: Account) -> Self {
        SubscriptionContext {
            subscription_id: account.id,
            name: account.name,
            tenant_id: account.tenant_id,
        }
    }
}

impl fmt::Display for SubscriptionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.subscription_id)
    }
}
