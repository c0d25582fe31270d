//! Azure session and subscription context handling.

use crate::azure::{AzResult, AzureApi};
use crate::logger::Logger;
use crate::models::{Account, SubscriptionContext};

/// Reuse the current `az` session, or sign in interactively.
///
/// Login errors are returned unchanged; the caller treats them as fatal.
pub fn ensure_session(api: &dyn AzureApi, log: &Logger) -> AzResult<Account> {
    if let Some(account) = api.current_account()? {
        log.info(&format!(
            "Using existing Azure session for {} (default subscription {})",
            account.user_name(),
            account.name
        ));
        return Ok(account);
    }

    log.warning("No active Azure session found, starting az login");
    let account = api.login()?;
    log.info(&format!(
        "Logged in as {} (default subscription {})",
        account.user_name(),
        account.name
    ));
    Ok(account)
}

/// Resolve a subscription ID into a context handle.
///
/// Failures are logged and mapped to `None` so the caller can skip the
/// subscription and carry on with the next one.
pub fn set_subscription_context(
    api: &dyn AzureApi,
    subscription_id: &str,
    log: &Logger,
) -> Option<SubscriptionContext> {
    match api.subscription(subscription_id) {
        Ok(account) => {
            if let Some(state) = account.state.as_deref().filter(|s| *s != "Enabled") {
                log.warning(&format!(
                    "Subscription {} is in state '{state}', results may be incomplete",
                    account.name
                ));
            }
            let ctx = SubscriptionContext::from(account);
            log.info(&format!("Subscription context set to {ctx}"));
            Some(ctx)
        }
        Err(e) => {
            log.error(&format!(
                "Failed to set subscription context {subscription_id}: {e}"
            ));
            None
        }
    }
}
