//! Resource provider and feature registration.

use crate::azure::AzureApi;
use crate::config;
use crate::logger::Logger;
use crate::models::{is_registered, state_display, SubscriptionContext};
use crate::runner::Inspector;

/// Outcome of one registration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationStatus {
    Registered,
    /// Any other state, with the state as displayed.
    NotRegistered(String),
    /// The lookup failed, with the error text.
    Failed(String),
}

/// Result of checking one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCheck {
    pub namespace: String,
    pub status: RegistrationStatus,
    /// Set only for the compute namespace.
    pub feature: Option<RegistrationStatus>,
}

fn registration_status(state: Option<&str>) -> RegistrationStatus {
    if is_registered(state) {
        RegistrationStatus::Registered
    } else {
        RegistrationStatus::NotRegistered(state_display(state).to_string())
    }
}

fn check_namespace(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    namespace: &str,
    log: &Logger,
) -> RegistrationStatus {
    match api.provider(ctx, namespace) {
        Ok(registration) => {
            let status = registration_status(registration.state());
            match &status {
                RegistrationStatus::Registered => {
                    log.info(&format!("Resource provider '{namespace}' is registered"))
                }
                RegistrationStatus::NotRegistered(state) => log.warning(&format!(
                    "Resource provider '{namespace}' is NOT registered (state: {state})"
                )),
                RegistrationStatus::Failed(_) => {}
            }
            status
        }
        Err(e) => {
            log.error(&format!(
                "Failed to get registration state of resource provider '{namespace}': {e}"
            ));
            RegistrationStatus::Failed(e.to_string())
        }
    }
}

/// Check a feature flag under a provider namespace.
pub fn check_feature(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    namespace: &str,
    feature: &str,
    log: &Logger,
) -> RegistrationStatus {
    match api.feature(ctx, namespace, feature) {
        Ok(registration) => {
            let status = registration_status(registration.state());
            match &status {
                RegistrationStatus::Registered => log.info(&format!(
                    "Feature '{feature}' under '{namespace}' is registered"
                )),
                RegistrationStatus::NotRegistered(state) => log.warning(&format!(
                    "Feature '{feature}' under '{namespace}' is NOT registered (state: {state})"
                )),
                RegistrationStatus::Failed(_) => {}
            }
            status
        }
        Err(e) => {
            log.error(&format!(
                "Failed to get registration state of feature '{feature}' under '{namespace}': {e}"
            ));
            RegistrationStatus::Failed(e.to_string())
        }
    }
}

/// Check one namespace; the compute namespace also gets its feature check.
pub fn check_provider(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    namespace: &str,
    log: &Logger,
) -> ProviderCheck {
    let status = check_namespace(api, ctx, namespace, log);
    let feature = (namespace == config::COMPUTE_NAMESPACE)
        .then(|| check_feature(api, ctx, namespace, config::COMPUTE_FEATURE, log));
    ProviderCheck {
        namespace: namespace.to_string(),
        status,
        feature,
    }
}

/// Check every namespace in order. Failures never stop the loop.
pub fn check_providers(
    api: &dyn AzureApi,
    ctx: &SubscriptionContext,
    namespaces: &[String],
    log: &Logger,
) -> Vec<ProviderCheck> {
    namespaces
        .iter()
        .map(|ns| check_provider(api, ctx, ns, log))
        .collect()
}

/// Reports registration state of a list of resource providers.
pub struct ProviderInspector {
    namespaces: Vec<String>,
}

impl ProviderInspector {
    pub fn new(namespaces: &[String]) -> ProviderInspector {
        ProviderInspector {
            namespaces: namespaces.to_vec(),
        }
    }
}

impl Inspector for ProviderInspector {
    fn name(&self) -> &str {
        "resource providers"
    }

    fn inspect(&self, api: &dyn AzureApi, ctx: &SubscriptionContext, log: &Logger) {
        let checks = check_providers(api, ctx, &self.namespaces, log);
        let registered = checks
            .iter()
            .filter(|c| c.status == RegistrationStatus::Registered)
            .count();
        log::debug!(
            "{registered}/{} providers registered in {}",
            checks.len(),
            ctx.subscription_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Severity;
    use crate::testing::{MockAzure, MockSubscription};

    const FEATURE: &str = config::COMPUTE_FEATURE;

    fn ctx() -> SubscriptionContext {
        SubscriptionContext {
            subscription_id: "s".to_string(),
            name: "s".to_string(),
            tenant_id: "t".to_string(),
        }
    }

    fn namespaces(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registered_is_info() {
        let api = MockAzure::new().with_subscription(
            "s",
            MockSubscription::new("s").with_provider("Microsoft.Network", Some("Registered")),
        );
        let log = Logger::capture();
        let check = check_provider(&api, &ctx(), "Microsoft.Network", &log);
        assert_eq!(check.status, RegistrationStatus::Registered);
        assert_eq!(check.feature, None);
        assert_eq!(
            log.lines(),
            vec![(
                Severity::Info,
                "[Info] Resource provider 'Microsoft.Network' is registered".to_string()
            )]
        );
    }

    #[test]
    fn test_other_states_are_warnings() {
        for (state, shown) in [
            (Some("NotRegistered"), "NotRegistered"),
            (Some("Registering"), "Registering"),
            (Some("registered"), "registered"),
            (Some(""), "<none>"),
            (None, "<none>"),
        ] {
            let api = MockAzure::new().with_subscription(
                "s",
                MockSubscription::new("s").with_provider("Microsoft.Storage", state),
            );
            let log = Logger::capture();
            let check = check_provider(&api, &ctx(), "Microsoft.Storage", &log);
            assert_eq!(
                check.status,
                RegistrationStatus::NotRegistered(shown.to_string())
            );
            assert_eq!(log.count(Severity::Warning), 1, "state={state:?}");
            assert!(log.contains("is NOT registered"));
        }
    }

    #[test]
    fn test_feature_checked_only_for_compute() {
        let api = MockAzure::new().with_subscription(
            "s",
            MockSubscription::new("s")
                .with_provider("Microsoft.Compute", Some("Registered"))
                .with_provider("Microsoft.Network", Some("Registered"))
                .with_provider("microsoft.compute", Some("Registered"))
                .with_feature("Microsoft.Compute", FEATURE, Some("Registered")),
        );
        let log = Logger::capture();
        let checks = check_providers(
            &api,
            &ctx(),
            &namespaces(&["Microsoft.Network", "microsoft.compute", "Microsoft.Compute"]),
            &log,
        );
        assert_eq!(checks[0].feature, None);
        assert_eq!(checks[1].feature, None);
        assert_eq!(checks[2].feature, Some(RegistrationStatus::Registered));
        let feature_calls: Vec<String> = api
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("feature"))
            .collect();
        assert_eq!(feature_calls, vec![format!("feature s Microsoft.Compute/{FEATURE}")]);
    }

    #[test]
    fn test_feature_checked_even_if_namespace_fails() {
        let api = MockAzure::new().with_subscription(
            "s",
            MockSubscription::new("s")
                .provider_error("Microsoft.Compute", "AuthorizationFailed")
                .with_feature("Microsoft.Compute", FEATURE, Some("Pending")),
        );
        let log = Logger::capture();
        let check = check_provider(&api, &ctx(), "Microsoft.Compute", &log);
        assert!(matches!(check.status, RegistrationStatus::Failed(ref e) if e.contains("AuthorizationFailed")));
        assert_eq!(
            check.feature,
            Some(RegistrationStatus::NotRegistered("Pending".to_string()))
        );
        assert_eq!(log.count(Severity::Error), 1);
        assert!(log.contains(&format!(
            "[Warning] Feature '{FEATURE}' under 'Microsoft.Compute' is NOT registered (state: Pending)"
        )));
    }

    #[test]
    fn test_feature_failure_is_independent() {
        let api = MockAzure::new().with_subscription(
            "s",
            MockSubscription::new("s")
                .with_provider("Microsoft.Compute", Some("Registered"))
                .feature_error("Microsoft.Compute", FEATURE, "FeatureNotFound"),
        );
        let log = Logger::capture();
        let check = check_provider(&api, &ctx(), "Microsoft.Compute", &log);
        assert_eq!(check.status, RegistrationStatus::Registered);
        assert!(matches!(check.feature, Some(RegistrationStatus::Failed(_))));
        assert_eq!(log.count(Severity::Info), 1);
        assert_eq!(log.count(Severity::Error), 1);
    }

    #[test]
    fn test_failure_does_not_stop_loop() {
        let api = MockAzure::new().with_subscription(
            "s",
            MockSubscription::new("s")
                .provider_error("Microsoft.Network", "throttled")
                .with_provider("Microsoft.Storage", Some("Registered")),
        );
        let log = Logger::capture();
        ProviderInspector::new(&namespaces(&["Microsoft.Network", "Microsoft.Storage"]))
            .inspect(&api, &ctx(), &log);
        assert_eq!(log.count(Severity::Error), 1);
        assert!(log.contains("[Info] Resource provider 'Microsoft.Storage' is registered"));
    }
}
