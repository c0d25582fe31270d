//! Sequential per-subscription orchestration shared by both tools.
//!
//! A tool is a [`Runner`] plus the [`Inspector`]s it was built with:
//! validate environment, ensure session, then for each subscription set a
//! context and run every inspector against it.

use crate::azure::AzureApi;
use crate::logger::Logger;
use crate::models::SubscriptionContext;
use crate::preflight::{validate_environment, Requirements};
use crate::session::{ensure_session, set_subscription_context};

/// Exit code after a completed run, whatever the per-subscription outcome.
pub const EXIT_OK: u8 = 0;
/// Exit code for unmet preconditions or a failed login.
pub const EXIT_FATAL: u8 = 1;

/// One query run against every subscription.
///
/// Implementations log their own results and errors; nothing an inspector
/// does can stop the run.
pub trait Inspector {
    fn name(&self) -> &str;
    fn inspect(&self, api: &dyn AzureApi, ctx: &SubscriptionContext, log: &Logger);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Inspected(String),
    /// Context could not be set.
    Skipped(String),
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<SubscriptionOutcome>,
}

impl RunSummary {
    pub fn inspected(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SubscriptionOutcome::Inspected(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.inspected()
    }
}

/// Everything a tool needs beyond its inspectors.
#[derive(Debug, Clone, Default)]
pub struct ToolSettings {
    pub requirements: Requirements,
    /// Processed in order. Empty means the session's current subscription.
    pub subscriptions: Vec<String>,
}

pub struct Runner<'a> {
    api: &'a dyn AzureApi,
    log: &'a Logger,
    inspectors: Vec<Box<dyn Inspector + 'a>>,
}

impl<'a> Runner<'a> {
    pub fn new(api: &'a dyn AzureApi, log: &'a Logger) -> Runner<'a> {
        Runner {
            api,
            log,
            inspectors: Vec::new(),
        }
    }

    /// Append an inspector; inspectors run in the order they were added.
    pub fn with_inspector(mut self, inspector: impl Inspector + 'a) -> Self {
        self.inspectors.push(Box::new(inspector));
        self
    }

    /// Run every inspector against every subscription, in order.
    ///
    /// A subscription whose context can not be set is skipped.
    pub fn run(&self, subscriptions: &[String]) -> RunSummary {
        let started = chrono::Local::now();
        log::info!(
            "#Start run() {} subscriptions, {} inspectors",
            subscriptions.len(),
            self.inspectors.len()
        );
        let mut summary = RunSummary::default();

        for subscription_id in subscriptions {
            self.log
                .info(&format!("===== Subscription: {subscription_id} ====="));

            let Some(ctx) = set_subscription_context(self.api, subscription_id, self.log) else {
                self.log.warning(&format!(
                    "Skipping subscription {subscription_id}, continuing with the next one"
                ));
                summary
                    .outcomes
                    .push(SubscriptionOutcome::Skipped(subscription_id.clone()));
                continue;
            };

            for inspector in &self.inspectors {
                log::debug!("inspector '{}' on {}", inspector.name(), ctx.subscription_id);
                inspector.inspect(self.api, &ctx, self.log);
            }

            self.log
                .info(&format!("===== Finished subscription: {subscription_id} ====="));
            summary
                .outcomes
                .push(SubscriptionOutcome::Inspected(subscription_id.clone()));
        }

        let elapsed = chrono::Local::now() - started;
        self.log.info(&format!(
            "All subscriptions processed: {} inspected, {} skipped ({:.1}s)",
            summary.inspected(),
            summary.skipped(),
            elapsed.num_milliseconds() as f64 / 1000.0
        ));
        summary
    }

    /// Validate, sign in and run. Returns the process exit code.
    pub fn run_tool(&self, settings: &ToolSettings) -> u8 {
        if let Err(e) = validate_environment(self.api, &settings.requirements, self.log) {
            self.log.error(&e.to_string());
            return EXIT_FATAL;
        }

        let account = match ensure_session(self.api, self.log) {
            Ok(account) => account,
            Err(e) => {
                self.log.error(&format!("Azure login failed: {e}"));
                return EXIT_FATAL;
            }
        };

        let subscriptions = if settings.subscriptions.is_empty() {
            self.log.warning(&format!(
                "No subscriptions given, using current subscription {} ({})",
                account.name, account.id
            ));
            vec![account.id]
        } else {
            settings.subscriptions.clone()
        };

        self.run(&subscriptions);
        EXIT_OK
    }
}
