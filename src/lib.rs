//! Read-only Azure subscription checks.
//!
//! Two tools share one orchestration core:
//! - `vcpu-quota` - regional vCPU quota and VM size family availability
//! - `provider-registration` - resource provider and feature registration
//!
//! All Azure access goes through the `az` CLI ([`azure::AzCli`]).

pub mod azure;
pub mod cli;
pub mod config;
pub mod inspect;
pub mod logger;
mod logging;
pub mod models;
pub mod preflight;
pub mod runner;
pub mod session;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use logger::{Logger, Severity};
pub use logging::init_logging;
pub use runner::{Inspector, RunSummary, Runner, SubscriptionOutcome, ToolSettings};
