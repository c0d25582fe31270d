//! Command line arguments of both tools.
//!
//! Options backed by environment variables can also be set in a `.env` file.

use crate::config;
use crate::runner::ToolSettings;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Subscription IDs to inspect, in order (comma separated or repeated).
    /// Defaults to the current az subscription.
    #[arg(short = 's', long = "subscription", value_delimiter = ',', env = "AZURE_SUBSCRIPTIONS")]
    pub subscriptions: Vec<String>,

    /// log4rs configuration file for diagnostic logs.
    #[arg(long, default_value = config::DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl CommonArgs {
    pub fn settings(&self) -> ToolSettings {
        ToolSettings {
            subscriptions: self
                .subscriptions
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            ..Default::default()
        }
    }

    pub fn apply_color(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }
}

/// Report regional vCPU quota and VM size family availability.
#[derive(Parser, Debug)]
#[command(name = "vcpu-quota", version)]
pub struct QuotaCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Region to query.
    #[arg(short, long, env = "AZURE_REGION", default_value = config::DEFAULT_REGION)]
    pub region: String,

    /// List every quota entry of the region, not only vCPUs.
    #[arg(short, long)]
    pub detailed: bool,
}

/// Report resource provider and feature registration state.
#[derive(Parser, Debug)]
#[command(name = "provider-registration", version)]
pub struct ProviderCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Resource provider namespaces to check (comma separated or repeated).
    #[arg(short = 'p', long = "provider", value_delimiter = ',', default_values = config::DEFAULT_PROVIDERS)]
    pub providers: Vec<String>,
}
