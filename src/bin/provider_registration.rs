use azure_quota_check::azure::AzCli;
use azure_quota_check::cli::ProviderCli;
use azure_quota_check::inspect::ProviderInspector;
use azure_quota_check::{init_logging, Logger, Runner};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = ProviderCli::parse();
    args.common.apply_color();
    if let Err(e) = init_logging(&args.common.log_config) {
        eprintln!("{e}");
    }
    log::info!("#Start provider-registration providers={:?}", args.providers);

    let api = AzCli;
    let log = Logger::stdout();
    let runner = Runner::new(&api, &log).with_inspector(ProviderInspector::new(&args.providers));

    ExitCode::from(runner.run_tool(&args.common.settings()))
}
