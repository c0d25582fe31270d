use azure_quota_check::azure::AzCli;
use azure_quota_check::cli::QuotaCli;
use azure_quota_check::inspect::{QuotaInspector, SkuFamilyInspector};
use azure_quota_check::{init_logging, Logger, Runner};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = QuotaCli::parse();
    args.common.apply_color();
    if let Err(e) = init_logging(&args.common.log_config) {
        eprintln!("{e}");
    }
    log::info!("#Start vcpu-quota region={}", args.region);

    let api = AzCli;
    let log = Logger::stdout();
    let runner = Runner::new(&api, &log)
        .with_inspector(QuotaInspector::new(&args.region, args.detailed))
        .with_inspector(SkuFamilyInspector::new(&args.region));

    ExitCode::from(runner.run_tool(&args.common.settings()))
}
