//! package-updater - npm dependency upgrade CLI tool
//!
//! Reports dependencies in package.json whose latest published version
//! falls outside the declaration, and rewrites the declarations while
//! keeping their versioning policy (`~`, `^`, `1.2.x`, ...).

use clap::Parser;
use package_updater::cli::CliArgs;
use package_updater::orchestrator::Orchestrator;
use package_updater::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the level chosen by --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        scope = %args.scope(),
        upgrade = args.upgrade,
        registry = %args.registry,
        "Starting package-updater"
    );

    // Create and run the orchestrator
    let orchestrator = Orchestrator::new(args.clone())?;
    let report = orchestrator.run().await?;

    // Output results
    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.silent, args.upgrade));
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
