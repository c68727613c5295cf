//! ecsmap binary entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ecsmap_cli::aws::{Ec2NetworkApi, EcsContainerApi};
use ecsmap_cli::cli::{Cli, Format};
use ecsmap_cli::error::CliError;
use ecsmap_core::TopologyWalker;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = cli.region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    if let Some(profile) = &cli.profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;

    let walker = TopologyWalker::new(
        EcsContainerApi::from_config(&config),
        Ec2NetworkApi::from_config(&config),
    );

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Text => {
            let report = walker.produce_report().await?;
            for line in report.lines() {
                writeln!(stdout, "{line}")?;
            }
        }
        Format::Json => {
            let snapshot = walker.snapshot().await?;
            serde_json::to_writer_pretty(&mut stdout, &snapshot)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
