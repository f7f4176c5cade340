//! ACME DNS-01 hook for Active24
//!
//! Presents or cleans up a single challenge TXT record and exits. The outcome is
//! printed to stdout as JSON, logs go to stderr.

mod adapters;
mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use adapters::FileCredentialStore;
use cli::{Command, USAGE};
use dns01_active24_core::ChallengeSolver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs to stderr (stdout carries the outcome)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let challenge = cli::read_challenge(&command.input).await?;

    let store = FileCredentialStore::from_env();
    tracing::debug!("Reading secrets from {}", store.root().display());

    let solver = ChallengeSolver::new();
    solver.initialize(Arc::new(store)).await;

    tracing::info!(
        solver = solver.name(),
        fqdn = %challenge.resolved_fqdn,
        "Running {}",
        command.action
    );
    let outcome = solver.solve(command.action, &challenge).await?;

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
