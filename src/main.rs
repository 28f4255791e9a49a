use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod app;
mod config;

use app::Application;
use config::Args;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    // Run the application
    match run_app(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Printed on stderr regardless of the log filter
fn failure_message(e: &anyhow::Error) -> String {
    format!("Error: {:#}", e)
}

/// Filter used when RUST_LOG is unset. Targets match by prefix, so
/// `kubefind` covers every `kubefind_*` workspace crate.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "info,kubefind=debug" } else { "info" }
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run_app(args: Args) -> Result<()> {
    let settings = args.validate()?;

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            interrupt.cancel();
        }
    });

    let app = Application::connect(settings).await?;
    app.run(&cancel).await?;

    Ok(())
}
