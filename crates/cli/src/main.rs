use anyhow::Result;
use ballot_cli::args::{CliArgs, LogLevel};
use ballot_cli::{Console, Outcome};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_level);

    let mut console = Console::stdio().assume_yes(args.yes);
    match ballot_cli::run(&args, &mut console).await {
        Ok(Outcome::Completed) => {
            info!(target: "ballot", "command completed");
            Ok(())
        }
        Ok(Outcome::Cancelled) => {
            info!(target: "ballot", "command cancelled, nothing submitted");
            Ok(())
        }
        Err(err) => {
            error!(target: "ballot", error = %err, "command failed");
            Err(err.into())
        }
    }
}

/// Diagnostics go to stderr; stdout carries the command output only.
fn init_tracing(level: Option<LogLevel>) {
    let env_filter = match level {
        Some(level) => EnvFilter::new(level.as_directive()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,ballot=info")),
    };
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
