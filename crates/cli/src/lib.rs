//! Ballot CLI Library
//!
//! This crate provides the command-line interface for the voting token and
//! tokenized ballot contracts: argument loading, the confirmation gate and
//! one module per command.

pub mod args;
pub mod commands;
pub mod config;
pub mod console;

use ballot_config::ConfigError;
use ballot_rpc_client::{ContractError, RpcException};
use std::io::Write;
use thiserror::Error;

pub use commands::{CommandContext, Outcome};
pub use console::{Console, Prompt};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Rpc(#[from] RpcException),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The endpoint serves another chain than the one transactions are signed for
    #[error("endpoint serves chain {actual} but chain {expected} is configured")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("unexpected result from {function}: {message}")]
    UnexpectedResult { function: String, message: String },
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Resolves settings, builds the client pair and runs the selected command.
pub async fn run<P: Prompt, W: Write>(
    args: &args::CliArgs,
    console: &mut Console<P, W>,
) -> Result<Outcome> {
    let settings = config::resolve_settings(args)?;
    let context = CommandContext::new(settings)?;
    commands::execute(&args.command, &context, console).await
}
