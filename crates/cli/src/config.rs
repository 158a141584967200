//! Settings resolution for the CLI
//!
//! Precedence, highest first: command-line flags and their environment
//! bindings, the `--config` TOML file, the network preset.

use crate::args::CliArgs;
use crate::CliError;
use ballot_config::{Credentials, FileConfig, Settings};
use std::time::Duration;
use tracing::debug;

/// Builds the [`Settings`] every command runs with.
pub fn resolve_settings(args: &CliArgs) -> Result<Settings, CliError> {
    let file = match &args.config {
        Some(path) => {
            debug!(target: "ballot", path = %path.display(), "loading configuration file");
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };

    let credentials = Credentials::new(
        args.api_key.clone().unwrap_or_default(),
        args.private_key.clone(),
    );
    let network_type = args.network.or(file.network).unwrap_or_default();
    let mut settings = Settings::new(network_type, credentials).apply_file(&FileConfig {
        network: None,
        ..file
    });

    if let Some(url) = &args.rpc_url {
        settings = settings.with_endpoint(url.clone());
    }
    if let Some(confirmations) = args.confirmations {
        settings = settings.with_confirmations(confirmations);
    }
    if let Some(ms) = args.poll_interval_ms {
        settings = settings.with_poll_interval(Duration::from_millis(ms));
    }
    if let Some(dir) = &args.artifacts {
        settings = settings.with_artifacts_dir(dir.clone());
    }

    settings.ensure_endpoint_credentials()?;
    debug!(
        target: "ballot",
        network = %settings.network.network_type,
        chain_id = settings.network.chain_id,
        confirmations = settings.confirmations,
        "settings resolved"
    );
    Ok(settings)
}
