//! Ballot Configuration Module
//!
//! This module provides the configuration types shared by the RPC client and
//! the command-line tool: network presets, credentials and the resolved
//! [`Settings`] that get passed into client construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Fixed scale of every token amount handled by the tool.
pub const ETHER_DECIMALS: u32 = 18;

/// Number of blocks a transaction must be buried under before it counts as confirmed.
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// Delay between two receipt polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4_000;

/// Hardhat writes compiled contracts here.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/contracts";

/// Environment variable holding the Alchemy credential.
pub const API_KEY_ENV: &str = "ALCHEMY_API_KEY";

/// Environment variable holding the hex-encoded signing key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Sepolia chain id
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;
/// Ethereum mainnet chain id
pub const MAINNET_CHAIN_ID: u64 = 1;
/// Hardhat / anvil default chain id
pub const LOCAL_CHAIN_ID: u64 = 31_337;

const LOCAL_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PRIVATE_KEY is not set; a signing key is required for this command")]
    MissingPrivateKey,

    #[error("ALCHEMY_API_KEY is not set; it is required to reach the {0} endpoint")]
    MissingApiKey(NetworkType),

    #[error("invalid private key: expected 64 hex digits")]
    InvalidPrivateKey,

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Network the tool talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    Sepolia,
    Mainnet,
    Local,
}

impl NetworkType {
    /// Gets the EIP-155 chain id
    pub fn chain_id(&self) -> u64 {
        match self {
            NetworkType::Sepolia => SEPOLIA_CHAIN_ID,
            NetworkType::Mainnet => MAINNET_CHAIN_ID,
            NetworkType::Local => LOCAL_CHAIN_ID,
        }
    }

    /// Symbol of the native currency, as wallets display it.
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            NetworkType::Sepolia => "SepoliaETH",
            NetworkType::Mainnet => "ETH",
            NetworkType::Local => "ETH",
        }
    }

    /// Whether the preset endpoint needs an API key.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, NetworkType::Local)
    }

    /// Builds the preset endpoint URL
    pub fn endpoint(&self, api_key: &str) -> String {
        match self {
            NetworkType::Sepolia => format!("https://eth-sepolia.g.alchemy.com/v2/{api_key}"),
            NetworkType::Mainnet => format!("https://eth-mainnet.g.alchemy.com/v2/{api_key}"),
            NetworkType::Local => LOCAL_ENDPOINT.to_string(),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Sepolia => write!(f, "sepolia"),
            NetworkType::Mainnet => write!(f, "mainnet"),
            NetworkType::Local => write!(f, "local"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sepolia" | "testnet" => Ok(NetworkType::Sepolia),
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            "local" | "localhost" | "hardhat" | "anvil" => Ok(NetworkType::Local),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Resolved endpoint and chain parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSettings {
    pub network_type: NetworkType,
    pub chain_id: u64,
    pub endpoint: String,
    pub currency_symbol: String,
}

impl NetworkSettings {
    /// Preset settings for a network, with the endpoint derived from the API key.
    pub fn preset(network_type: NetworkType, api_key: &str) -> Self {
        Self {
            network_type,
            chain_id: network_type.chain_id(),
            endpoint: network_type.endpoint(api_key),
            currency_symbol: network_type.currency_symbol().to_string(),
        }
    }
}

/// Secrets used to reach the endpoint and to sign transactions.
///
/// The private key is stored without a `0x` prefix, the way it sits in the
/// environment; [`Credentials::signing_key`] adds the prefix.
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: String,
    private_key: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, private_key: Option<String>) -> Self {
        let private_key = private_key
            .map(|key| key.trim().trim_start_matches("0x").to_string())
            .filter(|key| !key.is_empty());
        Self {
            api_key: api_key.into().trim().to_string(),
            private_key,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_signing_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Returns the `0x`-prefixed signing key, validating its shape.
    pub fn signing_key(&self) -> Result<String, ConfigError> {
        let key = self
            .private_key
            .as_deref()
            .ok_or(ConfigError::MissingPrivateKey)?;
        if key.len() != 64 || !key.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidPrivateKey);
        }
        Ok(format!("0x{key}"))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redact(&self.api_key))
            .field("private_key", &self.private_key.as_deref().map(redact))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

/// Optional TOML overrides (`--config ballot.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub network: Option<NetworkType>,
    pub rpc_url: Option<String>,
    pub chain_id: Option<u64>,
    pub currency_symbol: Option<String>,
    pub confirmations: Option<u64>,
    pub poll_interval_ms: Option<u64>,
    pub artifacts_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Everything a command needs to build its clients
#[derive(Debug, Clone)]
pub struct Settings {
    pub network: NetworkSettings,
    pub credentials: Credentials,
    pub confirmations: u64,
    pub poll_interval: Duration,
    pub artifacts_dir: PathBuf,
}

impl Settings {
    /// Preset settings for `network_type` with default waiting parameters.
    pub fn new(network_type: NetworkType, credentials: Credentials) -> Self {
        Self {
            network: NetworkSettings::preset(network_type, credentials.api_key()),
            credentials,
            confirmations: DEFAULT_CONFIRMATIONS,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
        }
    }

    /// Points the settings at an explicit endpoint, keeping the chain parameters.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.network.endpoint = endpoint.into();
        self
    }

    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations.max(1);
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = dir.into();
        self
    }

    /// Applies the values present in a TOML file on top of the current settings.
    pub fn apply_file(mut self, file: &FileConfig) -> Self {
        if let Some(network_type) = file.network {
            self.network = NetworkSettings::preset(network_type, self.credentials.api_key());
        }
        if let Some(url) = &file.rpc_url {
            self.network.endpoint = url.clone();
        }
        if let Some(chain_id) = file.chain_id {
            self.network.chain_id = chain_id;
        }
        if let Some(symbol) = &file.currency_symbol {
            self.network.currency_symbol = symbol.clone();
        }
        if let Some(confirmations) = file.confirmations {
            self = self.with_confirmations(confirmations);
        }
        if let Some(ms) = file.poll_interval_ms {
            self.poll_interval = Duration::from_millis(ms);
        }
        if let Some(dir) = &file.artifacts_dir {
            self.artifacts_dir = dir.clone();
        }
        self
    }

    /// Fails when the preset endpoint would be hit without its API key.
    pub fn ensure_endpoint_credentials(&self) -> Result<(), ConfigError> {
        let preset = self.network.network_type.endpoint(self.credentials.api_key());
        let uses_preset = self.network.endpoint == preset;
        if uses_preset
            && self.network.network_type.requires_api_key()
            && self.credentials.api_key().is_empty()
        {
            return Err(ConfigError::MissingApiKey(self.network.network_type));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn signing_key_is_prefixed_once() {
        let creds = Credentials::new("", Some(KEY.to_string()));
        assert_eq!(creds.signing_key().unwrap(), format!("0x{KEY}"));

        let creds = Credentials::new("", Some(format!("0x{KEY}")));
        assert_eq!(creds.signing_key().unwrap(), format!("0x{KEY}"));
    }

    #[test]
    fn signing_key_rejects_missing_and_malformed() {
        let creds = Credentials::new("key", None);
        assert!(matches!(
            creds.signing_key(),
            Err(ConfigError::MissingPrivateKey)
        ));

        let creds = Credentials::new("key", Some("   ".to_string()));
        assert!(!creds.has_signing_key());

        let creds = Credentials::new("key", Some("zz".repeat(32)));
        assert!(matches!(
            creds.signing_key(),
            Err(ConfigError::InvalidPrivateKey)
        ));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let creds = Credentials::new("secret-api", Some(KEY.to_string()));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret-api"));
        assert!(!debug.contains(KEY));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn sepolia_preset_embeds_api_key() {
        let settings = Settings::new(NetworkType::Sepolia, Credentials::new("abc", None));
        assert_eq!(
            settings.network.endpoint,
            "https://eth-sepolia.g.alchemy.com/v2/abc"
        );
        assert_eq!(settings.network.chain_id, SEPOLIA_CHAIN_ID);
        assert_eq!(settings.network.currency_symbol, "SepoliaETH");
        assert_eq!(settings.confirmations, DEFAULT_CONFIRMATIONS);
    }

    #[test]
    fn missing_api_key_only_matters_for_preset_endpoints() {
        let settings = Settings::new(NetworkType::Sepolia, Credentials::default());
        assert!(matches!(
            settings.ensure_endpoint_credentials(),
            Err(ConfigError::MissingApiKey(NetworkType::Sepolia))
        ));

        let settings = settings.with_endpoint("http://localhost:9999");
        assert!(settings.ensure_endpoint_credentials().is_ok());

        let settings = Settings::new(NetworkType::Local, Credentials::default());
        assert!(settings.ensure_endpoint_credentials().is_ok());
    }

    #[test]
    fn confirmations_never_drop_below_one() {
        let settings =
            Settings::new(NetworkType::Local, Credentials::default()).with_confirmations(0);
        assert_eq!(settings.confirmations, 1);
    }

    #[test]
    fn network_type_parsing() {
        assert_eq!("Sepolia".parse::<NetworkType>().unwrap(), NetworkType::Sepolia);
        assert_eq!("hardhat".parse::<NetworkType>().unwrap(), NetworkType::Local);
        assert_eq!(NetworkType::Mainnet.to_string(), "mainnet");
        assert!("goerli".parse::<NetworkType>().is_err());
    }
}
