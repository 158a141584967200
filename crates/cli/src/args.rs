use ballot_config::NetworkType;
use ballot_rpc_client::{Address, Utility, PROPOSAL_NAME_SIZE, U256};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Command-line arguments for the ballot CLI
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ballot-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ballot CLI - deploy, mint, delegate and vote on tokenized ballot contracts",
    long_about = "Ballot CLI talks to an ERC-20 voting token (MyToken) and a TokenizedBallot contract over JSON-RPC. Every state-changing command shows the signer and its balance, asks for confirmation and waits for the transaction to be mined."
)]
pub struct CliArgs {
    /// Network preset (sepolia, mainnet, local)
    #[arg(long = "network", global = true, value_name = "NETWORK")]
    pub network: Option<NetworkType>,

    /// Overrides the preset JSON-RPC endpoint
    #[arg(long = "rpc-url", global = true, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Specifies a TOML config file
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the Hardhat contract artifacts
    #[arg(long = "artifacts", global = true, value_name = "DIR")]
    pub artifacts: Option<PathBuf>,

    /// Blocks a transaction must be buried under before it counts as confirmed
    #[arg(long = "confirmations", global = true, value_name = "N")]
    pub confirmations: Option<u64>,

    /// Delay between two receipt polls
    #[arg(long = "poll-interval-ms", global = true, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// The log level; RUST_LOG applies when omitted
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Alchemy API key
    #[arg(long = "api-key", env = ballot_config::API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Hex-encoded signing key, with or without 0x
    #[arg(long = "private-key", env = ballot_config::PRIVATE_KEY_ENV, hide_env_values = true, global = true)]
    pub private_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Deploy the MyToken voting token
    DeployToken(DeployTokenArgs),
    /// Deploy a TokenizedBallot bound to an existing token
    DeployBallot(DeployBallotArgs),
    /// Deploy a token and a ballot bound to it, confirming each step
    DeployAll(DeployAllArgs),
    /// Mint voting tokens to an account
    Mint(MintArgs),
    /// Delegate the signer's voting power
    Delegate(DelegateArgs),
    /// Cast votes on a ballot proposal
    Vote(VoteArgs),
    /// Show the voting power of an account
    VotingPower(VotingPowerArgs),
    /// Show the winning proposal of a ballot
    Results(ResultsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DeployTokenArgs {
    /// Token name passed to the constructor
    #[arg(requires = "symbol")]
    pub name: Option<String>,
    /// Token symbol passed to the constructor
    #[arg(requires = "name")]
    pub symbol: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeployBallotArgs {
    /// Address of the voting token
    #[arg(value_parser = parse_address)]
    pub token: Address,
    /// Proposal names, at most 32 bytes each
    #[arg(required = true, num_args = 1..)]
    pub proposals: Vec<Proposal>,
    /// Block whose voting power snapshot the ballot uses
    #[arg(long = "target-block", value_name = "BLOCK", default_value_t = 0)]
    pub target_block: u64,
}

#[derive(Args, Debug, Clone)]
pub struct DeployAllArgs {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Proposal names, at most 32 bytes each
    #[arg(required = true, num_args = 1..)]
    pub proposals: Vec<Proposal>,
    /// Snapshot block for the ballot; the latest block when omitted
    #[arg(long = "target-block", value_name = "BLOCK")]
    pub target_block: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct MintArgs {
    /// Address of the voting token
    #[arg(value_parser = parse_address)]
    pub token: Address,
    /// Account receiving the tokens
    #[arg(value_parser = parse_address)]
    pub receiver: Address,
    /// Amount in whole tokens, e.g. 10 or 0.5
    pub amount: Amount,
}

#[derive(Args, Debug, Clone)]
pub struct DelegateArgs {
    /// Address of the voting token
    #[arg(value_parser = parse_address)]
    pub token: Address,
    /// Account receiving the voting power
    #[arg(value_parser = parse_address)]
    pub delegatee: Address,
}

#[derive(Args, Debug, Clone)]
pub struct VoteArgs {
    /// Address of the ballot
    #[arg(value_parser = parse_address)]
    pub ballot: Address,
    /// Index of the proposal
    pub proposal: u64,
    /// Voting power to spend, in whole tokens
    pub amount: Amount,
}

#[derive(Args, Debug, Clone)]
pub struct VotingPowerArgs {
    /// Address of the voting token
    #[arg(value_parser = parse_address)]
    pub token: Address,
    /// Account to inspect
    #[arg(value_parser = parse_address)]
    pub holder: Address,
}

#[derive(Args, Debug, Clone)]
pub struct ResultsArgs {
    /// Address of the ballot
    #[arg(value_parser = parse_address)]
    pub ballot: Address,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging
    Info,
    /// Warning level logging
    Warn,
    /// Error level logging
    Error,
}

impl LogLevel {
    /// Filter directive understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// A token amount as typed, with its 18-decimal unit value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub text: String,
    pub units: U256,
}

impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let units = Utility::parse_amount(s)?;
        Ok(Self {
            text: s.trim().to_string(),
            units,
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A proposal label and its on-chain `bytes32` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub label: String,
    pub field: [u8; PROPOSAL_NAME_SIZE],
}

impl FromStr for Proposal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = Utility::encode_proposal(s)?;
        Ok(Self {
            label: s.to_string(),
            field,
        })
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn parse_address(input: &str) -> Result<Address, String> {
    Utility::parse_address(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    const HOLDER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["ballot-cli", "results", TOKEN]);
        assert_eq!(args.network, None);
        assert_eq!(args.log_level, None);
        assert!(!args.yes);
        assert!(matches!(args.command, Command::Results(_)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "ballot-cli",
            "voting-power",
            TOKEN,
            HOLDER,
            "--network",
            "local",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.network, Some(NetworkType::Local));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(LogLevel::Error.as_directive(), "error");
    }

    #[test]
    fn test_amount_keeps_text() {
        let amount: Amount = "0.5".parse().unwrap();
        assert_eq!(amount.text, "0.5");
        assert_eq!(amount.units, U256::from(500_000_000_000_000_000u64));
        assert!("-1".parse::<Amount>().is_err());
    }

    #[test]
    fn test_proposal_field_is_padded() {
        let proposal: Proposal = "Pizza".parse().unwrap();
        assert_eq!(&proposal.field[..5], b"Pizza");
        assert!(proposal.field[5..].iter().all(|byte| *byte == 0));
        assert!("p".repeat(33).parse::<Proposal>().is_err());
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let err = CliArgs::try_parse_from(["ballot-cli", "results", "0x1234"]).unwrap_err();
        assert!(err.to_string().contains("40 hex digits"));
    }
}
