//! Command implementations.
//!
//! Every state-changing command follows the same path: build the signing
//! client, print the signer and its balance, describe the action, pass the
//! confirmation gate, submit one transaction and wait for its receipt.

pub mod delegate;
pub mod deploy;
pub mod mint;
pub mod results;
pub mod vote;
pub mod voting_power;

use crate::args::Command;
use crate::console::{Console, Prompt};
use crate::CliError;
use ballot_config::Settings;
use ballot_rpc_client::{
    ContractArtifact, ContractClient, ContractError, RpcClient, RpcTransactionReceipt,
    TransactionManager, TransactionManagerFactory, Utility, H256,
};
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Name of the token contract and its artifact
pub const MY_TOKEN: &str = "MyToken";

/// Name of the ballot contract and its artifact
pub const TOKENIZED_BALLOT: &str = "TokenizedBallot";

/// How a command ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user declined at a confirmation gate
    Cancelled,
}

pub type CommandResult = Result<Outcome, CliError>;

/// The client pair plus the settings they were built from.
pub struct CommandContext {
    settings: Settings,
    contracts: ContractClient,
    factory: TransactionManagerFactory,
}

impl CommandContext {
    pub fn new(settings: Settings) -> Result<Self, CliError> {
        let rpc_client = Arc::new(RpcClient::new(&settings.network.endpoint)?);
        info!(
            target: "ballot",
            network = %settings.network.network_type,
            endpoint = %rpc_client.endpoint_origin(),
            "client pair ready"
        );
        let factory = TransactionManagerFactory::new(Arc::clone(&rpc_client), &settings);
        Ok(Self {
            settings,
            contracts: ContractClient::new(rpc_client),
            factory,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read-only half of the client pair
    pub fn contracts(&self) -> &ContractClient {
        &self.contracts
    }

    pub fn rpc_client(&self) -> &RpcClient {
        self.contracts.rpc_client()
    }

    /// Builds the signing half, refusing endpoints that serve another chain.
    pub async fn signer(&self) -> Result<TransactionManager, CliError> {
        let manager = self.factory.make_manager(&self.settings.credentials)?;
        let actual = self.rpc_client().chain_id().await?;
        if actual != manager.chain_id() {
            return Err(CliError::ChainMismatch {
                expected: manager.chain_id(),
                actual,
            });
        }
        Ok(manager)
    }

    /// Prints the signer's address and native balance.
    pub async fn announce_signer<P: Prompt, W: Write>(
        &self,
        console: &mut Console<P, W>,
        role: &str,
        manager: &TransactionManager,
    ) -> Result<(), CliError> {
        let address = manager.address();
        console.pair(&format!("{role} address"), format!("{address:?}"))?;
        let balance = self.contracts.native_balance(address).await?;
        console.pair(
            &format!("{role} balance"),
            format!(
                "{} {}",
                Utility::format_amount(balance),
                self.settings.network.currency_symbol
            ),
        )?;
        Ok(())
    }

    /// The compiled artifact when present, the built-in interface otherwise.
    pub fn artifact(&self, name: &str, signatures: &[&str]) -> Result<ContractArtifact, CliError> {
        Ok(ContractArtifact::load_or_builtin(
            &self.settings.artifacts_dir,
            name,
            signatures,
        )?)
    }
}

/// Runs the confirmation gate, then submits and waits.
///
/// Returns `None` when the user declined; `submit` is not called then.
pub async fn confirm_and_submit<P, W, F, Fut>(
    console: &mut Console<P, W>,
    manager: &TransactionManager,
    description: &str,
    submit: F,
) -> Result<Option<RpcTransactionReceipt>, CliError>
where
    P: Prompt,
    W: Write,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<H256, ContractError>>,
{
    if !console.confirm(description)?.is_proceed() {
        info!(target: "ballot", "operation cancelled by user");
        return Ok(None);
    }

    let hash = submit().await?;
    console.pair("Transaction hash", format!("{hash:?}"))?;
    console.info("Waiting for confirmations...")?;
    let receipt = manager.wait_for_receipt(hash).await?;
    Ok(Some(receipt))
}

/// Dispatches a parsed command
pub async fn execute<P: Prompt, W: Write>(
    command: &Command,
    context: &CommandContext,
    console: &mut Console<P, W>,
) -> CommandResult {
    match command {
        Command::DeployToken(args) => deploy::deploy_token(context, console, args).await,
        Command::DeployBallot(args) => deploy::deploy_ballot(context, console, args).await,
        Command::DeployAll(args) => deploy::deploy_all(context, console, args).await,
        Command::Mint(args) => mint::execute(context, console, args).await,
        Command::Delegate(args) => delegate::execute(context, console, args).await,
        Command::Vote(args) => vote::execute(context, console, args).await,
        Command::VotingPower(args) => voting_power::execute(context, console, args).await,
        Command::Results(args) => results::execute(context, console, args).await,
    }
}
