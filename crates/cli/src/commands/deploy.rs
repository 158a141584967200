use super::{confirm_and_submit, CommandContext, CommandResult, Outcome, MY_TOKEN, TOKENIZED_BALLOT};
use crate::args::{DeployAllArgs, DeployBallotArgs, DeployTokenArgs, Proposal};
use crate::console::{Console, Prompt};
use crate::CliError;
use ballot_rpc_client::{
    Address, ContractArtifact, ContractError, RpcClient, Token, TransactionManager, H256,
    MY_TOKEN_ABI, TOKENIZED_BALLOT_ABI, U256,
};
use std::io::Write;
use tracing::info;

/// `deploy-token [name] [symbol]`
pub async fn deploy_token<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &DeployTokenArgs,
) -> CommandResult {
    let artifact = context.artifact(MY_TOKEN, MY_TOKEN_ABI)?;
    artifact.creation_code()?;

    let manager = context.signer().await?;
    context.announce_signer(console, "Deployer", &manager).await?;

    let (description, constructor_args) = match (&args.name, &args.symbol) {
        (Some(name), Some(symbol)) => (
            format!("\nDeploying contract for token {name} ({symbol})"),
            vec![Token::String(name.clone()), Token::String(symbol.clone())],
        ),
        _ => (format!("\nDeploying {MY_TOKEN} contract"), Vec::new()),
    };

    match deploy_contract(console, &manager, &artifact, &description, &constructor_args).await? {
        Some(address) => {
            console.pair(&format!("{MY_TOKEN} contract deployed to"), format!("{address:?}"))?;
            Ok(Outcome::Completed)
        }
        None => Ok(Outcome::Cancelled),
    }
}

/// `deploy-ballot <token> <proposal>...`
pub async fn deploy_ballot<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &DeployBallotArgs,
) -> CommandResult {
    let artifact = context.artifact(TOKENIZED_BALLOT, TOKENIZED_BALLOT_ABI)?;
    artifact.creation_code()?;

    let manager = context.signer().await?;
    context.announce_signer(console, "Deployer", &manager).await?;

    let description = format!(
        "\nDeploying {TOKENIZED_BALLOT} contract with token {:?}, proposals [{}] and target block {}",
        args.token,
        labels(&args.proposals),
        args.target_block
    );
    let constructor_args = ballot_constructor_args(&args.proposals, args.token, args.target_block);

    match deploy_contract(console, &manager, &artifact, &description, &constructor_args).await? {
        Some(address) => {
            console.pair(
                &format!("{TOKENIZED_BALLOT} contract deployed to"),
                format!("{address:?}"),
            )?;
            Ok(Outcome::Completed)
        }
        None => Ok(Outcome::Cancelled),
    }
}

/// `deploy-all <name> <symbol> <proposal>...`
///
/// Two gates: the token first, then the ballot bound to the new token.
/// Declining the token also skips the ballot.
pub async fn deploy_all<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &DeployAllArgs,
) -> CommandResult {
    let token_artifact = context.artifact(MY_TOKEN, MY_TOKEN_ABI)?;
    token_artifact.creation_code()?;
    let ballot_artifact = context.artifact(TOKENIZED_BALLOT, TOKENIZED_BALLOT_ABI)?;
    ballot_artifact.creation_code()?;

    let manager = context.signer().await?;
    context.announce_signer(console, "Deployer", &manager).await?;

    let description = format!(
        "\nDeploying contract for token {} ({})",
        args.name, args.symbol
    );
    let constructor_args = [
        Token::String(args.name.clone()),
        Token::String(args.symbol.clone()),
    ];
    let Some(token) =
        deploy_contract(console, &manager, &token_artifact, &description, &constructor_args).await?
    else {
        return Ok(Outcome::Cancelled);
    };
    console.pair(&format!("{MY_TOKEN} contract deployed to"), format!("{token:?}"))?;

    let target = match args.target_block {
        Some(block) => block.to_string(),
        None => "latest".to_string(),
    };
    let description = format!(
        "\nDeploying {TOKENIZED_BALLOT} contract with token {token:?}, proposals [{}] and target block {target}",
        labels(&args.proposals)
    );
    let rpc_client = context.rpc_client();
    let receipt = confirm_and_submit(console, &manager, &description, || {
        submit_ballot(
            rpc_client,
            &manager,
            &ballot_artifact,
            &args.proposals,
            token,
            args.target_block,
        )
    })
    .await?;

    match receipt {
        Some(receipt) => {
            let address = receipt
                .contract_address
                .ok_or(ContractError::NoContractAddress(receipt.transaction_hash))?;
            console.pair(
                &format!("{TOKENIZED_BALLOT} contract deployed to"),
                format!("{address:?}"),
            )?;
            Ok(Outcome::Completed)
        }
        None => Ok(Outcome::Cancelled),
    }
}

async fn deploy_contract<P: Prompt, W: Write>(
    console: &mut Console<P, W>,
    manager: &TransactionManager,
    artifact: &ContractArtifact,
    description: &str,
    constructor_args: &[Token],
) -> Result<Option<Address>, CliError> {
    let receipt = confirm_and_submit(console, manager, description, || {
        manager.deploy(artifact, constructor_args)
    })
    .await?;

    match receipt {
        Some(receipt) => {
            let address = receipt
                .contract_address
                .ok_or(ContractError::NoContractAddress(receipt.transaction_hash))?;
            info!(target: "ballot", contract = %artifact.contract_name, address = ?address, "contract deployed");
            Ok(Some(address))
        }
        None => Ok(None),
    }
}

/// Resolves the snapshot block once the user has confirmed, then deploys.
async fn submit_ballot(
    rpc_client: &RpcClient,
    manager: &TransactionManager,
    artifact: &ContractArtifact,
    proposals: &[Proposal],
    token: Address,
    target_block: Option<u64>,
) -> Result<H256, ContractError> {
    let target_block = match target_block {
        Some(block) => block,
        None => rpc_client.block_number().await?,
    };
    info!(target: "ballot", target_block, "ballot snapshot block");
    manager
        .deploy(artifact, &ballot_constructor_args(proposals, token, target_block))
        .await
}

/// `TokenizedBallot(bytes32[] proposalNames, address tokenContract, uint256 targetBlockNumber)`
pub fn ballot_constructor_args(proposals: &[Proposal], token: Address, target_block: u64) -> Vec<Token> {
    let names = proposals
        .iter()
        .map(|proposal| Token::FixedBytes(proposal.field.to_vec()))
        .collect();
    vec![
        Token::Array(names),
        Token::Address(token),
        Token::Uint(U256::from(target_block)),
    ]
}

fn labels(proposals: &[Proposal]) -> String {
    proposals
        .iter()
        .map(|proposal| proposal.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
