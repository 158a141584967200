use super::{confirm_and_submit, CommandContext, CommandResult, Outcome, TOKENIZED_BALLOT};
use crate::args::VoteArgs;
use crate::console::{Console, Prompt};
use crate::CliError;
use ballot_rpc_client::{Abi, Address, ContractClient, Token, Utility, TOKENIZED_BALLOT_ABI, U256};
use std::io::Write;

/// `vote <ballot> <proposal-index> <amount>`
pub async fn execute<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &VoteArgs,
) -> CommandResult {
    let ballot = context.artifact(TOKENIZED_BALLOT, TOKENIZED_BALLOT_ABI)?;
    let manager = context.signer().await?;
    context.announce_signer(console, "Voter", &manager).await?;

    let index = U256::from(args.proposal);
    let (name, _) = read_proposal(context.contracts(), &ballot.abi, args.ballot, index).await?;

    let description = format!(
        "\nVoting on proposal[{}] {} with {} voting tokens",
        args.proposal, name, args.amount
    );
    let call_args = [Token::Uint(index), Token::Uint(args.amount.units)];
    let receipt = confirm_and_submit(console, &manager, &description, || {
        manager.invoke(args.ballot, &ballot.abi, "vote", &call_args)
    })
    .await?;

    match receipt {
        Some(receipt) => {
            console.pair("Vote successful", format!("{:?}", receipt.transaction_hash))?;
            Ok(Outcome::Completed)
        }
        None => Ok(Outcome::Cancelled),
    }
}

/// Reads `proposals(index)` and returns the decoded name and the vote count.
pub async fn read_proposal(
    contracts: &ContractClient,
    abi: &Abi,
    ballot: Address,
    index: U256,
) -> Result<(String, U256), CliError> {
    let tokens = contracts
        .test_invoke(ballot, abi, "proposals", &[Token::Uint(index)])
        .await?;
    match tokens.as_slice() {
        [Token::FixedBytes(name), Token::Uint(votes), ..] => {
            Ok((Utility::decode_proposal(name), *votes))
        }
        other => Err(CliError::UnexpectedResult {
            function: "proposals".to_string(),
            message: format!("{other:?}"),
        }),
    }
}
