use super::vote::read_proposal;
use super::{CommandContext, CommandResult, Outcome, TOKENIZED_BALLOT};
use crate::args::ResultsArgs;
use crate::console::{Console, Prompt};
use crate::CliError;
use ballot_rpc_client::{Token, Utility, TOKENIZED_BALLOT_ABI};
use std::io::Write;

/// `results <ballot>`: the current winner and its vote count.
pub async fn execute<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &ResultsArgs,
) -> CommandResult {
    let ballot = context.artifact(TOKENIZED_BALLOT, TOKENIZED_BALLOT_ABI)?;
    let contracts = context.contracts();

    let winner = contracts
        .test_invoke_uint(args.ballot, &ballot.abi, "winningProposal", &[])
        .await?;
    let name = match contracts
        .test_invoke(args.ballot, &ballot.abi, "winnerName", &[])
        .await?
        .first()
    {
        Some(Token::FixedBytes(name)) => Utility::decode_proposal(name),
        other => {
            return Err(CliError::UnexpectedResult {
                function: "winnerName".to_string(),
                message: format!("{other:?}"),
            })
        }
    };
    let (_, votes) = read_proposal(contracts, &ballot.abi, args.ballot, winner).await?;

    console.info(format!(
        "Winning proposal: [{winner}] {name} with {} votes",
        Utility::format_amount(votes)
    ))?;
    Ok(Outcome::Completed)
}
