use super::{CommandContext, CommandResult, Outcome, MY_TOKEN};
use crate::args::VotingPowerArgs;
use crate::console::{Console, Prompt};
use ballot_rpc_client::{Token, Utility, MY_TOKEN_ABI};
use std::io::Write;

/// `voting-power <token> <holder>`: read-only, needs no signing key.
pub async fn execute<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &VotingPowerArgs,
) -> CommandResult {
    let token = context.artifact(MY_TOKEN, MY_TOKEN_ABI)?;
    let votes = context
        .contracts()
        .test_invoke_uint(args.token, &token.abi, "getVotes", &[Token::Address(args.holder)])
        .await?;

    console.info(format!(
        "Account {:?} has {} units of voting power ({} tokens)",
        args.holder,
        votes,
        Utility::format_amount(votes)
    ))?;
    if votes.is_zero() {
        console.warning("tokens only count as votes once their holder delegates them")?;
    }
    Ok(Outcome::Completed)
}
