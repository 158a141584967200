use super::{confirm_and_submit, CommandContext, CommandResult, Outcome, MY_TOKEN};
use crate::args::DelegateArgs;
use crate::console::{Console, Prompt};
use ballot_rpc_client::{Token, MY_TOKEN_ABI};
use std::io::Write;

/// `delegate <token> <delegatee>`
///
/// Voting power only counts once delegated, self-delegation included.
pub async fn execute<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &DelegateArgs,
) -> CommandResult {
    let token = context.artifact(MY_TOKEN, MY_TOKEN_ABI)?;
    let manager = context.signer().await?;
    context.announce_signer(console, "Delegator", &manager).await?;

    let description = format!(
        "\nDelegating voting power of token {:?} to {:?}",
        args.token, args.delegatee
    );
    let call_args = [Token::Address(args.delegatee)];
    let receipt = confirm_and_submit(console, &manager, &description, || {
        manager.invoke(args.token, &token.abi, "delegate", &call_args)
    })
    .await?;

    match receipt {
        Some(receipt) => {
            console.pair("Delegate successful", format!("{:?}", receipt.transaction_hash))?;
            Ok(Outcome::Completed)
        }
        None => Ok(Outcome::Cancelled),
    }
}
