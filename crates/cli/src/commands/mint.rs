use super::{confirm_and_submit, CommandContext, CommandResult, Outcome, MY_TOKEN};
use crate::args::MintArgs;
use crate::console::{Console, Prompt};
use ballot_rpc_client::{Token, MY_TOKEN_ABI};
use std::io::Write;

/// `mint <token> <receiver> <amount>`; the signer needs the minter role.
pub async fn execute<P: Prompt, W: Write>(
    context: &CommandContext,
    console: &mut Console<P, W>,
    args: &MintArgs,
) -> CommandResult {
    let token = context.artifact(MY_TOKEN, MY_TOKEN_ABI)?;
    let manager = context.signer().await?;
    context.announce_signer(console, "Minter", &manager).await?;

    let description = format!("\nMinting {} tokens to {:?}", args.amount, args.receiver);
    let call_args = [Token::Address(args.receiver), Token::Uint(args.amount.units)];
    let receipt = confirm_and_submit(console, &manager, &description, || {
        manager.invoke(args.token, &token.abi, "mint", &call_args)
    })
    .await?;

    match receipt {
        Some(receipt) => {
            console.pair("Mint successful", format!("{:?}", receipt.transaction_hash))?;
            Ok(Outcome::Completed)
        }
        None => Ok(Outcome::Cancelled),
    }
}
