use clap::{Parser, Subcommand};
use tracing::instrument;

use crate::backend::Backend;

mod deposit_collateral;
mod query;
mod update_config;
mod withdraw_collateral;

#[derive(Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update the custody contract configuration (owner only)
    UpdateConfig(update_config::Args),
    /// Send bAsset tokens to custody as collateral
    DepositCollateral(deposit_collateral::Args),
    /// Withdraw unlocked collateral. Leave --amount out to withdraw all of it
    WithdrawCollateral(withdraw_collateral::Args),
    /// Read custody state
    Query(query::Args),
}

#[instrument("custody", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    match args.command {
        Commands::UpdateConfig(args) => update_config::run(args, ctx).await,
        Commands::DepositCollateral(args) => deposit_collateral::run(args, ctx).await,
        Commands::WithdrawCollateral(args) => withdraw_collateral::run(args, ctx).await,
        Commands::Query(args) => query::run(args, ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backend::testing::{Recorder, SIGNER};
    use crate::testing::context;

    #[tokio::test]
    async fn routes_to_withdraw_everything() {
        let recorder = Recorder::default();
        let ctx = context("columbus-4", &recorder);
        let args = Args::try_parse_from(["custody", "withdraw-collateral"]).unwrap();

        run(args, &ctx).await.unwrap();

        let broadcasts = recorder.broadcasts.borrow();
        let msg = &broadcasts[0]["msg"][0]["value"];
        assert_eq!(msg["sender"], json!(SIGNER));
        assert_eq!(msg["execute_msg"], json!({ "withdraw_collateral": {} }));
    }
}
