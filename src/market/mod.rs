use clap::{Parser, Subcommand};
use tracing::instrument;

use crate::backend::Backend;

mod borrow_stable;
mod deposit_stable;
mod query;
mod redeem_stable;
mod repay_stable;
mod update_config;

#[derive(Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deposit stablecoins into the money market and receive aTerra
    DepositStable(deposit_stable::Args),
    /// Burn aTerra and redeem the underlying stablecoins
    RedeemStable(redeem_stable::Args),
    /// Borrow stablecoins against locked collateral
    BorrowStable(borrow_stable::Args),
    /// Repay an outstanding loan
    RepayStable(repay_stable::Args),
    /// Update the market configuration (owner only)
    UpdateConfig(update_config::Args),
    /// Read market state
    Query(query::Args),
}

#[instrument("market", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    match args.command {
        Commands::DepositStable(args) => deposit_stable::run(args, ctx).await,
        Commands::RedeemStable(args) => redeem_stable::run(args, ctx).await,
        Commands::BorrowStable(args) => borrow_stable::run(args, ctx).await,
        Commands::RepayStable(args) => repay_stable::run(args, ctx).await,
        Commands::UpdateConfig(args) => update_config::run(args, ctx).await,
        Commands::Query(args) => query::run(args, ctx).await,
    }
}
