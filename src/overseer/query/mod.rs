use clap::{Parser, Subcommand};
use tracing::instrument;

use crate::backend::Backend;
use crate::menu;
use crate::queries::overseer;

mod all_collaterals;
mod borrow_limit;
mod collaterals;
mod whitelist;

#[derive(Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the overseer configuration
    Config,
    /// Show the current deposit rate and aTerra supply
    EpochState,
    /// List whitelisted collateral types
    Whitelist(whitelist::Args),
    /// Show the locked collateral of a borrower
    Collaterals(collaterals::Args),
    /// List locked collateral of every borrower
    AllCollaterals(all_collaterals::Args),
    /// Show how much a borrower can borrow
    BorrowLimit(borrow_limit::Args),
}

#[instrument("query", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    match args.command {
        Commands::Config => menu::run_query(ctx, overseer::config()).await,
        Commands::EpochState => menu::run_query(ctx, overseer::epoch_state()).await,
        Commands::Whitelist(args) => whitelist::run(args, ctx).await,
        Commands::Collaterals(args) => collaterals::run(args, ctx).await,
        Commands::AllCollaterals(args) => all_collaterals::run(args, ctx).await,
        Commands::BorrowLimit(args) => borrow_limit::run(args, ctx).await,
    }
}
