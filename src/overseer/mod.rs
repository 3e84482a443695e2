use clap::{Parser, Subcommand};
use tracing::instrument;

use crate::backend::Backend;

mod lock_collateral;
mod query;
mod unlock_collateral;

#[derive(Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lock deposited collateral so it counts towards the borrow limit
    LockCollateral(lock_collateral::Args),
    /// Unlock collateral so it can be withdrawn from custody
    UnlockCollateral(unlock_collateral::Args),
    /// Read overseer state
    Query(query::Args),
}

#[instrument("overseer", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    match args.command {
        Commands::LockCollateral(args) => lock_collateral::run(args, ctx).await,
        Commands::UnlockCollateral(args) => unlock_collateral::run(args, ctx).await,
        Commands::Query(args) => query::run(args, ctx).await,
    }
}
