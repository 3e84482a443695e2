use clap::{Parser, Subcommand};
use tracing::instrument;

use crate::backend::Backend;
use crate::menu;
use crate::queries::market;

mod borrower_info;
mod borrower_infos;
mod epoch_state;
mod state;

#[derive(Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the market configuration
    Config,
    /// Show total liabilities and reserves
    State(state::Args),
    /// Show the aTerra exchange rate and deposit rate
    EpochState(epoch_state::Args),
    /// Show the loan of a single borrower
    BorrowerInfo(borrower_info::Args),
    /// List borrowers and their loans
    BorrowerInfos(borrower_infos::Args),
}

#[instrument("query", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    match args.command {
        Commands::Config => menu::run_query(ctx, market::config()).await,
        Commands::State(args) => state::run(args, ctx).await,
        Commands::EpochState(args) => epoch_state::run(args, ctx).await,
        Commands::BorrowerInfo(args) => borrower_info::run(args, ctx).await,
        Commands::BorrowerInfos(args) => borrower_infos::run(args, ctx).await,
    }
}
