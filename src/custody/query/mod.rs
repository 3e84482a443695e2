use clap::{Parser, Subcommand};
use tracing::instrument;

use crate::backend::Backend;
use crate::menu;
use crate::queries::custody;

mod borrower;
mod borrowers;

#[derive(Parser)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the custody configuration
    Config,
    /// Show the collateral balance of a borrower
    Borrower(borrower::Args),
    /// List borrowers and their collateral
    Borrowers(borrowers::Args),
}

#[instrument("query", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    match args.command {
        Commands::Config => menu::run_query(ctx, custody::config()).await,
        Commands::Borrower(args) => borrower::run(args, ctx).await,
        Commands::Borrowers(args) => borrowers::run(args, ctx).await,
    }
}
