use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::queries::overseer;
use crate::types::AccAddress;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    #[arg(long, value_parser = parse::acc_address)]
    borrower: AccAddress,
}

#[instrument("collaterals", skip_all, fields(borrower = %args.borrower))]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_query(ctx, overseer::collaterals(args.borrower)).await
}
