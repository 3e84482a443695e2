use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::queries::custody;
use crate::types::AccAddress;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Borrower address
    #[arg(long, value_parser = parse::acc_address)]
    address: AccAddress,
}

#[instrument("borrower", skip_all, fields(address = %args.address))]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    let params = custody::Borrower {
        address: args.address,
    };
    menu::run_query(ctx, custody::borrower(params)).await
}
