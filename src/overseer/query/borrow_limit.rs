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
    /// Unix time to evaluate at
    #[arg(long, value_parser = parse::int::<u64>)]
    block_time: Option<u64>,
}

#[instrument("borrow-limit", skip_all, fields(borrower = %args.borrower))]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    let params = overseer::BorrowLimit {
        borrower: args.borrower,
        block_time: args.block_time,
    };
    menu::run_query(ctx, overseer::borrow_limit(params)).await
}
