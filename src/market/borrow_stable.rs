use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::market;
use crate::types::{AccAddress, Uint128};
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Amount of uusd
    #[arg(long, value_parser = parse::uint128)]
    borrow_amount: Uint128,
    /// Recipient of the loan
    #[arg(long, value_parser = parse::acc_address)]
    to: Option<AccAddress>,
}

#[instrument("borrow-stable", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        market::borrow_stable(market::BorrowStable {
            address: sender.clone(),
            borrow_amount: args.borrow_amount,
            to: args.to,
        })
    })
    .await
}
