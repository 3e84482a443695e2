use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::market;
use crate::types::Uint128;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Amount of uusd
    #[arg(long, value_parser = parse::uint128)]
    amount: Uint128,
}

#[instrument("deposit-stable", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        market::deposit_stable(market::StableAmount {
            address: sender.clone(),
            amount: args.amount,
        })
    })
    .await
}
