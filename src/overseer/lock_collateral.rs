use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::overseer;
use crate::types::Uint128;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Amount of bAsset tokens
    #[arg(long, value_parser = parse::uint128)]
    amount: Uint128,
}

#[instrument("lock-collateral", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        overseer::lock_collateral(overseer::Collateral {
            address: sender.clone(),
            amount: args.amount,
        })
    })
    .await
}
