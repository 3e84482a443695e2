use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::queries::market;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Evaluate at this height instead of the latest block
    #[arg(long, value_parser = parse::int::<u64>)]
    block_height: Option<u64>,
}

#[instrument("epoch-state", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_query(ctx, market::epoch_state(args.block_height)).await
}
