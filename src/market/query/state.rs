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

#[instrument("state", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_query(ctx, market::state(args.block_height)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_height_must_be_an_integer() {
        assert!(Args::try_parse_from(["state", "--block-height", "tip"]).is_err());
        assert!(Args::try_parse_from(["state", "--block-height", "12"]).is_ok());
    }
}
