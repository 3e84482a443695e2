use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::queries::market;
use crate::types::AccAddress;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    #[arg(long, value_parser = parse::acc_address)]
    borrower: AccAddress,
    /// Evaluate at this height instead of the latest block
    #[arg(long, value_parser = parse::int::<u64>)]
    block_height: Option<u64>,
}

#[instrument("borrower-info", skip_all, fields(borrower = %args.borrower))]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    let params = market::BorrowerInfo {
        borrower: args.borrower,
        block_height: args.block_height,
    };
    menu::run_query(ctx, market::borrower_info(params)).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backend::testing::{Recorder, SIGNER};
    use crate::testing::context;

    #[tokio::test]
    async fn asks_the_market_at_a_height() {
        let recorder = Recorder::default();
        let ctx = context("columbus-4", &recorder);
        let argv = ["borrower-info", "--borrower", SIGNER, "--block-height", "42"];

        run(Args::try_parse_from(argv).unwrap(), &ctx).await.unwrap();

        let queries = recorder.queries.borrow();
        assert_eq!(
            queries[0].0.as_str(),
            "terra1sepfj7s0aeg5967uxnfk4thzlerrsktkpelm5s"
        );
        assert_eq!(
            queries[0].1,
            json!({ "borrower_info": { "borrower": SIGNER, "block_height": 42 } })
        );
    }
}
