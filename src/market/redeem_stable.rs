use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::market;
use crate::types::Uint128;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Amount of aTerra
    #[arg(long, value_parser = parse::uint128)]
    amount: Uint128,
}

#[instrument("redeem-stable", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        market::redeem_stable(market::StableAmount {
            address: sender.clone(),
            amount: args.amount,
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backend::testing::Recorder;
    use crate::testing::context;

    #[tokio::test]
    async fn sends_aterra_back_to_the_market() {
        let recorder = Recorder::default();
        let ctx = context("columbus-4", &recorder);
        let args = Args::try_parse_from(["redeem-stable", "--amount", "42"]).unwrap();

        run(args, &ctx).await.unwrap();

        let broadcasts = recorder.broadcasts.borrow();
        let msg = &broadcasts[0]["msg"][0]["value"];
        assert_eq!(
            msg["contract"],
            json!("terra1hzh9vpxhsk8253se0vv5jj6etdvxu3nv8z07zu")
        );
        assert_eq!(
            msg["execute_msg"]["send"]["contract"],
            json!("terra1sepfj7s0aeg5967uxnfk4thzlerrsktkpelm5s")
        );
        assert_eq!(msg["execute_msg"]["send"]["amount"], json!("42"));
    }
}
