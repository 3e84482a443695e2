use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::custody;
use crate::types::Uint128;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Amount of bAsset tokens. Everything unlocked when left out
    #[arg(long, value_parser = parse::uint128)]
    amount: Option<Uint128>,
}

#[instrument("withdraw-collateral", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        custody::withdraw_collateral(custody::WithdrawCollateral {
            address: sender.clone(),
            amount: args.amount.into(),
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_optional() {
        let args = Args::try_parse_from(["withdraw-collateral"]).unwrap();
        assert_eq!(args.amount, None);

        let args = Args::try_parse_from(["withdraw-collateral", "--amount", "500"]).unwrap();
        assert_eq!(args.amount, Some(Uint128(500)));
    }
}
