use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::custody;
use crate::types::AccAddress;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// New liquidation contract
    #[arg(long, value_parser = parse::acc_address)]
    liquidation_contract: Option<AccAddress>,
}

#[instrument("update-config", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        custody::update_config(custody::UpdateConfig {
            address: sender.clone(),
            liquidation_contract: args.liquidation_contract,
        })
    })
    .await
}
