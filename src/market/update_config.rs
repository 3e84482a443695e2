use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::fabricators::market;
use crate::types::{AccAddress, Decimal};
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// New owner of the market contract
    #[arg(long, value_parser = parse::acc_address)]
    owner_addr: Option<AccAddress>,
    /// New interest model contract
    #[arg(long, value_parser = parse::acc_address)]
    interest_model: Option<AccAddress>,
    /// Share of the borrow limit that can actually be borrowed
    #[arg(long, value_parser = parse::decimal)]
    max_borrow_factor: Option<Decimal>,
}

#[instrument("update-config", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    menu::run_exec(ctx, |sender| {
        market::update_config(market::UpdateConfig {
            address: sender.clone(),
            owner_addr: args.owner_addr,
            interest_model: args.interest_model,
            max_borrow_factor: args.max_borrow_factor,
        })
    })
    .await
}
