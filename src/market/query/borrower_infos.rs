use clap::Parser;
use tracing::instrument;

use crate::backend::Backend;
use crate::queries::market;
use crate::types::AccAddress;
use crate::{menu, parse};

#[derive(Parser)]
pub struct Args {
    /// Continue after this borrower
    #[arg(long, value_parser = parse::acc_address)]
    start_after: Option<AccAddress>,
    /// Maximum number of entries
    #[arg(long, value_parser = parse::int::<u32>)]
    limit: Option<u32>,
}

#[instrument("borrower-infos", skip_all)]
pub async fn run<B: Backend>(args: Args, ctx: &crate::Context<B>) -> miette::Result<()> {
    let params = market::BorrowerInfos {
        start_after: args.start_after,
        limit: args.limit.into(),
    };
    menu::run_query(ctx, market::borrower_infos(params)).await
}
