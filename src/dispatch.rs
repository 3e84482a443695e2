use tracing::{debug, info, instrument, trace, warn};

use crate::client::{ChainClient, QueryResult};
use crate::error::{Error, Result};
use crate::fabricators::Msg;
use crate::queries::QueryRequest;
use crate::signer::Signer;
use crate::tx::{Fee, TxResult, UnsignedTx};

/// Wraps `msgs` in a transaction, signs it and submits it once.
///
/// A transaction the chain accepted but failed to execute comes back as
/// [`Error::TransactionFailed`] with the chain's log untouched.
#[instrument("dispatch", skip_all, fields(msgs = msgs.len()))]
pub async fn broadcast<C, S>(
    client: &C,
    signer: &S,
    msgs: Vec<Msg>,
    fee: &Fee,
    memo: &str,
) -> Result<TxResult>
where
    C: ChainClient,
    S: Signer,
{
    for msg in &msgs {
        trace!(contract = %msg.contract(), msg = %msg.execute_msg(), "execute");
    }

    let unsigned = UnsignedTx::new(msgs, fee.clone(), memo);
    debug!(sender = %signer.address(), fee = %fee.amount, gas = fee.gas, "signing");

    let signed = signer.sign(&unsigned).await?;
    let result = client.broadcast(&signed).await?;

    if !result.is_success() {
        warn!(txhash = %result.txhash, code = result.code, "transaction failed");
        return Err(Error::TransactionFailed {
            txhash: result.txhash,
            code: result.code,
            codespace: result.codespace,
            raw_log: result.raw_log,
            response: result.raw,
        });
    }

    info!(txhash = %result.txhash, "transaction broadcast");
    Ok(result)
}

#[instrument("dispatch", skip_all, fields(contract = %request.contract))]
pub async fn query<C: ChainClient>(client: &C, request: &QueryRequest) -> Result<QueryResult> {
    client.query(&request.contract, &request.msg).await
}
