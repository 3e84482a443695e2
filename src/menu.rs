//! The exec and query harnesses every contract command runs through.
//!
//! Options are already typed by the time a harness runs (clap applies the
//! `parse` value parsers). From there each invocation resolves the network
//! and the address provider exactly once, calls the handler, then hands the
//! outcome to the dispatcher. Any failure stops the pipeline where it happens.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::addresses::{self, AddressProvider, AddressSource};
use crate::backend::Backend;
use crate::client::QueryResult;
use crate::dispatch;
use crate::error::{Error, Result};
use crate::fabricators::Fabricator;
use crate::network::{self, NetworkName};
use crate::output::{OutputFormat, OutputFormatter};
use crate::queries::QueryBuilder;
use crate::signer::Signer;
use crate::tx::{Fee, TxResult};
use crate::types::AccAddress;

/// Global settings every command invocation starts from.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub chain_id: Option<String>,
    pub address_source: AddressSource,
    pub address_file: Option<PathBuf>,
    pub from: Option<String>,
    pub fee: Fee,
    pub memo: String,
}

/// Network and addresses for one invocation. Built once, then only read.
pub struct Resolved {
    pub chain_id: String,
    pub network: NetworkName,
    pub addresses: Box<dyn AddressProvider>,
}

impl Invocation {
    #[instrument("resolve", skip_all)]
    pub fn resolve(&self) -> Result<Resolved> {
        let chain_id = self.chain_id.clone().ok_or(Error::MissingChainId)?;
        let network = network::resolve(&chain_id)?;
        let addresses =
            addresses::provider_for(self.address_source, network, self.address_file.as_deref())?;

        info!(%chain_id, %network, source = ?self.address_source, "addresses ready");

        Ok(Resolved {
            chain_id,
            network,
            addresses,
        })
    }
}

/// Builds, signs and broadcasts the messages produced by `handler`.
///
/// The handler receives the signer's address and returns the fabricator for
/// the operation; the fabricator then gets the resolved addresses.
pub async fn exec<B, H, F>(invocation: &Invocation, backend: &B, handler: H) -> Result<TxResult>
where
    B: Backend,
    H: FnOnce(&AccAddress) -> F,
    F: Fabricator,
{
    let key = invocation.from.as_deref().ok_or(Error::MissingSigner)?;
    let resolved = invocation.resolve()?;

    let signer = backend.signer(key, &resolved).await?;
    let client = backend.client(&resolved)?;

    let fabricate = handler(signer.address());
    let msgs = fabricate(resolved.addresses.as_ref())?;

    dispatch::broadcast(&client, &signer, msgs, &invocation.fee, &invocation.memo).await
}

/// Builds the query produced by `builder` and runs it once.
pub async fn query<B, Q>(invocation: &Invocation, backend: &B, builder: Q) -> Result<QueryResult>
where
    B: Backend,
    Q: QueryBuilder,
{
    let resolved = invocation.resolve()?;
    let client = backend.client(&resolved)?;

    let request = builder(resolved.addresses.as_ref())?;

    dispatch::query(&client, &request).await
}

/// [`exec`] with the context's backend, printing the result.
pub async fn run_exec<B, H, F>(ctx: &crate::Context<B>, handler: H) -> miette::Result<()>
where
    B: Backend,
    H: FnOnce(&AccAddress) -> F,
    F: Fabricator,
{
    match exec(&ctx.invocation, &ctx.backend, handler).await {
        Ok(result) => {
            result.output(&ctx.output_format);
            Ok(())
        }
        Err(err) => {
            // json callers still get the chain's full reply on a failed tx
            if let (OutputFormat::Json, Error::TransactionFailed { response, .. }) =
                (ctx.output_format, &err)
            {
                println!("{}", serde_json::to_string_pretty(response).unwrap());
            }
            Err(err.into())
        }
    }
}

/// [`query`] with the context's backend, printing the result.
pub async fn run_query<B, Q>(ctx: &crate::Context<B>, builder: Q) -> miette::Result<()>
where
    B: Backend,
    Q: QueryBuilder,
{
    let result = query(&ctx.invocation, &ctx.backend, builder).await?;
    result.output(&ctx.output_format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::backend::testing::{Recorder, Unreachable, SIGNER};
    use crate::fabricators::{custody, Msg};
    use crate::queries;
    use crate::types::{Limit, Redemption};

    fn invocation(chain_id: &str) -> Invocation {
        Invocation {
            chain_id: Some(chain_id.to_string()),
            from: Some("alice".to_string()),
            ..Default::default()
        }
    }

    fn untouched(_: &AccAddress) -> impl Fabricator {
        |_: &dyn AddressProvider| -> Result<Vec<Msg>> { panic!("fabricator must not run") }
    }

    fn untouched_query() -> impl QueryBuilder {
        |_: &dyn AddressProvider| -> Result<queries::QueryRequest> {
            panic!("query builder must not run")
        }
    }

    fn address_file(contents: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.to_string().as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn unknown_chain_stops_before_handler() {
        let result = exec(&invocation("columbus-1"), &Unreachable, untouched).await;
        assert!(matches!(result, Err(Error::UnknownChain(id)) if id == "columbus-1"));

        let result = query(&invocation("columbus-1"), &Unreachable, untouched_query()).await;
        assert!(matches!(result, Err(Error::UnknownChain(_))));
    }

    #[tokio::test]
    async fn missing_chain_id_is_an_error() {
        let invocation = Invocation {
            from: Some("alice".into()),
            ..Default::default()
        };
        let result = exec(&invocation, &Unreachable, untouched).await;
        assert!(matches!(result, Err(Error::MissingChainId)));
    }

    #[tokio::test]
    async fn missing_signer_fails_before_resolution() {
        let invocation = Invocation {
            chain_id: Some("not-a-chain".into()),
            ..Default::default()
        };
        let result = exec(&invocation, &Unreachable, untouched).await;
        assert!(matches!(result, Err(Error::MissingSigner)));
    }

    #[tokio::test]
    async fn unreadable_address_file_stops_before_handler() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            address_file: Some(dir.path().join("missing.json")),
            ..invocation("columbus-4")
        };

        let result = query(&invocation, &Unreachable, untouched_query()).await;
        assert!(matches!(result, Err(Error::AddressConfig { .. })));
    }

    #[tokio::test]
    async fn query_runs_once_with_resolved_contract() {
        let recorder = Recorder::default();
        let builder = queries::custody::borrowers(queries::custody::Borrowers {
            start_after: Some(SIGNER.parse().unwrap()),
            limit: Limit::AtMost(10),
        });

        let result = query(&invocation("columbus-4"), &&recorder, builder)
            .await
            .unwrap();

        let queries = recorder.queries.borrow();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].0.as_str(),
            "terra1ptjp2vfjrwh0j0faj9r6katm640kgjxnwwq9kn"
        );
        let expected = json!({ "borrowers": { "start_after": SIGNER, "limit": 10 } });
        assert_eq!(queries[0].1, expected);
        assert_eq!(result.result, json!({ "echo": expected }));
        assert_eq!(recorder.clients_built.get(), 1);
    }

    #[tokio::test]
    async fn exec_signs_and_broadcasts_once() {
        let recorder = Recorder::default();
        let invocation = Invocation {
            memo: "from tests".into(),
            ..invocation("tequila-0004")
        };

        let result = exec(&invocation, &&recorder, |sender| {
            custody::withdraw_collateral(custody::WithdrawCollateral {
                address: sender.clone(),
                amount: Redemption::All,
            })
        })
        .await
        .unwrap();

        assert_eq!(result.txhash, "CAFE");
        assert_eq!(recorder.signed_with.borrow().as_deref(), Some("alice"));

        let broadcasts = recorder.broadcasts.borrow();
        assert_eq!(broadcasts.len(), 1);
        let tx = &broadcasts[0];
        assert_eq!(tx["memo"], json!("from tests"));
        assert_eq!(tx["signatures"][0]["signature"], json!("c2ln"));
        assert_eq!(tx["fee"]["gas"], json!("1000000"));

        let msg = &tx["msg"][0]["value"];
        assert_eq!(msg["sender"], json!(SIGNER));
        assert_eq!(
            msg["contract"],
            json!("terra1w8kz3qdvjy83l52wjfjncfryys82lh4g4dl9h3")
        );
        assert_eq!(msg["execute_msg"], json!({ "withdraw_collateral": {} }));
    }

    #[tokio::test]
    async fn failed_transaction_is_surfaced_verbatim() {
        let recorder = Recorder::answering_tx(json!({
            "height": "0",
            "txhash": "DEAD",
            "code": 5,
            "codespace": "sdk",
            "raw_log": "insufficient funds: 10uusd is smaller than 150000uusd",
        }));

        let result = exec(&invocation("columbus-4"), &&recorder, |sender| {
            custody::withdraw_collateral(custody::WithdrawCollateral {
                address: sender.clone(),
                amount: Redemption::All,
            })
        })
        .await;

        match result {
            Err(Error::TransactionFailed {
                txhash,
                code,
                codespace,
                raw_log,
                response,
            }) => {
                assert_eq!(response["txhash"], json!("DEAD"));
                assert_eq!(txhash, "DEAD");
                assert_eq!(code, 5);
                assert_eq!(codespace, "sdk");
                assert_eq!(raw_log, "insufficient funds: 10uusd is smaller than 150000uusd");
            }
            other => panic!("expected a failed transaction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_transaction_report_keeps_chain_reply() {
        let reply = json!({ "txhash": "BEEF", "code": 3, "raw_log": "unauthorized" });
        let recorder = Recorder::answering_tx(reply.clone());
        let ctx = crate::testing::context("columbus-4", &recorder);

        let report = run_exec(&ctx, |sender| {
            custody::withdraw_collateral(custody::WithdrawCollateral {
                address: sender.clone(),
                amount: Redemption::All,
            })
        })
        .await
        .unwrap_err();

        match report.downcast_ref::<Error>() {
            Some(Error::TransactionFailed { response, .. }) => assert_eq!(response, &reply),
            other => panic!("expected a failed transaction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_contract_never_broadcasts() {
        let table = address_file(&json!({
            "mainnet": { "mmMarket": "terra1sepfj7s0aeg5967uxnfk4thzlerrsktkpelm5s" }
        }));
        let recorder = Recorder::default();
        let invocation = Invocation {
            address_file: Some(table.path().to_path_buf()),
            ..invocation("columbus-4")
        };

        let result = exec(&invocation, &&recorder, |sender| {
            custody::withdraw_collateral(custody::WithdrawCollateral {
                address: sender.clone(),
                amount: Redemption::All,
            })
        })
        .await;

        assert!(matches!(result, Err(Error::AddressResolution { .. })));
        assert!(recorder.broadcasts.borrow().is_empty());
    }
}
