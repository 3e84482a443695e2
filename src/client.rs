use comfy_table::Table;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::output::OutputFormatter;
use crate::tx::{SignedTx, TxResult};
use crate::types::AccAddress;

/// The two calls this client ever makes against a chain.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    async fn broadcast(&self, tx: &SignedTx) -> Result<TxResult>;
    async fn query(&self, contract: &AccAddress, msg: &Value) -> Result<QueryResult>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub height: String,
    pub result: Value,
}

/// Client for the Terra LCD REST API.
#[derive(Debug, Clone)]
pub struct LcdClient {
    base: Url,
    http: reqwest::Client,
}

impl LcdClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be used as an lcd url", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn status_and_body(response: Response) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
    (status, body)
}

impl ChainClient for LcdClient {
    #[instrument("broadcast", skip_all)]
    async fn broadcast(&self, tx: &SignedTx) -> Result<TxResult> {
        let url = self.endpoint(&["txs"])?;
        debug!(%url, "broadcasting transaction");

        let response = self
            .http
            .post(url)
            .json(&json!({ "tx": tx.0, "mode": "sync" }))
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = status_and_body(response).await;
            return Err(Error::Broadcast { status, body });
        }

        let raw: Value = response.json().await?;
        Ok(TxResult::from_response(raw)?)
    }

    #[instrument("query", skip_all, fields(contract = %contract))]
    async fn query(&self, contract: &AccAddress, msg: &Value) -> Result<QueryResult> {
        let mut url = self.endpoint(&["wasm", "contracts", contract.as_str(), "store"])?;
        url.query_pairs_mut()
            .append_pair("query_msg", &serde_json::to_string(msg)?);
        debug!(%url, "querying contract");

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            let (status, body) = status_and_body(response).await;
            return Err(Error::Query { status, body });
        }

        Ok(response.json().await?)
    }
}

impl OutputFormatter for TxResult {
    fn to_table(&self) {
        let mut table = Table::new();

        table.set_header(vec!["Property", "Value"]);
        table.add_row(vec!["Tx hash", &self.txhash]);
        table.add_row(vec!["Height", &self.height]);
        table.add_row(vec!["Code", &self.code.to_string()]);
        if !self.codespace.is_empty() {
            table.add_row(vec!["Codespace", &self.codespace]);
        }
        table.add_row(vec!["Raw log", &self.raw_log]);

        println!("{table}");
    }

    fn to_json(&self) {
        println!("{}", serde_json::to_string_pretty(&self.raw).unwrap());
    }
}

impl OutputFormatter for QueryResult {
    fn to_table(&self) {
        let mut table = Table::new();

        table.set_header(vec!["Field", "Value"]);
        match &self.result {
            Value::Object(fields) => {
                for (key, value) in fields {
                    table.add_row(vec![key.clone(), cell(value)]);
                }
            }
            other => {
                table.add_row(vec!["result".to_string(), cell(other)]);
            }
        }

        println!("{table}");
    }

    fn to_json(&self) {
        println!("{}", serde_json::to_string_pretty(&self.result).unwrap());
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap(),
    }
}
