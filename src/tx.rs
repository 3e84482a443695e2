use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use serde_with::{serde_as, DisplayFromStr};

use crate::fabricators::Msg;
use crate::types::{Coin, Coins};

pub const DEFAULT_GAS: u64 = 1_000_000;
pub const DEFAULT_FEE_UUSD: u128 = 150_000;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fee {
    #[serde_as(as = "DisplayFromStr")]
    pub gas: u64,
    pub amount: Coins,
}

impl Default for Fee {
    fn default() -> Self {
        Self {
            gas: DEFAULT_GAS,
            amount: Coins(vec![Coin::new(DEFAULT_FEE_UUSD, crate::types::STABLE_DENOM)]),
        }
    }
}

/// Body of a `core/StdTx` before any signature is attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnsignedTx {
    pub msg: Vec<Msg>,
    pub fee: Fee,
    pub signatures: Vec<Value>,
    pub memo: String,
}

impl UnsignedTx {
    pub fn new(msg: Vec<Msg>, fee: Fee, memo: impl Into<String>) -> Self {
        Self {
            msg,
            fee,
            signatures: vec![],
            memo: memo.into(),
        }
    }

    /// The amino JSON document `terracli tx sign` expects.
    pub fn to_std_tx(&self) -> serde_json::Result<Value> {
        Ok(json!({
            "type": "core/StdTx",
            "value": serde_json::to_value(self)?,
        }))
    }
}

/// A signed `core/StdTx` body, ready for the LCD `/txs` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedTx(pub Value);

impl SignedTx {
    /// Accepts both the wrapped `{"type": .., "value": ..}` form and a bare body.
    pub fn from_std_tx(mut document: Value) -> Self {
        if document.get("type").is_some() {
            if let Some(value) = document.get_mut("value") {
                return Self(value.take());
            }
        }
        Self(document)
    }
}

/// What the LCD reports back after a broadcast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TxResult {
    pub txhash: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub codespace: String,
    #[serde(default)]
    pub raw_log: String,
    #[serde(skip)]
    pub raw: Value,
}

impl TxResult {
    pub fn from_response(raw: Value) -> serde_json::Result<Self> {
        let mut result: TxResult = serde_json::from_value(raw.clone())?;
        result.raw = raw;
        Ok(result)
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
