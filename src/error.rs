use miette::Diagnostic;
use thiserror::Error;

use crate::addresses::ContractName;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejections produced while turning raw CLI text into typed values.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid address {input:?}: {reason}")]
    #[diagnostic(
        code(anchorcli::input::address),
        help("addresses are bech32 strings starting with `terra1`")
    )]
    InvalidAddress { input: String, reason: String },

    #[error("invalid number {0:?}")]
    #[diagnostic(code(anchorcli::input::number))]
    InvalidNumber(String),

    #[error("invalid decimal {0:?}")]
    #[diagnostic(
        code(anchorcli::input::decimal),
        help("decimals look like `0.35`, with at most 18 fractional digits")
    )]
    InvalidDecimal(String),

    #[error("invalid coins {0:?}")]
    #[diagnostic(
        code(anchorcli::input::coins),
        help("coins look like `150000uusd` or `1000uusd,10uluna`")
    )]
    InvalidCoins(String),
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidInput(#[from] ParseError),

    #[error("no chain id given")]
    #[diagnostic(
        code(anchorcli::chain::missing),
        help("pass --chain-id, set ANCHORCLI_CHAIN_ID or add `chain_id` to the config file")
    )]
    MissingChainId,

    #[error("unknown chain id {0:?}")]
    #[diagnostic(code(anchorcli::chain::unknown))]
    UnknownChain(String),

    #[error("exec commands need a signing key")]
    #[diagnostic(
        code(anchorcli::signer::missing),
        help("pass --from, set ANCHORCLI_FROM or add `from` to the config file")
    )]
    MissingSigner,

    #[error("address provider could not resolve {contract}: {reason}")]
    #[diagnostic(code(anchorcli::address::resolution))]
    AddressResolution {
        contract: ContractName,
        reason: String,
    },

    #[error("could not load address table from {source_name}: {reason}")]
    #[diagnostic(code(anchorcli::address::config))]
    AddressConfig { source_name: String, reason: String },

    #[error("could not load config: {0}")]
    #[diagnostic(code(anchorcli::config))]
    Config(String),

    #[error("signing failed: {0}")]
    #[diagnostic(code(anchorcli::signer::sign))]
    Signing(String),

    #[error("broadcast rejected with status {status}: {body}")]
    #[diagnostic(code(anchorcli::tx::broadcast))]
    Broadcast { status: u16, body: String },

    #[error("transaction {txhash} failed with code {code} ({codespace}): {raw_log}")]
    #[diagnostic(code(anchorcli::tx::failed))]
    TransactionFailed {
        txhash: String,
        code: u32,
        codespace: String,
        raw_log: String,
        response: serde_json::Value,
    },

    #[error("query failed with status {status}: {body}")]
    #[diagnostic(code(anchorcli::query))]
    Query { status: u16, body: String },

    #[error(transparent)]
    #[diagnostic(code(anchorcli::transport))]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    #[diagnostic(code(anchorcli::encoding))]
    Encoding(#[from] serde_json::Error),
}

impl Error {
    pub fn resolution(contract: ContractName, reason: impl Into<String>) -> Self {
        Error::AddressResolution {
            contract,
            reason: reason.into(),
        }
    }
}
