//! Query builders. Same shape as the fabricators: typed parameters in, a
//! closure over the [`AddressProvider`] out. The harness runs the resulting
//! request against the chain exactly once.

use serde::Serialize;
use serde_json::Value;

use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::AccAddress;

pub mod custody;
pub mod market;
pub mod overseer;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub contract: AccAddress,
    pub msg: Value,
}

impl QueryRequest {
    pub fn new(contract: AccAddress, msg: &impl Serialize) -> Result<Self> {
        Ok(Self {
            contract,
            msg: serde_json::to_value(msg)?,
        })
    }
}

pub trait QueryBuilder: FnOnce(&dyn AddressProvider) -> Result<QueryRequest> {}

impl<F> QueryBuilder for F where F: FnOnce(&dyn AddressProvider) -> Result<QueryRequest> {}
