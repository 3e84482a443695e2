use serde::Serialize;

use super::{QueryBuilder, QueryRequest};
use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Limit};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum QueryMsg {
    Config {},
    State {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_height: Option<u64>,
    },
    EpochState {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_height: Option<u64>,
    },
    BorrowerInfo {
        borrower: AccAddress,
        #[serde(skip_serializing_if = "Option::is_none")]
        block_height: Option<u64>,
    },
    BorrowerInfos {
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerInfo {
    pub borrower: AccAddress,
    pub block_height: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerInfos {
    pub start_after: Option<AccAddress>,
    pub limit: Limit,
}

pub fn config() -> impl QueryBuilder {
    |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.market()?, &QueryMsg::Config {})
    }
}

pub fn state(block_height: Option<u64>) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.market()?, &QueryMsg::State { block_height })
    }
}

pub fn epoch_state(block_height: Option<u64>) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.market()?, &QueryMsg::EpochState { block_height })
    }
}

pub fn borrower_info(params: BorrowerInfo) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.market()?,
            &QueryMsg::BorrowerInfo {
                borrower: params.borrower,
                block_height: params.block_height,
            },
        )
    }
}

pub fn borrower_infos(params: BorrowerInfos) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.market()?,
            &QueryMsg::BorrowerInfos {
                start_after: params.start_after,
                limit: params.limit.as_option(),
            },
        )
    }
}
