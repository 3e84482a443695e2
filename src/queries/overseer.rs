use serde::Serialize;

use super::{QueryBuilder, QueryRequest};
use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Limit};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum QueryMsg {
    Config {},
    EpochState {},
    Whitelist {
        #[serde(skip_serializing_if = "Option::is_none")]
        collateral_token: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    Collaterals {
        borrower: AccAddress,
    },
    AllCollaterals {
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    BorrowLimit {
        borrower: AccAddress,
        #[serde(skip_serializing_if = "Option::is_none")]
        block_time: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Whitelist {
    pub collateral_token: Option<AccAddress>,
    pub start_after: Option<AccAddress>,
    pub limit: Limit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllCollaterals {
    pub start_after: Option<AccAddress>,
    pub limit: Limit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowLimit {
    pub borrower: AccAddress,
    pub block_time: Option<u64>,
}

pub fn config() -> impl QueryBuilder {
    |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.overseer()?, &QueryMsg::Config {})
    }
}

pub fn epoch_state() -> impl QueryBuilder {
    |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.overseer()?, &QueryMsg::EpochState {})
    }
}

pub fn whitelist(params: Whitelist) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.overseer()?,
            &QueryMsg::Whitelist {
                collateral_token: params.collateral_token,
                start_after: params.start_after,
                limit: params.limit.as_option(),
            },
        )
    }
}

pub fn collaterals(borrower: AccAddress) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.overseer()?, &QueryMsg::Collaterals { borrower })
    }
}

pub fn all_collaterals(params: AllCollaterals) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.overseer()?,
            &QueryMsg::AllCollaterals {
                start_after: params.start_after,
                limit: params.limit.as_option(),
            },
        )
    }
}

pub fn borrow_limit(params: BorrowLimit) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.overseer()?,
            &QueryMsg::BorrowLimit {
                borrower: params.borrower,
                block_time: params.block_time,
            },
        )
    }
}
