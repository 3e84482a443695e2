use serde::Serialize;

use super::{QueryBuilder, QueryRequest};
use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Limit};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum QueryMsg {
    Config {},
    Borrower {
        address: AccAddress,
    },
    Borrowers {
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Borrower {
    pub address: AccAddress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Borrowers {
    pub start_after: Option<AccAddress>,
    pub limit: Limit,
}

pub fn config() -> impl QueryBuilder {
    |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(addresses.custody()?, &QueryMsg::Config {})
    }
}

pub fn borrower(params: Borrower) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.custody()?,
            &QueryMsg::Borrower {
                address: params.address,
            },
        )
    }
}

pub fn borrowers(params: Borrowers) -> impl QueryBuilder {
    move |addresses: &dyn AddressProvider| -> Result<QueryRequest> {
        QueryRequest::new(
            addresses.custody()?,
            &QueryMsg::Borrowers {
                start_after: params.start_after,
                limit: params.limit.as_option(),
            },
        )
    }
}
