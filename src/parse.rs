//! Parsers turning raw CLI text into typed values.
//!
//! Every function here doubles as a clap `value_parser`, so a command
//! handler only ever sees values that already passed validation.

use std::str::FromStr;

use crate::error::ParseError;
use crate::types::{AccAddress, Coins, Decimal, Uint128};

pub fn acc_address(s: &str) -> Result<AccAddress, ParseError> {
    s.parse()
}

/// Absent stays absent; a present value must be a valid address.
pub fn optional_acc_address(s: Option<&str>) -> Result<Option<AccAddress>, ParseError> {
    s.map(acc_address).transpose()
}

/// Plain base-10 integer. Signs, whitespace and separators are rejected.
pub fn int<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber(s.to_string()));
    }

    s.parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

pub fn uint128(s: &str) -> Result<Uint128, ParseError> {
    int::<u128>(s).map(Uint128)
}

pub fn decimal(s: &str) -> Result<Decimal, ParseError> {
    s.parse()
}

pub fn coins(s: &str) -> Result<Coins, ParseError> {
    s.parse()
}
