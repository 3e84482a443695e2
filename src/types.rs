use std::fmt;
use std::str::FromStr;

use bech32::{FromBase32, Variant};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::error::ParseError;

/// Bech32 human readable part of every Terra account and contract address.
pub const ADDRESS_HRP: &str = "terra";

/// Native denomination used for stable deposits, repayments and fees.
pub const STABLE_DENOM: &str = "uusd";

/// A validated Terra account or contract address.
///
/// Holding one of these means the string already passed the bech32 checks,
/// so nothing downstream has to validate it again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccAddress(String);

impl AccAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ParseError::InvalidAddress {
            input: s.to_string(),
            reason,
        };

        let (hrp, data, variant) = bech32::decode(s).map_err(|e| invalid(e.to_string()))?;

        if hrp != ADDRESS_HRP {
            return Err(invalid(format!("expected prefix `{ADDRESS_HRP}`, got `{hrp}`")));
        }
        if variant != Variant::Bech32 {
            return Err(invalid("bech32m addresses are not used on terra".into()));
        }

        let bytes = Vec::<u8>::from_base32(&data).map_err(|e| invalid(e.to_string()))?;
        match bytes.len() {
            20 | 32 => Ok(Self(s.to_lowercase())),
            n => Err(invalid(format!("unexpected payload length {n}"))),
        }
    }
}

impl<'de> Deserialize<'de> for AccAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token amount in micro units. Contracts expect it as a decimal string.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uint128(#[serde_as(as = "DisplayFromStr")] pub u128);

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

/// Fixed point decimal as the contracts encode it, e.g. `"0.35"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    pub const MAX_FRACTIONAL_DIGITS: usize = 18;
}

impl FromStr for Decimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        let valid = digits(whole)
            && fraction.map_or(true, |f| {
                digits(f) && f.len() <= Self::MAX_FRACTIONAL_DIGITS
            });

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::InvalidDecimal(s.to_string()))
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Uint128,
}

impl Coin {
    pub fn new(amount: impl Into<Uint128>, denom: &str) -> Self {
        Self {
            denom: denom.to_string(),
            amount: amount.into(),
        }
    }

    pub fn stable(amount: Uint128) -> Self {
        Self::new(amount, STABLE_DENOM)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(pub Vec<Coin>);

impl FromStr for Coins {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoins(s.to_string());

        s.split(',')
            .map(|item| {
                let split = item
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or_else(invalid)?;
                let (amount, denom) = item.split_at(split);
                if amount.is_empty() || !denom.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                let amount = amount.parse::<u128>().map_err(|_| invalid())?;
                Ok(Coin::new(amount, denom))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Coins)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.0.iter().map(Coin::to_string).collect();
        f.write_str(&items.join(","))
    }
}

/// Page size for list queries. Leaving `--limit` off means the contract's own
/// default applies, which is not the same thing as a limit of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unbounded,
    AtMost(u32),
}

impl Limit {
    pub fn as_option(&self) -> Option<u32> {
        match self {
            Limit::Unbounded => None,
            Limit::AtMost(n) => Some(*n),
        }
    }
}

impl From<Option<u32>> for Limit {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Limit::Unbounded, Limit::AtMost)
    }
}

/// How much collateral a withdrawal releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redemption {
    All,
    Amount(Uint128),
}

impl From<Option<Uint128>> for Redemption {
    fn from(value: Option<Uint128>) -> Self {
        value.map_or(Redemption::All, Redemption::Amount)
    }
}
