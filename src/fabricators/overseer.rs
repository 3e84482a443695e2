use serde::Serialize;

use super::{Fabricator, Msg};
use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Coins, Uint128};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ExecuteMsg {
    LockCollateral {
        collaterals: Vec<(AccAddress, Uint128)>,
    },
    UnlockCollateral {
        collaterals: Vec<(AccAddress, Uint128)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collateral {
    pub address: AccAddress,
    pub amount: Uint128,
}

/// Locks deposited bAsset collateral so it counts towards the borrow limit.
pub fn lock_collateral(params: Collateral) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        let msg = ExecuteMsg::LockCollateral {
            collaterals: vec![(addresses.b_asset_token()?, params.amount)],
        };
        Ok(vec![Msg::execute(
            &params.address,
            addresses.overseer()?,
            &msg,
            Coins::default(),
        )?])
    }
}

pub fn unlock_collateral(params: Collateral) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        let msg = ExecuteMsg::UnlockCollateral {
            collaterals: vec![(addresses.b_asset_token()?, params.amount)],
        };
        Ok(vec![Msg::execute(
            &params.address,
            addresses.overseer()?,
            &msg,
            Coins::default(),
        )?])
    }
}
