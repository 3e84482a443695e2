use serde::Serialize;

use super::{cw20_send, Fabricator, Msg};
use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Coin, Coins, Decimal, Uint128};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ExecuteMsg {
    DepositStable {},
    BorrowStable {
        borrow_amount: Uint128,
        #[serde(skip_serializing_if = "Option::is_none")]
        to: Option<AccAddress>,
    },
    RepayStable {},
    UpdateConfig {
        #[serde(skip_serializing_if = "Option::is_none")]
        owner_addr: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        interest_model: Option<AccAddress>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_borrow_factor: Option<Decimal>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Cw20HookMsg {
    RedeemStable {},
}

/// Shared by deposit, redeem and repay: who sends how much.
#[derive(Debug, Clone, PartialEq)]
pub struct StableAmount {
    pub address: AccAddress,
    pub amount: Uint128,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowStable {
    pub address: AccAddress,
    pub borrow_amount: Uint128,
    pub to: Option<AccAddress>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConfig {
    pub address: AccAddress,
    pub owner_addr: Option<AccAddress>,
    pub interest_model: Option<AccAddress>,
    pub max_borrow_factor: Option<Decimal>,
}

pub fn deposit_stable(params: StableAmount) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        Ok(vec![Msg::execute(
            &params.address,
            addresses.market()?,
            &ExecuteMsg::DepositStable {},
            Coins(vec![Coin::stable(params.amount)]),
        )?])
    }
}

/// Returns aUST to the market in exchange for the underlying stable coins.
pub fn redeem_stable(params: StableAmount) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        Ok(vec![cw20_send(
            &params.address,
            addresses.a_token()?,
            addresses.market()?,
            params.amount,
            &Cw20HookMsg::RedeemStable {},
        )?])
    }
}

pub fn borrow_stable(params: BorrowStable) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        let msg = ExecuteMsg::BorrowStable {
            borrow_amount: params.borrow_amount,
            to: params.to,
        };
        Ok(vec![Msg::execute(
            &params.address,
            addresses.market()?,
            &msg,
            Coins::default(),
        )?])
    }
}

pub fn repay_stable(params: StableAmount) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        Ok(vec![Msg::execute(
            &params.address,
            addresses.market()?,
            &ExecuteMsg::RepayStable {},
            Coins(vec![Coin::stable(params.amount)]),
        )?])
    }
}

pub fn update_config(params: UpdateConfig) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        let msg = ExecuteMsg::UpdateConfig {
            owner_addr: params.owner_addr,
            interest_model: params.interest_model,
            max_borrow_factor: params.max_borrow_factor,
        };
        Ok(vec![Msg::execute(
            &params.address,
            addresses.market()?,
            &msg,
            Coins::default(),
        )?])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::addresses::ContractName;
    use crate::fabricators::tests::{address_of, fabricate, sender, SENDER};

    #[test]
    fn deposit_attaches_stable_coins() {
        let msgs = fabricate(deposit_stable(StableAmount {
            address: sender(),
            amount: Uint128(1_000_000),
        }));

        let Msg::ExecuteContract(msg) = &msgs[0];
        assert_eq!(msg.contract, address_of(ContractName::Market));
        assert_eq!(msg.execute_msg, json!({ "deposit_stable": {} }));
        assert_eq!(msg.coins, Coins(vec![Coin::new(1_000_000u128, "uusd")]));
    }

    #[test]
    fn redeem_sends_a_token_to_market() {
        let msgs = fabricate(redeem_stable(StableAmount {
            address: sender(),
            amount: Uint128(42),
        }));

        assert_eq!(msgs[0].contract(), &address_of(ContractName::AToken));
        assert_eq!(msgs[0].execute_msg()["send"]["amount"], json!("42"));
    }

    #[test]
    fn borrow_to_self_omits_recipient() {
        let msgs = fabricate(borrow_stable(BorrowStable {
            address: sender(),
            borrow_amount: Uint128(10),
            to: None,
        }));

        assert_eq!(
            msgs[0].execute_msg(),
            &json!({ "borrow_stable": { "borrow_amount": "10" } })
        );
    }

    #[test]
    fn borrow_to_other_address() {
        let msgs = fabricate(borrow_stable(BorrowStable {
            address: sender(),
            borrow_amount: Uint128(10),
            to: Some(sender()),
        }));

        assert_eq!(
            msgs[0].execute_msg(),
            &json!({ "borrow_stable": { "borrow_amount": "10", "to": SENDER } })
        );
    }

    #[test]
    fn update_config_keeps_decimal_text() {
        let msgs = fabricate(update_config(UpdateConfig {
            address: sender(),
            owner_addr: None,
            interest_model: None,
            max_borrow_factor: Some("0.95".parse().unwrap()),
        }));

        assert_eq!(
            msgs[0].execute_msg(),
            &json!({ "update_config": { "max_borrow_factor": "0.95" } })
        );
    }
}
