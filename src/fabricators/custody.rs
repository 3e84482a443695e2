use serde::Serialize;

use super::{cw20_send, Fabricator, Msg};
use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Coins, Redemption, Uint128};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum ExecuteMsg {
    UpdateConfig {
        #[serde(skip_serializing_if = "Option::is_none")]
        liquidation_contract: Option<AccAddress>,
    },
    WithdrawCollateral {
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<Uint128>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Cw20HookMsg {
    DepositCollateral {},
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConfig {
    pub address: AccAddress,
    pub liquidation_contract: Option<AccAddress>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepositCollateral {
    pub address: AccAddress,
    pub amount: Uint128,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawCollateral {
    pub address: AccAddress,
    pub amount: Redemption,
}

pub fn update_config(params: UpdateConfig) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        let msg = ExecuteMsg::UpdateConfig {
            liquidation_contract: params.liquidation_contract,
        };
        Ok(vec![Msg::execute(
            &params.address,
            addresses.custody()?,
            &msg,
            Coins::default(),
        )?])
    }
}

/// Sends bAsset tokens to custody, where they become collateral.
pub fn deposit_collateral(params: DepositCollateral) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        Ok(vec![cw20_send(
            &params.address,
            addresses.b_asset_token()?,
            addresses.custody()?,
            params.amount,
            &Cw20HookMsg::DepositCollateral {},
        )?])
    }
}

/// Withdraws spendable collateral. [`Redemption::All`] leaves the amount out
/// so the contract releases everything that is not locked.
pub fn withdraw_collateral(params: WithdrawCollateral) -> impl Fabricator {
    move |addresses: &dyn AddressProvider| -> Result<Vec<Msg>> {
        let amount = match params.amount {
            Redemption::All => None,
            Redemption::Amount(amount) => Some(amount),
        };
        Ok(vec![Msg::execute(
            &params.address,
            addresses.custody()?,
            &ExecuteMsg::WithdrawCollateral { amount },
            Coins::default(),
        )?])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::addresses::ContractName;
    use crate::fabricators::tests::{address_of, fabricate, sender};

    #[test]
    fn withdraw_all_omits_amount() {
        let msgs = fabricate(withdraw_collateral(WithdrawCollateral {
            address: sender(),
            amount: Redemption::All,
        }));

        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].contract(), &address_of(ContractName::Custody));
        assert_eq!(msgs[0].execute_msg(), &json!({ "withdraw_collateral": {} }));
    }

    #[test]
    fn withdraw_amount_is_sent_as_string() {
        let msgs = fabricate(withdraw_collateral(WithdrawCollateral {
            address: sender(),
            amount: Redemption::Amount(Uint128(1_000_000)),
        }));

        assert_eq!(
            msgs[0].execute_msg(),
            &json!({ "withdraw_collateral": { "amount": "1000000" } })
        );
    }

    #[test]
    fn deposit_goes_through_the_token() {
        let msgs = fabricate(deposit_collateral(DepositCollateral {
            address: sender(),
            amount: Uint128(5),
        }));

        assert_eq!(msgs[0].contract(), &address_of(ContractName::BAssetToken));
        assert_eq!(
            msgs[0].execute_msg()["send"]["contract"],
            json!(address_of(ContractName::Custody).as_str())
        );
        // {"deposit_collateral":{}}
        assert_eq!(
            msgs[0].execute_msg()["send"]["msg"],
            json!("eyJkZXBvc2l0X2NvbGxhdGVyYWwiOnt9fQ==")
        );
    }

    #[test]
    fn update_config_without_changes() {
        let msgs = fabricate(update_config(UpdateConfig {
            address: sender(),
            liquidation_contract: None,
        }));

        assert_eq!(msgs[0].execute_msg(), &json!({ "update_config": {} }));
    }
}
