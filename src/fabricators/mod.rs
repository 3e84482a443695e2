//! Message fabricators.
//!
//! Each fabricator takes the typed parameters of one contract operation and
//! returns a closure that, given an [`AddressProvider`], produces the messages
//! to broadcast. Nothing here performs I/O.

use base64::Engine;
use serde::Serialize;
use serde_json::Value;

use crate::addresses::AddressProvider;
use crate::error::Result;
use crate::types::{AccAddress, Coins, Uint128};

pub mod custody;
pub mod market;
pub mod overseer;

/// `wasm/MsgExecuteContract` in the legacy amino JSON shape the LCD accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    #[serde(rename = "wasm/MsgExecuteContract")]
    ExecuteContract(MsgExecuteContract),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MsgExecuteContract {
    pub sender: AccAddress,
    pub contract: AccAddress,
    pub execute_msg: Value,
    pub coins: Coins,
}

impl Msg {
    pub fn execute(
        sender: &AccAddress,
        contract: AccAddress,
        execute_msg: &impl Serialize,
        coins: Coins,
    ) -> Result<Self> {
        Ok(Msg::ExecuteContract(MsgExecuteContract {
            sender: sender.clone(),
            contract,
            execute_msg: serde_json::to_value(execute_msg)?,
            coins,
        }))
    }

    pub fn contract(&self) -> &AccAddress {
        match self {
            Msg::ExecuteContract(msg) => &msg.contract,
        }
    }

    pub fn execute_msg(&self) -> &Value {
        match self {
            Msg::ExecuteContract(msg) => &msg.execute_msg,
        }
    }
}

/// Produces the messages of one operation once addresses are known.
pub trait Fabricator: FnOnce(&dyn AddressProvider) -> Result<Vec<Msg>> {}

impl<F> Fabricator for F where F: FnOnce(&dyn AddressProvider) -> Result<Vec<Msg>> {}

/// cw20 `send`: moves tokens to `contract` and triggers its receive hook.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Cw20ExecuteMsg {
    Send {
        contract: AccAddress,
        amount: Uint128,
        msg: String,
    },
}

pub(crate) fn cw20_send(
    sender: &AccAddress,
    token: AccAddress,
    recipient: AccAddress,
    amount: Uint128,
    hook: &impl Serialize,
) -> Result<Msg> {
    let hook = serde_json::to_vec(hook)?;
    let send = Cw20ExecuteMsg::Send {
        contract: recipient,
        amount,
        msg: base64::engine::general_purpose::STANDARD.encode(hook),
    };

    Msg::execute(sender, token, &send, Coins::default())
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::addresses::{ContractName, JsonAddressProvider};
    use crate::network::NetworkName;

    pub const SENDER: &str = "terra1qnufjmd8vwm6j6d3q28wxqr4d8408f340plraj";

    pub fn sender() -> AccAddress {
        SENDER.parse().unwrap()
    }

    pub fn mainnet() -> JsonAddressProvider {
        JsonAddressProvider::bundled(NetworkName::Mainnet).unwrap()
    }

    pub fn fabricate(fabricator: impl Fabricator) -> Vec<Msg> {
        let provider = mainnet();
        let provider: &dyn AddressProvider = &provider;
        fabricator(provider).unwrap()
    }

    pub fn address_of(contract: ContractName) -> AccAddress {
        mainnet().resolve(contract).unwrap()
    }

    #[test]
    fn execute_msg_uses_amino_shape() {
        let msg = Msg::execute(
            &sender(),
            address_of(ContractName::Market),
            &json!({ "deposit_stable": {} }),
            Coins(vec![crate::types::Coin::stable(Uint128(100))]),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "type": "wasm/MsgExecuteContract",
                "value": {
                    "sender": SENDER,
                    "contract": "terra1sepfj7s0aeg5967uxnfk4thzlerrsktkpelm5s",
                    "execute_msg": { "deposit_stable": {} },
                    "coins": [{ "denom": "uusd", "amount": "100" }],
                }
            })
        );
    }

    #[test]
    fn cw20_send_encodes_hook() {
        let msg = cw20_send(
            &sender(),
            address_of(ContractName::AToken),
            address_of(ContractName::Market),
            Uint128(7),
            &json!({ "redeem_stable": {} }),
        )
        .unwrap();

        assert_eq!(msg.contract(), &address_of(ContractName::AToken));
        assert_eq!(
            msg.execute_msg(),
            &json!({
                "send": {
                    "contract": "terra1sepfj7s0aeg5967uxnfk4thzlerrsktkpelm5s",
                    "amount": "7",
                    // {"redeem_stable":{}}
                    "msg": "eyJyZWRlZW1fc3RhYmxlIjp7fX0=",
                }
            })
        );
    }
}
