use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::network::NetworkName;
use crate::types::AccAddress;

mod env;
mod json;

pub use env::{EnvAddressProvider, ProcessEnv};
pub use json::JsonAddressProvider;

/// Logical role of an Anchor contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ContractName {
    Market,
    Custody,
    Overseer,
    Oracle,
    #[strum(to_string = "bAsset")]
    BAsset,
    #[strum(to_string = "bAssetToken")]
    BAssetToken,
    #[strum(to_string = "bAssetHub")]
    BAssetHub,
    #[strum(to_string = "bAssetReward")]
    BAssetReward,
    #[strum(to_string = "aToken")]
    AToken,
    Interest,
    Liquidation,
}

impl ContractName {
    /// Key under which every address source stores this contract.
    pub fn key(&self) -> &'static str {
        match self {
            ContractName::Market => "mmMarket",
            ContractName::Custody => "mmCustody",
            ContractName::Overseer => "mmOverseer",
            ContractName::Oracle => "mmOracle",
            ContractName::Interest => "mmInterest",
            ContractName::Liquidation => "mmLiquidation",
            ContractName::AToken => "aUST",
            ContractName::BAsset => "bAsset",
            ContractName::BAssetToken => "bAssetToken",
            ContractName::BAssetHub => "bLuna",
            ContractName::BAssetReward => "bAssetReward",
        }
    }
}

/// Resolves contract roles to addresses for the network it was built for.
///
/// Command modules only ever talk to this trait, so the backing source can be
/// swapped without touching them.
pub trait AddressProvider {
    fn resolve(&self, contract: ContractName) -> Result<AccAddress>;

    fn market(&self) -> Result<AccAddress> {
        self.resolve(ContractName::Market)
    }

    fn custody(&self) -> Result<AccAddress> {
        self.resolve(ContractName::Custody)
    }

    fn overseer(&self) -> Result<AccAddress> {
        self.resolve(ContractName::Overseer)
    }

    fn oracle(&self) -> Result<AccAddress> {
        self.resolve(ContractName::Oracle)
    }

    fn b_asset_token(&self) -> Result<AccAddress> {
        self.resolve(ContractName::BAssetToken)
    }

    fn a_token(&self) -> Result<AccAddress> {
        self.resolve(ContractName::AToken)
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressSource {
    /// Address table bundled with the binary, or the file given by --address-file
    #[default]
    Json,
    /// ANCHOR_<key> environment variables, read on every lookup
    Env,
}

/// Builds the provider selected for this invocation.
pub fn provider_for(
    source: AddressSource,
    network: NetworkName,
    address_file: Option<&Path>,
) -> Result<Box<dyn AddressProvider>> {
    let provider: Box<dyn AddressProvider> = match (source, address_file) {
        (AddressSource::Json, Some(path)) => {
            Box::new(JsonAddressProvider::from_file(path, network)?)
        }
        (AddressSource::Json, None) => Box::new(JsonAddressProvider::bundled(network)?),
        (AddressSource::Env, _) => Box::new(EnvAddressProvider::new(ProcessEnv)),
    };

    Ok(provider)
}
