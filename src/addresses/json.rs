use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::{AddressProvider, ContractName};
use crate::error::{Error, Result};
use crate::network::NetworkName;
use crate::types::AccAddress;

const BUNDLED: &str = include_str!("../../assets/addresses.json");

/// Address table keyed by network, then by contract key.
///
/// The table is read once when the provider is built. Entries are only
/// validated when looked up, so one bad entry does not take the rest down.
#[derive(Debug, Clone)]
pub struct JsonAddressProvider {
    network: NetworkName,
    entries: Option<Value>,
}

impl JsonAddressProvider {
    pub fn bundled(network: NetworkName) -> Result<Self> {
        Self::load("bundled address table", BUNDLED, network)
    }

    pub fn from_file(path: &Path, network: NetworkName) -> Result<Self> {
        let source_name = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::AddressConfig {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;

        Self::load(&source_name, &raw, network)
    }

    #[cfg(test)]
    pub fn from_json(raw: &str, network: NetworkName) -> Result<Self> {
        Self::load("inline address table", raw, network)
    }

    fn load(source_name: &str, raw: &str, network: NetworkName) -> Result<Self> {
        let mut table: Map<String, Value> =
            serde_json::from_str(raw).map_err(|e| Error::AddressConfig {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;

        debug!(source = source_name, %network, "loaded address table");

        let key: &'static str = network.into();
        Ok(Self {
            network,
            entries: table.remove(key),
        })
    }
}

impl AddressProvider for JsonAddressProvider {
    fn resolve(&self, contract: ContractName) -> Result<AccAddress> {
        let entries = match &self.entries {
            Some(Value::Object(entries)) => entries,
            Some(_) => {
                return Err(Error::resolution(
                    contract,
                    format!("addresses for network {} are not an object", self.network),
                ))
            }
            None => {
                return Err(Error::resolution(
                    contract,
                    format!("no addresses configured for network {}", self.network),
                ))
            }
        };

        let key = contract.key();
        let raw = match entries.get(key) {
            Some(Value::String(raw)) => raw,
            Some(_) => {
                return Err(Error::resolution(
                    contract,
                    format!("entry {key} for network {} is not a string", self.network),
                ))
            }
            None => {
                return Err(Error::resolution(
                    contract,
                    format!("key {key} missing for network {}", self.network),
                ))
            }
        };

        raw.parse::<AccAddress>()
            .map_err(|e| Error::resolution(contract, e.to_string()))
    }
}
