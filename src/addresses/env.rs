use tracing::debug;

use super::{AddressProvider, ContractName};
use crate::error::{Error, Result};
use crate::parse;
use crate::types::AccAddress;

/// Prepended to the contract key to form the variable name, e.g. `ANCHOR_mmMarket`.
pub const ENV_PREFIX: &str = "ANCHOR_";

/// Where variable values come from.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Reads addresses from environment variables.
///
/// Nothing is cached: every lookup reads the variable again, so a value that
/// changes between two lookups is seen by the second one.
#[derive(Debug, Clone, Default)]
pub struct EnvAddressProvider<E = ProcessEnv> {
    source: E,
}

impl<E: EnvSource> EnvAddressProvider<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    pub fn var_name(contract: ContractName) -> String {
        format!("{ENV_PREFIX}{}", contract.key())
    }
}

impl<E: EnvSource> AddressProvider for EnvAddressProvider<E> {
    fn resolve(&self, contract: ContractName) -> Result<AccAddress> {
        let name = Self::var_name(contract);
        debug!(%contract, variable = %name, "reading address from environment");

        let raw = self.source.var(&name);
        parse::optional_acc_address(raw.as_deref())
            .map_err(|e| Error::resolution(contract, format!("{name}: {e}")))?
            .ok_or_else(|| Error::resolution(contract, format!("{name} is not set")))
    }
}
