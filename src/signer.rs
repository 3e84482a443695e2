use std::io::Write;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::tx::{SignedTx, UnsignedTx};
use crate::types::AccAddress;

pub const DEFAULT_TERRACLI: &str = "terracli";

#[allow(async_fn_in_trait)]
pub trait Signer {
    fn address(&self) -> &AccAddress;
    async fn sign(&self, tx: &UnsignedTx) -> Result<SignedTx>;
}

/// A key held by the `terracli` key store. Signing is delegated to the
/// binary so private keys never pass through this process.
#[derive(Debug, Clone)]
pub struct CliKey {
    binary: String,
    name: String,
    address: AccAddress,
    chain_id: String,
    node: Option<String>,
}

impl CliKey {
    #[instrument("load-key", skip_all, fields(name = %name))]
    pub async fn load(
        binary: &str,
        name: &str,
        chain_id: &str,
        node: Option<String>,
    ) -> Result<Self> {
        let output = Command::new(binary)
            .args(["keys", "show", name, "--address"])
            .output()
            .await
            .map_err(|e| Error::Signing(format!("could not run {binary}: {e}")))?;

        if !output.status.success() {
            return Err(Error::Signing(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        let address = raw.trim().parse::<AccAddress>().map_err(|e| {
            Error::Signing(format!("{binary} returned an unusable address for {name}: {e}"))
        })?;
        debug!(%address, "loaded signing key");

        Ok(Self {
            binary: binary.to_string(),
            name: name.to_string(),
            address,
            chain_id: chain_id.to_string(),
            node,
        })
    }
}

impl Signer for CliKey {
    fn address(&self) -> &AccAddress {
        &self.address
    }

    #[instrument("sign", skip_all, fields(name = %self.name))]
    async fn sign(&self, tx: &UnsignedTx) -> Result<SignedTx> {
        let mut unsigned = tempfile::Builder::new()
            .prefix("anchorcli-unsigned-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| Error::Signing(format!("could not create scratch file: {e}")))?;
        serde_json::to_writer(unsigned.as_file_mut(), &tx.to_std_tx()?)?;
        unsigned
            .flush()
            .map_err(|e| Error::Signing(format!("could not write scratch file: {e}")))?;

        let mut command = Command::new(&self.binary);
        command
            .arg("tx")
            .arg("sign")
            .arg(unsigned.path())
            .args(["--from", &self.name, "--chain-id", &self.chain_id])
            .args(["--output", "json"]);
        if let Some(node) = &self.node {
            command.args(["--node", node]);
        }

        // the key store may ask for a passphrase
        let output = command
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| Error::Signing(format!("could not run {}: {e}", self.binary)))?;

        if !output.status.success() {
            return Err(Error::Signing(format!(
                "{} tx sign exited with {}",
                self.binary, output.status
            )));
        }

        let document = serde_json::from_slice(&output.stdout)?;
        Ok(SignedTx::from_std_tx(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_a_signing_error() {
        let result = CliKey::load("/nonexistent/terracli", "alice", "columbus-4", None).await;
        assert!(matches!(result, Err(Error::Signing(_))));
    }
}
