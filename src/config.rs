use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use tracing::debug;
use url::Url;

use crate::addresses::AddressSource;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::types::Coins;

pub const FILE_NAME: &str = ".anchorcli.toml";

/// Settings read from the config file. Every key is optional; command line
/// flags are layered on top with [`Config::overlay`].
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub chain_id: Option<String>,
    pub lcd: Option<Url>,
    pub node: Option<String>,
    pub from: Option<String>,
    pub terracli: Option<String>,
    pub address_source: Option<AddressSource>,
    pub address_file: Option<PathBuf>,
    pub gas: Option<u64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub fees: Option<Coins>,
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Loads `path`, or `$HOME/.anchorcli.toml` when no path is given. A
    /// missing file is an empty config.
    pub async fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => default_path()?,
        };

        match read_toml(&path).await? {
            Some(config) => {
                debug!(path = %path.display(), "loaded config file");
                Ok(config)
            }
            None => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Values set in `flags` win over values in `self`.
    pub fn overlay(self, flags: Config) -> Config {
        Config {
            chain_id: flags.chain_id.or(self.chain_id),
            lcd: flags.lcd.or(self.lcd),
            node: flags.node.or(self.node),
            from: flags.from.or(self.from),
            terracli: flags.terracli.or(self.terracli),
            address_source: flags.address_source.or(self.address_source),
            address_file: flags.address_file.or(self.address_file),
            gas: flags.gas.or(self.gas),
            fees: flags.fees.or(self.fees),
            output_format: flags.output_format.or(self.output_format),
        }
    }
}

fn default_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .ok_or_else(|| Error::Config("could not determine home directory".into()))?;

    Ok(PathBuf::from(home).join(FILE_NAME))
}

async fn read_toml(path: &Path) -> Result<Option<Config>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Config(format!("{}: {e}", path.display()))),
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}
