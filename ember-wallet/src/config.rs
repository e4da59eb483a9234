use std::{fs, path::{Path, PathBuf}};

use ember_common::{account::AccountInfo, address::ETH_ADDRESS_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::WalletError;

fn default_address_length() -> usize {
    ETH_ADDRESS_LENGTH
}

/// Defaults for the account CLI, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Expected address length in bytes.
    #[serde(default = "default_address_length")]
    pub address_length: usize,

    #[serde(default)]
    pub accounts_path: Option<PathBuf>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address_length: default_address_length(),
            accounts_path: None,
        }
    }
}

impl WalletConfig {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WalletError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str::<WalletConfig>(&data)?;
        debug!(
            path = %path.display(),
            address_length = config.address_length,
            "loaded wallet config"
        );
        Ok(config)
    }
}

/// Reads a JSON array of account records.
pub fn load_accounts<P: AsRef<Path>>(path: P) -> Result<Vec<AccountInfo>, WalletError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let accounts = serde_json::from_str::<Vec<AccountInfo>>(&data)?;
    debug!(path = %path.display(), count = accounts.len(), "loaded accounts");
    Ok(accounts)
}
