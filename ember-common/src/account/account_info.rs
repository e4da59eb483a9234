use serde::{Deserialize, Serialize};

/// An account as handed to the wallet UI by the account manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,

    #[serde(default)]
    pub name: String,

    /// Set when the signing key lives on a hardware device.
    #[serde(default)]
    pub hardware: bool,
}

impl AccountInfo {
    pub fn new(address: impl Into<String>, name: impl Into<String>, hardware: bool) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            hardware,
        }
    }
}

/// Read-only view over the two account fields lookups care about.
pub trait AccountRecord {
    fn address(&self) -> &str;

    fn is_hardware(&self) -> bool;
}

impl AccountRecord for AccountInfo {
    fn address(&self) -> &str {
        &self.address
    }

    fn is_hardware(&self) -> bool {
        self.hardware
    }
}

impl<T: AccountRecord + ?Sized> AccountRecord for &T {
    fn address(&self) -> &str {
        (**self).address()
    }

    fn is_hardware(&self) -> bool {
        (**self).is_hardware()
    }
}
