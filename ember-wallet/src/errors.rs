use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Address error: {0}")]
    Address(#[from] ember_common::address::AddressError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

impl From<String> for WalletError {
    fn from(message: String) -> Self {
        WalletError::General(message)
    }
}

impl From<&str> for WalletError {
    fn from(message: &str) -> Self {
        WalletError::General(message.to_string())
    }
}
