use thiserror::Error;

/// Reasons a candidate string is not a well-formed `0x` hex address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address must start with '0x'")]
    MissingPrefix,

    /// A character outside `[0-9A-Fa-f]` after the prefix.
    #[error("Invalid hex character '{character}' at index {index}")]
    InvalidCharacter { index: usize, character: char },

    #[error("Invalid address length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The requested byte length cannot be expressed as a character count.
    #[error("Byte length {0} is too large")]
    LengthOverflow(usize),

    #[error("Failed to decode address: {0}")]
    Decode(String),
}

impl From<hex::FromHexError> for AddressError {
    fn from(err: hex::FromHexError) -> Self {
        AddressError::Decode(err.to_string())
    }
}
